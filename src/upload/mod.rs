mod form;
mod types;

pub use form::UploadForm;
pub use types::SelectedFile;
