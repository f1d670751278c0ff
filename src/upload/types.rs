use std::path::{Path, PathBuf};

/// A file the user picked that passed the `.csv` name check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    /// Builds a selection from a picked path, or `None` when the path has no
    /// CSV file name.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = display_name(&path)?;
        if !is_csv_name(&name) {
            return None;
        }
        Some(Self { path, name })
    }
}

pub fn display_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}

pub fn is_csv_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}
