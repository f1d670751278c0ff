use crate::upload::types::{display_name, SelectedFile};
use std::path::PathBuf;
use tracing::{debug, info};

pub const INVALID_FILE_MESSAGE: &str = "Please select a CSV file.";
pub const MISSING_FILE_MESSAGE: &str = "Choose a CSV file before analyzing.";

/// Local selection state in front of the submission flow. Holds either a
/// validated CSV file or a validation message, never both.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadForm {
    selected: Option<SelectedFile>,
    validation_message: Option<String>,
}

impl UploadForm {
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn select_file(&mut self, candidate: Option<PathBuf>) {
        let Some(path) = candidate else {
            debug!("File selection cleared");
            self.selected = None;
            self.validation_message = None;
            return;
        };

        match SelectedFile::from_path(path.clone()) {
            Some(file) => {
                info!(file = %file.name, "Selected feedback file");
                self.selected = Some(file);
                self.validation_message = None;
            }
            None => {
                info!(
                    file = display_name(&path).as_deref().unwrap_or_default(),
                    "Rejected non-CSV selection"
                );
                self.selected = None;
                self.validation_message = Some(INVALID_FILE_MESSAGE.to_string());
            }
        }
    }

    /// Returns the file to hand to the orchestrator, or records why nothing
    /// can be submitted yet.
    pub fn confirm_submission(&mut self) -> Option<SelectedFile> {
        match &self.selected {
            Some(file) => Some(file.clone()),
            None => {
                self.validation_message = Some(MISSING_FILE_MESSAGE.to_string());
                None
            }
        }
    }

    pub fn can_submit(&self, in_flight: bool) -> bool {
        self.selected.is_some() && !in_flight
    }

    /// Drops the chosen file once its outcome is on screen.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn clear(&mut self) {
        *self = UploadForm::default();
    }
}
