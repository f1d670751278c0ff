use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to analyze feedback. Please try again.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis service returned {status}")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("failed to reach analysis service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
    #[error("Could not read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to start request runtime: {0}")]
    Runtime(std::io::Error),
}

impl AnalysisError {
    /// The text surfaced in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            AnalysisError::ReadFile { .. } => self.to_string(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pulls a usable `detail` string out of a failure body. Empty and non-string
/// details count as missing.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
