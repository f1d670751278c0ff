use crate::analysis::error::{extract_detail, AnalysisError};
use crate::analysis::types::AnalysisResult;
use crate::upload::SelectedFile;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

const CSV_MIME: &str = "text/csv";

/// Posts feedback files to the `/analyze` endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AnalysisError> {
        let content = tokio::fs::read(&file.path)
            .await
            .map_err(|source| AnalysisError::ReadFile {
                path: file.path.clone(),
                source,
            })?;

        debug!(file = %file.name, bytes = content.len(), "Sending feedback file");

        let part = Part::bytes(content)
            .file_name(file.name.clone())
            .mime_str(CSV_MIME)?;
        let form = Form::new().part("file", part);

        let client = reqwest::Client::new();
        let response = client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            warn!(%status, detail = detail.as_deref().unwrap_or_default(), "Analysis request rejected");
            return Err(AnalysisError::Server { status, detail });
        }

        AnalysisResult::from_json(&body).map_err(AnalysisError::MalformedResponse)
    }
}
