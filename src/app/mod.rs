mod results;
mod state;
mod ui;

use crate::analysis::AnalysisClient;
use crate::config::Config;
use crate::upload::UploadForm;
use eframe::{egui, App};
use state::{SubmissionOrchestrator, SubmissionState};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct FeedbackReporter {
    form: UploadForm,
    orchestrator: SubmissionOrchestrator,
}

impl FeedbackReporter {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        info!(endpoint = %config.analyze_endpoint(), "Initializing feedback reporter");
        Self::with_client(AnalysisClient::new(config.analyze_endpoint()))
    }

    pub fn with_client(client: AnalysisClient) -> Self {
        Self {
            form: UploadForm::default(),
            orchestrator: SubmissionOrchestrator::new(client),
        }
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn submission(&self) -> &SubmissionState {
        self.orchestrator.state()
    }

    pub fn is_busy(&self) -> bool {
        self.orchestrator.is_in_flight()
    }

    pub fn select_file(&mut self, candidate: Option<PathBuf>) {
        if self.is_busy() {
            debug!("File input locked while a request is in flight");
            return;
        }
        self.form.select_file(candidate);
    }

    pub fn start_analysis(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(file) = self.form.confirm_submission() {
            self.orchestrator.submit(file);
        }
    }

    /// Picks up a finished request. Returns `true` when the screen changed.
    pub fn update_state(&mut self) -> bool {
        if !self.orchestrator.poll() {
            return false;
        }
        // The outcome is on screen now; the file that produced it is done.
        self.form.clear_selection();
        true
    }

    pub fn reset(&mut self) {
        if self.is_busy() {
            return;
        }
        self.orchestrator.reset();
        self.form.clear();
    }
}

impl App for FeedbackReporter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.update_state() {
            ctx.request_repaint();
        } else if self.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
        self.render(ctx);
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
