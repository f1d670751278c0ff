use crate::analysis::{AnalysisClient, AnalysisError, AnalysisResult, FALLBACK_ERROR_MESSAGE};
use crate::upload::SelectedFile;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, info, warn};

type Outcome = Result<AnalysisResult, AnalysisError>;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        )
    }
}

/// Owns the request lifecycle. Only this type moves `SubmissionState`, and at
/// most one request is outstanding at a time.
#[derive(Debug)]
pub struct SubmissionOrchestrator {
    client: AnalysisClient,
    state: SubmissionState,
    outcome_receiver: Option<Receiver<Outcome>>,
}

impl SubmissionOrchestrator {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
            outcome_receiver: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Starts a request for `file`. Returns `false` without side effects when
    /// one is already outstanding.
    pub fn submit(&mut self, file: SelectedFile) -> bool {
        if self.state.is_in_flight() {
            debug!(file = %file.name, "Ignoring submission while a request is in flight");
            return false;
        }

        info!(file = %file.name, endpoint = self.client.endpoint(), "Starting analysis request");
        self.state = SubmissionState::InFlight;

        let (sender, receiver) = mpsc::channel();
        let client = self.client.clone();

        let spawned = std::thread::Builder::new()
            .name("analysis-request".to_string())
            .spawn(move || {
                let outcome = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt.block_on(client.analyze(&file)),
                    Err(e) => Err(AnalysisError::Runtime(e)),
                };
                let _ = sender.send(outcome);
            });

        match spawned {
            Ok(_) => self.outcome_receiver = Some(receiver),
            Err(e) => {
                warn!(error = %e, "Failed to spawn request thread");
                self.state = SubmissionState::Failed(FALLBACK_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Applies the outcome of the outstanding request if it has arrived.
    /// Returns `true` on the single call that leaves `InFlight`.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.outcome_receiver else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(AnalysisError::Runtime(std::io::Error::other(
                "request thread exited without a result",
            ))),
        };
        self.outcome_receiver = None;

        self.state = match outcome {
            Ok(result) => {
                info!(
                    suggestions = result.improvement_suggestions.len(),
                    "Analysis succeeded"
                );
                SubmissionState::Succeeded(result)
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                SubmissionState::Failed(e.user_message())
            }
        };
        true
    }

    /// Returns to `Idle` from a terminal state. There is no cancellation, so
    /// this does nothing while a request is outstanding.
    pub fn reset(&mut self) {
        if self.state.is_in_flight() {
            debug!("Reset ignored while a request is in flight");
            return;
        }
        if self.state.is_terminal() {
            info!("Resetting analysis state");
        }
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
