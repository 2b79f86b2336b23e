//! Folds backend events into the UI-owned model.

use client_core::{EstimatorState, OutcomeDisposition};

use crate::controller::events::{StartupError, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct AppModel {
    pub estimator: EstimatorState,
    pub status: String,
    pub status_banner: Option<StatusBanner>,
    pub backend_ready: bool,
}

impl AppModel {
    pub fn new(estimator: EstimatorState) -> Self {
        Self {
            estimator,
            status: "Starting".to_string(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                if message == "Backend worker ready" {
                    self.backend_ready = true;
                }
                self.status = message;
            }
            UiEvent::StartupFailed(err) => self.apply_startup_failure(err),
            UiEvent::PredictionFinished(outcome) => {
                // Failures stay silent here; the state logs and records them.
                if self.estimator.apply_outcome(outcome) == OutcomeDisposition::Settled {
                    self.status = "Estimates updated".to_string();
                }
            }
        }
    }

    fn apply_startup_failure(&mut self, err: StartupError) {
        self.status = format!("Backend error: {err}");
        self.backend_ready = false;
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: self.status.clone(),
        });
    }
}
