//! Backend-to-UI events for the estimator controller.

use client_core::PredictionOutcome;

pub enum UiEvent {
    Info(String),
    StartupFailed(StartupError),
    PredictionFinished(PredictionOutcome),
}

/// The backend could not come up. Prediction failures never become a
/// `StartupError`; they stay inside the request state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    #[error("failed to build http client: {0}")]
    HttpClient(String),
    #[error("failed to build runtime: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_name_the_failed_component() {
        assert_eq!(
            StartupError::HttpClient("no tls backend".to_string()).to_string(),
            "failed to build http client: no tls backend"
        );
        assert_eq!(
            StartupError::Runtime("no threads".to_string()).to_string(),
            "failed to build runtime: no threads"
        );
    }
}
