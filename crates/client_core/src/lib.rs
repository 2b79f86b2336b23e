pub mod config;
pub mod error;
pub mod form;
pub mod orchestrator;
pub mod service;
pub mod state;
pub mod transform;

pub use config::{load_settings, ClientSettings, ResponseOrdering};
pub use error::{FailureKind, FormError, PredictionError, SettingsError};
pub use form::FormState;
pub use orchestrator::PredictionOrchestrator;
pub use service::{HttpPredictionService, PredictionService};
pub use state::{
    EstimatorState, FailureRecord, OutcomeDisposition, PredictionOutcome, RequestGeneration,
    RequestPhase, SubmitTicket,
};
pub use transform::{transform, BestModelLine, DisplayModel, SeriesColor, SeriesEntry};
