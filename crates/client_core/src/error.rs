use shared::error::UnknownFieldError;
use thiserror::Error;

/// Every way a single prediction request can fail to produce a result.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned HTTP {status}{}", fmt_detail(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("malformed prediction response: {0}")]
    Decode(String),
    #[error("prediction service rejected the request{}", fmt_detail(.message))]
    Rejected { message: Option<String> },
    #[error("prediction request was never sent: {0}")]
    NotSent(String),
}

impl PredictionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PredictionError::Transport(_) | PredictionError::NotSent(_) => FailureKind::Network,
            PredictionError::Status { .. } | PredictionError::Decode(_) => {
                FailureKind::MalformedResponse
            }
            PredictionError::Rejected { .. } => FailureKind::Logical,
        }
    }
}

fn fmt_detail(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    MalformedResponse,
    Logical,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid prediction endpoint '{endpoint}': {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("unsupported endpoint scheme '{0}'")]
    Scheme(String),
    #[error("unknown response ordering '{0}'")]
    Ordering(String),
}
