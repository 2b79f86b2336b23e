use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::FeatureVector,
    protocol::{PredictRequest, PredictionResponse},
};

use crate::{config::ClientSettings, error::PredictionError};

/// Remote estimator. One call is one request; implementations never retry.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, vector: &FeatureVector) -> Result<PredictionResponse, PredictionError>;
}

pub struct HttpPredictionService {
    http: Client,
    endpoint: String,
}

impl HttpPredictionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, PredictionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, vector: &FeatureVector) -> Result<PredictionResponse, PredictionError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json::<PredictRequest>(vector)
            .send()
            .await?;
        let status = res.status();
        let body = res.bytes().await?;

        let decoded = serde_json::from_slice::<PredictionResponse>(&body)
            .map_err(|err| PredictionError::Decode(err.to_string()));

        if !status.is_success() {
            return Err(PredictionError::Status {
                status: status.as_u16(),
                message: decoded.ok().and_then(|response| response.error),
            });
        }

        decoded
    }
}
