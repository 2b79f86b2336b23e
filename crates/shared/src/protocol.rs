use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::FeatureVector;

/// Request body for `POST /predict`. Serializes as the bare feature vector.
pub type PredictRequest = FeatureVector;

/// A single model output. Regressors return a price, classifiers a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionValue {
    Price(f64),
    Category(String),
}

impl PredictionValue {
    pub fn price(&self) -> Option<f64> {
        match self {
            PredictionValue::Price(price) => Some(*price),
            PredictionValue::Category(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestModel {
    pub name: String,
    pub accuracy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response body from the estimation service.
///
/// `predictions` keeps payload order. A rejected request only carries
/// `success: false` and possibly `error`, so everything else defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub predictions: IndexMap<String, PredictionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_model: Option<BestModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_numeric_and_categorical_predictions_in_order() {
        let raw = r#"{
            "success": true,
            "predictions": {
                "svr": 54.1,
                "linear_regression": 52.3,
                "logistic_regression": "High Price"
            },
            "best_model": {"name": "Logistic Regression", "accuracy": 1.0, "reason": "reliable"}
        }"#;
        let response: PredictionResponse = serde_json::from_str(raw).expect("decode");

        let keys: Vec<&str> = response.predictions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["svr", "linear_regression", "logistic_regression"]);
        assert_eq!(response.predictions["svr"], PredictionValue::Price(54.1));
        assert_eq!(
            response.predictions["logistic_regression"],
            PredictionValue::Category("High Price".to_string())
        );
        let best = response.best_model.expect("best model");
        assert_eq!(best.reason.as_deref(), Some("reliable"));
    }

    #[test]
    fn decodes_bare_failure_body() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"success": false}"#).expect("decode");
        assert!(!response.success);
        assert!(response.predictions.is_empty());
        assert!(response.best_model.is_none());

        let response: PredictionResponse =
            serde_json::from_str(r#"{"success": false, "error": "'size'"}"#).expect("decode");
        assert_eq!(response.error.as_deref(), Some("'size'"));
    }
}
