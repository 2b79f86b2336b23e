use std::{fs, str::FromStr, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::SettingsError;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";
pub const SETTINGS_FILE: &str = "estimator.toml";

/// Which successful response is displayed when requests overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Whichever response arrives last is shown, whatever order the
    /// requests were submitted in.
    #[default]
    LastArrivalWins,
    /// A response older than the one on screen is discarded.
    LatestSubmissionWins,
}

impl FromStr for ResponseOrdering {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last_arrival_wins" | "last-arrival-wins" | "arrival" => {
                Ok(ResponseOrdering::LastArrivalWins)
            }
            "latest_submission_wins" | "latest-submission-wins" | "submission" => {
                Ok(ResponseOrdering::LatestSubmissionWins)
            }
            other => Err(SettingsError::Ordering(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub request_timeout_secs: Option<u64>,
    pub response_ordering: ResponseOrdering,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_URL.into(),
            request_timeout_secs: None,
            response_ordering: ResponseOrdering::default(),
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
    response_ordering: Option<String>,
}

/// Defaults, then `estimator.toml` in the working directory, then env vars.
pub fn load_settings() -> ClientSettings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.endpoint {
                    apply_endpoint(&mut settings, &v);
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout_secs = Some(v);
                }
                if let Some(v) = file_cfg.response_ordering {
                    apply_ordering(&mut settings, &v);
                }
            }
            Err(err) => {
                tracing::warn!("ignoring {SETTINGS_FILE}: {}", SettingsError::from(err));
            }
        }
    }

    if let Some(v) = env("PREDICT_URL") {
        apply_endpoint(&mut settings, &v);
    }
    if let Some(v) = env("APP__PREDICT_URL") {
        apply_endpoint(&mut settings, &v);
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(err) => tracing::warn!("ignoring APP__REQUEST_TIMEOUT_SECS='{v}': {err}"),
        }
    }

    if let Some(v) = env("APP__RESPONSE_ORDERING") {
        apply_ordering(&mut settings, &v);
    }

    settings
}

fn apply_endpoint(settings: &mut ClientSettings, raw: &str) {
    match validate_endpoint(raw) {
        Ok(endpoint) => settings.endpoint = endpoint,
        Err(err) => tracing::warn!("keeping endpoint {}: {err}", settings.endpoint),
    }
}

fn apply_ordering(settings: &mut ClientSettings, raw: &str) {
    match raw.parse::<ResponseOrdering>() {
        Ok(ordering) => settings.response_ordering = ordering,
        Err(err) => tracing::warn!("keeping {:?}: {err}", settings.response_ordering),
    }
}

pub fn validate_endpoint(raw: &str) -> Result<String, SettingsError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|source| SettingsError::Endpoint {
        endpoint: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(SettingsError::Scheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_local_predict_endpoint() {
        let settings = settings_from_sources(None, env_from(&[]));
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.endpoint, "http://127.0.0.1:5000/predict");
        assert_eq!(settings.request_timeout(), None);
        assert_eq!(settings.response_ordering, ResponseOrdering::LastArrivalWins);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = r#"
            endpoint = "http://estimator.internal:8080/predict"
            request_timeout_secs = 15
            response_ordering = "latest_submission_wins"
        "#;
        let settings = settings_from_sources(Some(file), env_from(&[]));
        assert_eq!(settings.endpoint, "http://estimator.internal:8080/predict");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(
            settings.response_ordering,
            ResponseOrdering::LatestSubmissionWins
        );
    }

    #[test]
    fn env_overrides_file_and_app_prefix_wins() {
        let file = r#"endpoint = "http://from-file:1/predict""#;
        let settings = settings_from_sources(
            Some(file),
            env_from(&[
                ("PREDICT_URL", "http://plain-env:2/predict"),
                ("APP__PREDICT_URL", "http://app-env:3/predict"),
                ("APP__REQUEST_TIMEOUT_SECS", "4"),
            ]),
        );
        assert_eq!(settings.endpoint, "http://app-env:3/predict");
        assert_eq!(settings.request_timeout_secs, Some(4));
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let settings = settings_from_sources(
            Some("this is = = not toml"),
            env_from(&[
                ("APP__PREDICT_URL", "ftp://example.com/predict"),
                ("APP__REQUEST_TIMEOUT_SECS", "soon"),
                ("APP__RESPONSE_ORDERING", "random"),
            ]),
        );
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn rejects_unparseable_endpoints() {
        assert!(matches!(
            validate_endpoint("not a url"),
            Err(SettingsError::Endpoint { .. })
        ));
        assert!(matches!(
            validate_endpoint("file:///tmp/predict"),
            Err(SettingsError::Scheme(_))
        ));
    }
}
