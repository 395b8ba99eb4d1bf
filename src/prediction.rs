use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::config::QuizConfig;
use crate::scoring::{CanonicalRecord, PersonalityType};

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Remote prediction disabled (offline mode)")]
    Offline,
    #[error("Invalid prediction endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Prediction service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed prediction response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Prediction response carried no label")]
    MissingLabel,
    #[error("Unrecognised prediction label: {0}")]
    UnknownLabel(String),
}

/// Body returned by the prediction service. Every field is optional; anything besides
/// `prediction` and `confidence` is kept as opaque metadata.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// A usable label from the prediction service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RemotePrediction {
    pub label: PersonalityType,
    pub confidence: Option<f64>,
    pub metadata: Map<String, Value>,
}

impl RemotePrediction {
    pub fn user_id(&self) -> Option<&str> {
        self.metadata.get("user_id").and_then(Value::as_str)
    }
}

impl TryFrom<PredictionResponse> for RemotePrediction {
    type Error = PredictionError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        let raw_label = response.prediction.ok_or(PredictionError::MissingLabel)?;
        let label = PersonalityType::from_str(&raw_label)
            .ok_or_else(|| PredictionError::UnknownLabel(raw_label.clone()))?;

        let confidence = match response.confidence {
            Some(c) if c.is_finite() && (0.0..=100.0).contains(&c) => Some(c),
            Some(c) => {
                warn!("Discarding out-of-range prediction confidence: {}", c);
                None
            }
            None => None,
        };

        Ok(Self {
            label,
            confidence,
            metadata: response.metadata,
        })
    }
}

/// Anything that can turn a canonical record into a remote label.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, record: &CanonicalRecord) -> Result<RemotePrediction, PredictionError>;
}

/// Stand-in used in offline mode or when no valid endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

#[async_trait]
impl PredictionService for LocalOnly {
    async fn predict(&self, _record: &CanonicalRecord) -> Result<RemotePrediction, PredictionError> {
        Err(PredictionError::Offline)
    }
}

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    endpoint: Url,
}

impl PredictionClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, endpoint }
    }

    pub fn from_config(config: &QuizConfig) -> Result<Self, PredictionError> {
        if config.offline {
            return Err(PredictionError::Offline);
        }
        let endpoint = config.predict_url()?;
        Ok(Self::new(endpoint, config.request_timeout))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, record: &CanonicalRecord) -> Result<RemotePrediction, PredictionError> {
        info!("Requesting prediction from {}", self.endpoint);
        debug!("Prediction payload: {:?}", record);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .header("User-Agent", "PersonaSense/1.0")
            .json(record)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        let parsed: PredictionResponse = serde_json::from_str(&response_text)?;
        RemotePrediction::try_from(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<RemotePrediction, PredictionError> {
        let response: PredictionResponse = serde_json::from_value(body).unwrap();
        RemotePrediction::try_from(response)
    }

    #[test]
    fn test_full_response() {
        let prediction = parse(json!({
            "prediction": "Introvert",
            "confidence": 87.5,
            "user_id": "a1b2c3d4e5f6",
            "timestamp": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(prediction.label, PersonalityType::Introvert);
        assert_eq!(prediction.confidence, Some(87.5));
        assert_eq!(prediction.user_id(), Some("a1b2c3d4e5f6"));
        assert_eq!(prediction.metadata["timestamp"], "2025-01-01T00:00:00Z");
        assert!(!prediction.metadata.contains_key("prediction"));
    }

    #[test]
    fn test_missing_label() {
        let err = parse(json!({ "confidence": 50 })).unwrap_err();
        assert!(matches!(err, PredictionError::MissingLabel));
    }

    #[test]
    fn test_unknown_label() {
        let err = parse(json!({ "prediction": "Ambivert" })).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownLabel(label) if label == "Ambivert"));
    }

    #[test]
    fn test_out_of_range_confidence_dropped() {
        let prediction = parse(json!({ "prediction": "extrovert", "confidence": 140 })).unwrap();
        assert_eq!(prediction.label, PersonalityType::Extrovert);
        assert_eq!(prediction.confidence, None);
    }

    #[test]
    fn test_offline_client_is_refused() {
        let config = QuizConfig {
            offline: true,
            ..QuizConfig::default()
        };
        assert!(matches!(
            PredictionClient::from_config(&config),
            Err(PredictionError::Offline)
        ));
    }

    #[tokio::test]
    async fn test_local_only_always_fails() {
        let err = LocalOnly.predict(&CanonicalRecord::default()).await.unwrap_err();
        assert!(matches!(err, PredictionError::Offline));
    }
}
