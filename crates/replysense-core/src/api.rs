//! HTTP wire types for the predict and health endpoints.

use serde::{Deserialize, Serialize};

use crate::sentiment::Sentiment;

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// Response body for `POST /predict`.
///
/// `confidence` is the classifier's score for the top class, nominally in
/// [0, 1]. The placeholder constructors emit fixed values that are not
/// genuine measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub label: Sentiment,
    pub confidence: f32,
}

impl PredictionResponse {
    /// A genuine model prediction.
    pub fn predicted(label: Sentiment, confidence: f32) -> Self {
        Self { label, confidence }
    }

    /// Fixed placeholder served when no model is loaded.
    pub fn no_model() -> Self {
        Self {
            label: Sentiment::Neutral,
            confidence: 0.0,
        }
    }

    /// Fixed placeholder served when an inference call fails.
    pub fn inference_failed() -> Self {
        Self {
            label: Sentiment::Neutral,
            confidence: 0.5,
        }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: String,
}

impl HealthResponse {
    /// Healthy-process response naming the active model variant.
    pub fn ok(model_loaded: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            model_loaded: model_loaded.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_model_placeholder_is_neutral_zero() {
        let resp = PredictionResponse::no_model();
        assert_eq!(resp.label, Sentiment::Neutral);
        assert_eq!(resp.confidence, 0.0);
    }

    #[test]
    fn inference_failed_placeholder_is_neutral_half() {
        let resp = PredictionResponse::inference_failed();
        assert_eq!(resp.label, Sentiment::Neutral);
        assert_eq!(resp.confidence, 0.5);
    }

    #[test]
    fn prediction_wire_shape() {
        let resp = PredictionResponse::predicted(Sentiment::Positive, 0.87);
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"label":"positive","confidence":0.87}"#
        );
    }

    #[test]
    fn text_input_deserializes() {
        let input: TextInput = serde_json::from_str(r#"{"text": "thanks, sounds good"}"#).unwrap();
        assert_eq!(input.text, "thanks, sounds good");
    }

    #[test]
    fn health_wire_shape() {
        let resp = HealthResponse::ok("DistilBERT");
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"status":"ok","model_loaded":"DistilBERT"}"#
        );
    }
}
