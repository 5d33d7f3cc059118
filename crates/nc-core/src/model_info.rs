//! Read-only description of the remote classification model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub identity: ModelIdentity,
    #[serde(default)]
    pub metrics: ModelMetrics,
    #[serde(default)]
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelIdentity {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "type", default)]
    pub model_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(default)]
    pub accuracy: Option<Accuracy>,
}

/// The endpoint reports accuracy either as a number or as preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    Percent(f64),
    Text(String),
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accuracy::Percent(value) => write!(f, "{value}%"),
            Accuracy::Text(text) if text.ends_with('%') => f.write_str(text),
            Accuracy::Text(text) => write!(f, "{text}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoint_payload() {
        let info: ModelInfo = serde_json::from_str(
            r#"{
                "identity": {"version": "2.1", "type": "CNN (MobileNetV2)"},
                "metrics": {"accuracy": 94.5},
                "limitations": ["Poor lighting", "Folded notes"]
            }"#,
        )
        .unwrap();

        assert_eq!(info.identity.version, "2.1");
        assert_eq!(info.identity.model_type, "CNN (MobileNetV2)");
        assert_eq!(info.metrics.accuracy.as_ref().unwrap().to_string(), "94.5%");
        assert_eq!(info.limitations.len(), 2);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let info: ModelInfo = serde_json::from_str(r#"{"metrics": {"accuracy": "97"}}"#).unwrap();
        assert_eq!(info.identity, ModelIdentity::default());
        assert_eq!(info.metrics.accuracy.unwrap().to_string(), "97%");
        assert!(info.limitations.is_empty());
    }
}
