//! Wire shapes of the classification service.
//!
//! Every payload may instead carry `{"error": "..."}`; that case is checked
//! before any other field is read.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use nc_core::inspect::{ImageRef, LayerKind, VisualLayers};
use nc_core::ports::TransportError;
use nc_core::{ClassificationResult, Confidence, Label};

/// `POST /predict` response, also the element type of `GET /history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictDto {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub raw_score: Option<f64>,
    #[serde(default)]
    pub reasons: Vec<String>,
    /// The service sends either `"500"` or `500`.
    #[serde(default)]
    pub denomination: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictDto {
    pub fn into_result(self) -> Result<ClassificationResult, TransportError> {
        if let Some(error) = self.error {
            return Err(TransportError::Rejected(error));
        }

        let raw_label = self
            .result
            .ok_or_else(|| malformed("missing `result`"))?;
        let label = Label::parse(&raw_label)
            .ok_or_else(|| malformed(format!("unknown label `{raw_label}`")))?;

        let confidence = self
            .confidence
            .ok_or_else(|| malformed("missing `confidence`"))?;
        let confidence = Confidence::new(confidence).map_err(|err| malformed(err.to_string()))?;

        let server_filename = self
            .filename
            .ok_or_else(|| malformed("missing `filename`"))?;

        let denomination = match self.denomination {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(ClassificationResult {
            label,
            confidence,
            reasons: self.reasons,
            denomination,
            server_filename,
            timestamp: self.timestamp.unwrap_or_default(),
            raw_score: self.raw_score,
        })
    }
}

/// `POST /analyze_visuals` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisualsDto {
    #[serde(default)]
    pub edges: Option<String>,
    #[serde(default)]
    pub heatmap: Option<String>,
    #[serde(default)]
    pub noise: Option<String>,
    #[serde(default)]
    pub contrast: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VisualsDto {
    pub fn into_layers(self) -> Result<VisualLayers, TransportError> {
        if let Some(error) = self.error {
            return Err(TransportError::Rejected(error));
        }
        Ok(VisualLayers {
            edges: embeddable(LayerKind::Edges, self.edges),
            heatmap: embeddable(LayerKind::Heatmap, self.heatmap),
            noise: embeddable(LayerKind::Noise, self.noise),
            contrast: embeddable(LayerKind::Contrast, self.contrast),
        })
    }
}

/// Keep a layer only if it is a base64 `data:` image; anything else counts
/// as missing so the comparison view falls back to the original.
fn embeddable(kind: LayerKind, value: Option<String>) -> Option<ImageRef> {
    let image = ImageRef(value?);
    match image.decode() {
        Some(decoded) if decoded.mime_type.starts_with("image/") && !decoded.bytes.is_empty() => {
            Some(image)
        }
        _ => {
            warn!(layer = kind.as_str(), "dropping visual layer that is not an embedded image");
            None
        }
    }
}

/// Body of a non-2xx response, when the service managed to send one.
#[derive(Debug, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

fn malformed(detail: impl Into<String>) -> TransportError {
    TransportError::MalformedResponse(detail.into())
}
