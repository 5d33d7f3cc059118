use serde::{Deserialize, Serialize};

use super::error::ConfidenceError;

/// Verdict returned by the classification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Case-insensitive parse; the endpoint has shipped both `REAL` and `Real`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "REAL" => Some(Label::Real),
            "FAKE" => Some(Label::Fake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }
}

impl TryFrom<String> for Label {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Label::parse(&value).ok_or_else(|| format!("unknown label `{value}`"))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier confidence as a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() {
            return Err(ConfidenceError::NotFinite(value));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ConfidenceError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Confidence::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Parsed response of the classification endpoint.
///
/// Produced by the classification adapter, never mutated afterwards.
///
/// 分类端点的解析结果；生成后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    pub confidence: Confidence,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub denomination: Option<String>,
    pub server_filename: String,
    pub timestamp: String,
    #[serde(default)]
    pub raw_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parse_is_case_insensitive() {
        assert_eq!(Label::parse("REAL"), Some(Label::Real));
        assert_eq!(Label::parse("Real"), Some(Label::Real));
        assert_eq!(Label::parse(" fake "), Some(Label::Fake));
        assert_eq!(Label::parse("counterfeit"), None);
    }

    #[test]
    fn label_deserializes_from_mixed_case() {
        let label: Label = serde_json::from_str("\"Fake\"").unwrap();
        assert_eq!(label, Label::Fake);
        assert_eq!(serde_json::to_string(&Label::Real).unwrap(), "\"REAL\"");
    }

    #[test]
    fn confidence_rejects_out_of_range_values() {
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(100.0).is_ok());
        assert_eq!(
            Confidence::new(100.5),
            Err(ConfidenceError::OutOfRange(100.5))
        );
        assert!(matches!(
            Confidence::new(f64::NAN),
            Err(ConfidenceError::NotFinite(_))
        ));
    }

    #[test]
    fn confidence_displays_one_decimal() {
        assert_eq!(Confidence::new(96.44).unwrap().to_string(), "96.4");
        assert_eq!(Confidence::new(55.0).unwrap().to_string(), "55.0");
    }
}
