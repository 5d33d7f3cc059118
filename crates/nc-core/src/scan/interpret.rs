//! Result interpretation: classification result → presentation model.
//!
//! Pure and deterministic. The model is rebuilt from the result every time it
//! is needed and never stored.

use serde::{Deserialize, Serialize};

use super::result::{ClassificationResult, Confidence, Label};

pub const DEFAULT_UNCERTAIN_BELOW: f64 = 70.0;
pub const DEFAULT_VERIFIED_AT: f64 = 90.0;
pub const DEFAULT_HIGH_AT: f64 = 95.0;

pub const UNCERTAIN_BADGE: &str = "Analysis Uncertain";

const CARE_TIPS: [&str; 2] = [
    "Avoid folding the note repeatedly.",
    "Do not write on the watermark area.",
];

/// Confidence cut-offs, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Below this a result is flagged uncertain.
    pub uncertain_below: f64,
    /// At or above this a REAL result is low risk and at least `Verified`.
    pub verified_at: f64,
    /// At or above this the certainty band is `High`.
    pub high_at: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            uncertain_below: DEFAULT_UNCERTAIN_BELOW,
            verified_at: DEFAULT_VERIFIED_AT,
            high_at: DEFAULT_HIGH_AT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertaintyBand {
    Low,
    Verified,
    High,
}

impl CertaintyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertaintyBand::Low => "Low",
            CertaintyBand::Verified => "Verified",
            CertaintyBand::High => "High",
        }
    }
}

/// What the view shows for one result.
///
/// 视图为单个结果展示的内容。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationModel {
    pub label: Label,
    pub confidence: Confidence,
    pub risk_tier: RiskTier,
    pub certainty_band: CertaintyBand,
    pub is_uncertain: bool,
    pub badge_text: String,
    pub narrative_text: String,
    pub advice_text: String,
    pub care_tips: Vec<String>,
    pub reasons: Vec<String>,
}

impl PresentationModel {
    /// Counts toward the session's verified tally.
    pub fn is_verified_real(&self) -> bool {
        self.label == Label::Real && !self.is_uncertain
    }
}

/// Build the presentation model for `result`.
///
/// | Condition                         | risk   | band     |
/// |-----------------------------------|--------|----------|
/// | FAKE                              | High   | by conf. |
/// | REAL, conf ≥ high_at              | Low    | High     |
/// | REAL, verified_at ≤ conf < high_at| Low    | Verified |
/// | REAL, uncertain_below ≤ conf < verified_at | Medium | Low |
/// | any, conf < uncertain_below       | label  | Low, uncertain |
pub fn interpret(result: &ClassificationResult, thresholds: &Thresholds) -> PresentationModel {
    let confidence = result.confidence.value();
    let is_uncertain = confidence < thresholds.uncertain_below;

    let risk_tier = match result.label {
        Label::Fake => RiskTier::High,
        Label::Real if confidence >= thresholds.verified_at => RiskTier::Low,
        Label::Real => RiskTier::Medium,
    };

    let certainty_band = if is_uncertain {
        CertaintyBand::Low
    } else if confidence >= thresholds.high_at {
        CertaintyBand::High
    } else if confidence >= thresholds.verified_at {
        CertaintyBand::Verified
    } else {
        CertaintyBand::Low
    };

    let badge_text = if is_uncertain {
        UNCERTAIN_BADGE.to_string()
    } else {
        format!("{} Note Detected", result.label)
    };

    let narrative_text = if is_uncertain {
        format!(
            "Confidence is below safety threshold ({}%). Please verify manually.",
            result.confidence
        )
    } else {
        format!(
            "{} note detected with {}% confidence.",
            result.label, result.confidence
        )
    };

    let advice_text = match (result.label, risk_tier, is_uncertain) {
        (Label::Fake, _, _) => "Do not recirculate this note. Surrender it to a bank.",
        (Label::Real, _, true) => {
            "Retake the photo in good light and check the security features by hand."
        }
        (Label::Real, RiskTier::Medium, false) => {
            "Borderline result. Check the watermark and security thread before accepting."
        }
        (Label::Real, _, false) => "No action needed.",
    }
    .to_string();

    PresentationModel {
        label: result.label,
        confidence: result.confidence,
        risk_tier,
        certainty_band,
        is_uncertain,
        badge_text,
        narrative_text,
        advice_text,
        care_tips: CARE_TIPS.iter().map(|tip| tip.to_string()).collect(),
        reasons: result.reasons.clone(),
    }
}
