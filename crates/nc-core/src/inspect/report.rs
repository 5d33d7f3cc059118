//! Printable scan report / certificate.

use serde::{Deserialize, Serialize};

use super::visuals::LayerKind;
use crate::ids::ReportId;
use crate::scan::{CertaintyBand, Confidence, Label, PresentationModel, RiskTier};

const CERTIFICATE_TEMPLATE: &str = "\
==============================================
        NOTECHECK AUTHENTICITY REPORT
==============================================
Report ID   : {{report_id}}
Issued      : {{timestamp}}
Verdict     : {{badge}}
Label       : {{label}}
Confidence  : {{confidence}}%
Risk level  : {{risk}}
Certainty   : {{certainty}}
----------------------------------------------
Findings:
{{reasons}}
----------------------------------------------
Forensic layers: {{layers}}
{{warnings}}==============================================
This report reflects an automated analysis and
is not a legal certification of authenticity.
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub report_id: ReportId,
    pub label: Label,
    pub confidence: Confidence,
    pub badge_text: String,
    pub risk_tier: RiskTier,
    pub certainty_band: CertaintyBand,
    pub timestamp: String,
    pub reasons: Vec<String>,
    pub available_layers: Vec<LayerKind>,
    pub warnings: Vec<String>,
}

impl ScanReport {
    pub fn new(
        report_id: ReportId,
        model: &PresentationModel,
        timestamp: impl Into<String>,
        available_layers: Vec<LayerKind>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            report_id,
            label: model.label,
            confidence: model.confidence,
            badge_text: model.badge_text.clone(),
            risk_tier: model.risk_tier,
            certainty_band: model.certainty_band,
            timestamp: timestamp.into(),
            reasons: model.reasons.clone(),
            available_layers,
            warnings,
        }
    }

    /// Fill the fixed certificate template.
    pub fn render_certificate(&self) -> String {
        let reasons = if self.reasons.is_empty() {
            "  (none reported)".to_string()
        } else {
            self.reasons
                .iter()
                .map(|r| format!("  - {r}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let layers = if self.available_layers.is_empty() {
            "unavailable".to_string()
        } else {
            self.available_layers
                .iter()
                .map(LayerKind::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let warnings: String = self
            .warnings
            .iter()
            .map(|w| format!("Warning: {w}\n"))
            .collect();

        let values = [
            ("report_id", self.report_id.as_str().to_string()),
            ("timestamp", self.timestamp.clone()),
            ("badge", self.badge_text.clone()),
            ("label", self.label.to_string()),
            ("confidence", self.confidence.to_string()),
            ("risk", self.risk_tier.as_str().to_string()),
            ("certainty", self.certainty_band.as_str().to_string()),
            ("reasons", reasons),
            ("layers", layers),
            ("warnings", warnings),
        ];
        fill_template(CERTIFICATE_TEMPLATE, &values)
    }
}

/// Substitute `{{key}}` placeholders in a single left-to-right pass, so
/// substituted text is never scanned again. Unknown keys are left as is.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
