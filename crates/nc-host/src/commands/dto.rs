use serde::{Deserialize, Serialize};

use nc_app::usecases::{LedgerView, ScanOutcome};
use nc_core::inspect::{ComparisonView, OverlaySource, ScanReport};
use nc_core::model_info::ModelInfo;
use nc_core::scan::SessionSnapshot;
use nc_core::HistoryEntry;

/// One finished scan.
///
/// Separates the command surface from domain types so those can evolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResultDto {
    pub scan_id: String,
    pub label: String,
    pub confidence: f64,
    pub badge: String,
    pub risk_tier: String,
    pub certainty_band: String,
    pub uncertain: bool,
    pub verified_real: bool,
    pub reasons: Vec<String>,
    pub denomination: Option<String>,
    pub server_filename: String,
    pub timestamp: String,
    pub advisories: Vec<String>,
}

impl From<&ScanOutcome> for ScanResultDto {
    fn from(outcome: &ScanOutcome) -> Self {
        Self {
            scan_id: outcome.scan_id.to_string(),
            label: outcome.model.label.to_string(),
            confidence: outcome.model.confidence.value(),
            badge: outcome.model.badge_text.clone(),
            risk_tier: outcome.model.risk_tier.as_str().to_string(),
            certainty_band: outcome.model.certainty_band.as_str().to_string(),
            uncertain: outcome.model.is_uncertain,
            verified_real: outcome.model.is_verified_real(),
            reasons: outcome.model.reasons.clone(),
            denomination: outcome.result.denomination.clone(),
            server_filename: outcome.result.server_filename.clone(),
            timestamp: outcome.result.timestamp.clone(),
            advisories: outcome.advisory.messages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryDto {
    pub scan_id: String,
    pub label: String,
    pub confidence: f64,
    pub timestamp: String,
    pub denomination: Option<String>,
}

impl From<&HistoryEntry> for HistoryEntryDto {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            scan_id: entry.scan_id.to_string(),
            label: entry.label.to_string(),
            confidence: entry.confidence.value(),
            timestamp: entry.timestamp.clone(),
            denomination: entry.denomination.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    pub scans: u64,
    pub verified: u64,
    pub verified_rate: u32,
    pub total_value: u64,
    pub rate_text: String,
    pub total_text: String,
}

impl From<&SessionSnapshot> for SessionDto {
    fn from(session: &SessionSnapshot) -> Self {
        Self {
            scans: session.scan_count,
            verified: session.verified_count,
            verified_rate: session.verified_rate,
            total_value: session.cumulative_value,
            rate_text: session.rate_text.clone(),
            total_text: session.total_text.clone(),
        }
    }
}

/// Most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDto {
    pub entries: Vec<HistoryEntryDto>,
    pub real: usize,
    pub fake: usize,
    pub session: SessionDto,
}

impl From<&LedgerView> for HistoryDto {
    fn from(view: &LedgerView) -> Self {
        Self {
            entries: view.entries.iter().map(HistoryEntryDto::from).collect(),
            real: view.summary.real,
            fake: view.summary.fake,
            session: SessionDto::from(&view.session),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDto {
    /// `reference`, a layer name, or `original` after a fallback.
    pub overlay: String,
    pub slider_position: f64,
    pub warning: Option<String>,
}

impl From<&ComparisonView> for ComparisonDto {
    fn from(view: &ComparisonView) -> Self {
        let overlay = match view.overlay_source {
            Some(OverlaySource::Reference) => "reference".to_string(),
            Some(OverlaySource::Layer(kind)) => kind.as_str().to_string(),
            None => "original".to_string(),
        };
        Self {
            overlay,
            slider_position: view.slider.position(),
            warning: view.warning.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDto {
    pub report_id: String,
    pub scan: ScanResultDto,
    pub available_layers: Vec<String>,
    pub warnings: Vec<String>,
    pub certificate: String,
    pub comparison: ComparisonDto,
}

impl ReportDto {
    pub fn new(scan: ScanResultDto, report: &ScanReport, comparison: &ComparisonView) -> Self {
        Self {
            report_id: report.report_id.to_string(),
            scan,
            available_layers: report
                .available_layers
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            warnings: report.warnings.clone(),
            certificate: report.render_certificate(),
            comparison: ComparisonDto::from(comparison),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfoDto {
    pub version: String,
    pub model_type: String,
    pub accuracy: Option<String>,
    pub limitations: Vec<String>,
}

impl From<&ModelInfo> for ModelInfoDto {
    fn from(info: &ModelInfo) -> Self {
        Self {
            version: info.identity.version.clone(),
            model_type: info.identity.model_type.clone(),
            accuracy: info.metrics.accuracy.as_ref().map(ToString::to_string),
            limitations: info.limitations.clone(),
        }
    }
}
