//! Events the scan controller pushes to the rendering surface.
//!
//! The view is a sink: it never calls back into the controller while handling
//! an event.

use serde::{Deserialize, Serialize};

use crate::scan::{HistoryEntry, HistorySummary, PresentationModel, ProgressStage, SessionSnapshot};

pub const FAILURE_TITLE: &str = "Analysis Failed";
pub const FAILURE_MESSAGE: &str = "We couldn't analyze this image reliably.";
pub const FAILURE_HINT: &str =
    "Please ensure the image is clear, well-lit, and contains a valid currency note.";

/// Failure card shown in place of a result.
///
/// 分析失败时显示的卡片。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCard {
    pub title: String,
    pub message: String,
    pub hint: String,
    /// Underlying cause, for logs and an optional details disclosure.
    pub detail: String,
    pub retry_allowed: bool,
}

impl FailureCard {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            title: FAILURE_TITLE.to_string(),
            message: FAILURE_MESSAGE.to_string(),
            hint: FAILURE_HINT.to_string(),
            detail: detail.into(),
            retry_allowed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Submission refused before any network call.
    ValidationRejected { message: String },
    /// `None` clears the advisory banner.
    AdvisoryChanged { banner: Option<String> },
    Progress { stage: ProgressStage },
    Result(Box<PresentationModel>),
    Failure(FailureCard),
    SessionChanged(SessionSnapshot),
    HistoryChanged {
        entries: Vec<HistoryEntry>,
        summary: HistorySummary,
    },
    /// Camera denied or missing; the view falls back to the upload surface.
    DeviceUnavailable { message: String },
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_card_carries_fixed_copy() {
        let card = FailureCard::new("connection refused");
        assert_eq!(card.title, "Analysis Failed");
        assert_eq!(card.message, "We couldn't analyze this image reliably.");
        assert!(card.hint.starts_with("Please ensure"));
        assert_eq!(card.detail, "connection refused");
        assert!(card.retry_allowed);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_value(ViewEvent::Progress {
            stage: ProgressStage::Analyzing,
        })
        .unwrap();
        assert_eq!(json["type"], "progress");
        assert_eq!(json["stage"], "analyzing");
    }
}
