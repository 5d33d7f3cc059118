//! Terminal rendering of scan view events.

use std::io::{self, Write};
use std::sync::Mutex;

use nc_core::scan::{PresentationModel, ProgressStage};
use nc_core::view::FailureCard;
use nc_core::ViewEvent;
use nc_core::ports::ScanViewPort;
use tracing::warn;

/// Writes one block of text per event. Events with nothing to show are
/// skipped.
pub struct ConsoleView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl ScanViewPort for ConsoleView {
    fn render(&self, event: ViewEvent) {
        let Some(text) = format_event(&event) else {
            return;
        };
        let Ok(mut out) = self.out.lock() else {
            warn!("console view writer poisoned");
            return;
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!(error = %err, "console view write failed");
        }
    }
}

pub fn format_event(event: &ViewEvent) -> Option<String> {
    match event {
        ViewEvent::ValidationRejected { message } => Some(format!("✗ {message}")),
        ViewEvent::AdvisoryChanged { banner } => banner.as_ref().map(|b| format!("⚠ {b}")),
        ViewEvent::Progress { stage } => format_stage(*stage),
        ViewEvent::Result(model) => Some(format_result(model)),
        ViewEvent::Failure(card) => Some(format_failure(card)),
        ViewEvent::SessionChanged(session) => Some(format!(
            "Session: {} scanned · {} verified · {} total",
            session.count_text, session.rate_text, session.total_text
        )),
        ViewEvent::HistoryChanged { summary, .. } => Some(format!(
            "History: {} saved ({} real, {} fake)",
            summary.total, summary.real, summary.fake
        )),
        ViewEvent::DeviceUnavailable { message } => {
            Some(format!("Camera unavailable ({message}). Use a file instead."))
        }
        ViewEvent::Reset => Some("Ready for a new scan.".to_string()),
    }
}

fn format_stage(stage: ProgressStage) -> Option<String> {
    match stage {
        ProgressStage::Done => Some("  [3/3] Done".to_string()),
        _ => {
            let step = stage.step_index()?;
            let text = stage.status_text()?;
            Some(format!("  [{}/3] {text}", step + 1))
        }
    }
}

fn format_result(model: &PresentationModel) -> String {
    let mut lines = vec![
        String::new(),
        format!("== {} ==", model.badge_text),
        format!("Result     : {}", model.label),
        format!("Confidence : {}%", model.confidence),
        format!("Risk level : {}", model.risk_tier.as_str()),
        format!("Certainty  : {}", model.certainty_band.as_str()),
        String::new(),
        model.narrative_text.clone(),
        model.advice_text.clone(),
    ];
    if !model.reasons.is_empty() {
        lines.push(String::new());
        lines.push("Findings:".to_string());
        lines.extend(model.reasons.iter().map(|r| format!("  - {r}")));
    }
    if !model.care_tips.is_empty() {
        lines.push(String::new());
        lines.push("Care tips:".to_string());
        lines.extend(model.care_tips.iter().map(|t| format!("  - {t}")));
    }
    lines.join("\n")
}

fn format_failure(card: &FailureCard) -> String {
    format!(
        "\n== {} ==\n{}\n{}\nDetails: {}",
        card.title, card.message, card.hint, card.detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc_core::scan::{interpret, SessionStats, Thresholds};
    use nc_core::{ClassificationResult, Confidence, Label};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn model(label: Label, confidence: f64) -> PresentationModel {
        let result = ClassificationResult {
            label,
            confidence: Confidence::new(confidence).unwrap(),
            reasons: vec!["Microprint blurred".into()],
            denomination: None,
            server_filename: "a.jpg".into(),
            timestamp: String::new(),
            raw_score: None,
        };
        interpret(&result, &Thresholds::default())
    }

    #[test]
    fn result_card_lists_verdict_and_findings() {
        let text = format_event(&ViewEvent::Result(Box::new(model(Label::Fake, 88.0)))).unwrap();
        assert!(text.contains("Result     : FAKE"));
        assert!(text.contains("Confidence : 88.0%"));
        assert!(text.contains("Risk level : High"));
        assert!(text.contains("  - Microprint blurred"));
    }

    #[test]
    fn idle_and_failed_stages_print_nothing() {
        assert!(format_event(&ViewEvent::Progress { stage: ProgressStage::Idle }).is_none());
        assert!(format_event(&ViewEvent::Progress { stage: ProgressStage::Failed }).is_none());
        assert_eq!(
            format_event(&ViewEvent::Progress { stage: ProgressStage::Analyzing }).unwrap(),
            "  [2/3] Analyzing forensic features..."
        );
    }

    #[test]
    fn session_line_uses_snapshot_text() {
        let mut stats = SessionStats::default();
        stats.record(true, Some("500"));
        stats.record(false, None);
        let text = format_event(&ViewEvent::SessionChanged(stats.snapshot())).unwrap();
        assert_eq!(text, "Session: 2 scanned · 50% verified · ₹500 total");
    }

    #[test]
    fn render_writes_to_the_given_writer() {
        let buf = SharedBuf::default();
        let view = ConsoleView::with_writer(Box::new(buf.clone()));

        view.render(ViewEvent::AdvisoryChanged { banner: None });
        view.render(ViewEvent::Reset);

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "Ready for a new scan.\n");
    }
}
