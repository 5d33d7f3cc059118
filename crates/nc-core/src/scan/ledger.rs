use super::history::{HistoryEntry, HistoryLog, StoredHistory};
use super::interpret::PresentationModel;
use super::result::ClassificationResult;
use super::session::SessionStats;
use crate::ids::ScanId;

/// History and session counters, owned together and mutated together.
///
/// The scan controller is the only writer. Every mutation is followed by a
/// save through `ScanStorePort`.
///
/// 历史与会话统计的唯一持有者。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanLedger {
    history: HistoryLog,
    session: SessionStats,
}

impl ScanLedger {
    pub fn new(history: HistoryLog, session: SessionStats) -> Self {
        Self { history, session }
    }

    pub fn restore(stored: StoredHistory, session: SessionStats, capacity: usize) -> Self {
        Self {
            history: HistoryLog::from_stored(stored, capacity),
            session,
        }
    }

    /// Fold a completed scan into history and session counters.
    pub fn record_scan(
        &mut self,
        scan_id: ScanId,
        result: &ClassificationResult,
        model: &PresentationModel,
    ) -> HistoryEntry {
        let entry = HistoryEntry::from_result(scan_id, result);
        self.history.append(entry.clone());
        self.session
            .record(model.is_verified_real(), result.denomination.as_deref());
        entry
    }

    /// Explicit user clear: empties history and zeroes the session.
    pub fn clear(&mut self) {
        self.history.clear();
        self.session.reset();
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn session(&self) -> &SessionStats {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{interpret, Confidence, Label, Thresholds};

    fn result(label: Label, confidence: f64, denomination: Option<&str>) -> ClassificationResult {
        ClassificationResult {
            label,
            confidence: Confidence::new(confidence).unwrap(),
            reasons: vec![],
            denomination: denomination.map(str::to_string),
            server_filename: "note.jpg".to_string(),
            timestamp: "2026-01-01 10:00:00".to_string(),
            raw_score: None,
        }
    }

    #[test]
    fn record_scan_updates_history_and_session() {
        let mut ledger = ScanLedger::new(HistoryLog::new(10), SessionStats::default());
        let real = result(Label::Real, 96.4, Some("500"));
        let model = interpret(&real, &Thresholds::default());

        let entry = ledger.record_scan(ScanId::from("s1"), &real, &model);

        assert_eq!(entry.label, Label::Real);
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.session().scan_count, 1);
        assert_eq!(ledger.session().verified_count, 1);
        assert_eq!(ledger.session().cumulative_value, 500);
    }

    #[test]
    fn uncertain_real_is_not_verified() {
        let mut ledger = ScanLedger::default();
        let shaky = result(Label::Real, 65.0, Some("500"));
        let model = interpret(&shaky, &Thresholds::default());

        ledger.record_scan(ScanId::from("s1"), &shaky, &model);

        assert_eq!(ledger.session().scan_count, 1);
        assert_eq!(ledger.session().verified_count, 0);
        assert_eq!(ledger.session().cumulative_value, 0);
    }

    #[test]
    fn clear_resets_both_halves() {
        let mut ledger = ScanLedger::default();
        let real = result(Label::Real, 99.0, None);
        let model = interpret(&real, &Thresholds::default());
        for n in 0..10 {
            ledger.record_scan(ScanId::from(format!("s{n}")), &real, &model);
        }
        assert_eq!(ledger.history().len(), 10);

        ledger.clear();

        assert!(ledger.history().is_empty());
        assert_eq!(ledger.session(), &SessionStats::default());
    }
}
