//! End-to-end checks of the pure scan rules: advisory, interpretation and the
//! ledger, without any ports.

use nc_core::scan::{
    interpret, CertaintyBand, ImageDimensions, QualityPolicy, RiskTier, StorageOrder,
    StoredHistory, Thresholds,
};
use nc_core::{
    ClassificationResult, Confidence, HistoryLog, Label, ScanContext, ScanId, ScanLedger,
    ScanRequest, SessionStats,
};

fn result(label: Label, confidence: f64, denomination: Option<&str>) -> ClassificationResult {
    ClassificationResult {
        label,
        confidence: Confidence::new(confidence).unwrap(),
        reasons: vec!["Serial number font consistent".to_string()],
        denomination: denomination.map(str::to_string),
        server_filename: "upload_1.jpg".to_string(),
        timestamp: "2026-04-02 14:03:11".to_string(),
        raw_score: Some(0.964),
    }
}

#[test]
fn small_image_gets_size_warning_but_still_builds_a_request() {
    let bytes = vec![0xffu8; 10 * 1024];
    let advisory = QualityPolicy::default().assess(
        bytes.len() as u64,
        Some(ImageDimensions {
            width: 1200,
            height: 800,
        }),
    );
    assert_eq!(
        advisory.banner_text().as_deref(),
        Some("Warning: File size too small (< 50KB)")
    );

    let request = ScanRequest::new(bytes, "image/jpeg", "note.jpg", ScanContext::Default);
    assert!(request.is_ok());
}

#[test]
fn large_sharp_image_is_clear() {
    let advisory = QualityPolicy::default().assess(
        60 * 1024,
        Some(ImageDimensions {
            width: 500,
            height: 500,
        }),
    );
    assert!(advisory.is_clear());
    assert_eq!(advisory.banner_text(), None);
}

#[test]
fn confident_real_scan_updates_the_ledger() {
    let mut ledger = ScanLedger::default();
    let real = result(Label::Real, 96.4, Some("₹500"));
    let model = interpret(&real, &Thresholds::default());

    assert_eq!(model.label, Label::Real);
    assert_eq!(model.certainty_band, CertaintyBand::High);
    assert_eq!(model.risk_tier, RiskTier::Low);
    assert!(!model.is_uncertain);

    ledger.record_scan(ScanId::new(), &real, &model);

    let snapshot = ledger.session().snapshot();
    assert_eq!(snapshot.verified_count, 1);
    assert_eq!(snapshot.rate_text, "100%");
    assert_eq!(snapshot.total_text, "₹500");
}

#[test]
fn uncertain_fake_is_recorded_with_its_real_label() {
    let mut ledger = ScanLedger::default();
    let fake = result(Label::Fake, 55.0, Some("500"));
    let model = interpret(&fake, &Thresholds::default());

    assert!(model.is_uncertain);
    assert_eq!(model.badge_text, "Analysis Uncertain");
    assert_eq!(model.risk_tier, RiskTier::High);

    ledger.record_scan(ScanId::new(), &fake, &model);

    let newest = ledger.history().iter().next().unwrap();
    assert_eq!(newest.label, Label::Fake);
    assert_eq!(newest.confidence.value(), 55.0);
    assert_eq!(ledger.session().verified_count, 0);
}

#[test]
fn verified_rate_display_is_stable_across_renders() {
    let stats = SessionStats {
        scan_count: 3,
        verified_count: 2,
        cumulative_value: 700,
    };
    assert_eq!(stats.snapshot(), stats.snapshot());
    assert_eq!(stats.snapshot().rate_text, "67%");
}

#[test]
fn restored_ledger_keeps_newest_entries_within_capacity() {
    let mut source = HistoryLog::new(20);
    let real = result(Label::Real, 92.0, None);
    for n in 0..15 {
        source.append(nc_core::HistoryEntry::from_result(
            ScanId::from(format!("scan-{n}")),
            &real,
        ));
    }
    let mut stored = source.to_stored();
    stored.entries.reverse();
    let stored = StoredHistory {
        order: StorageOrder::OldestFirst,
        ..stored
    };

    let ledger = ScanLedger::restore(stored, SessionStats::default(), 10);

    assert_eq!(ledger.history().len(), 10);
    assert_eq!(
        ledger.history().iter().next().unwrap().scan_id.to_string(),
        "scan-14"
    );
}
