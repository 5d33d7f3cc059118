//! Shared fakes for the scan use case tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use nc_app::{NoteCheckApp, ScanDeps, ScanSettings};
use nc_core::inspect::VisualLayers;
use nc_core::model_info::ModelInfo;
use nc_core::ports::*;
use nc_core::scan::{ImageDimensions, MimeType, SessionStats, StoredHistory};
use nc_core::{ClassificationResult, Confidence, Label, ScanRequest, ViewEvent};

pub fn result(label: Label, confidence: f64, denomination: Option<&str>) -> ClassificationResult {
    ClassificationResult {
        label,
        confidence: Confidence::new(confidence).unwrap(),
        reasons: vec!["Watermark alignment checked".to_string()],
        denomination: denomination.map(str::to_string),
        server_filename: "20260402_140311_note.jpg".to_string(),
        timestamp: "2026-04-02 14:03:11".to_string(),
        raw_score: None,
    }
}

/// A JPEG-sized buffer that clears the size rule.
pub fn large_image() -> Vec<u8> {
    vec![0xAB; 64 * 1024]
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<nc_core::ProgressStage> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Progress { stage } => Some(stage),
                _ => None,
            })
            .collect()
    }
}

impl ScanViewPort for RecordingView {
    fn render(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Store kept in memory; share it between two apps to simulate a restart.
#[derive(Default)]
pub struct MemoryStore {
    pub history: Mutex<StoredHistory>,
    pub session: Mutex<SessionStats>,
    pub saves: AtomicUsize,
    pub fail_saves: AtomicBool,
    pub fail_session_saves: AtomicBool,
    /// Virtual time each history save takes.
    pub save_latency: Mutex<Duration>,
}

#[async_trait]
impl ScanStorePort for MemoryStore {
    async fn load_history(&self) -> anyhow::Result<StoredHistory> {
        Ok(self.history.lock().unwrap().clone())
    }

    async fn save_history(&self, history: &StoredHistory) -> anyhow::Result<()> {
        let latency = *self.save_latency.lock().unwrap();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.history.lock().unwrap() = history.clone();
        Ok(())
    }

    async fn load_session(&self) -> anyhow::Result<SessionStats> {
        Ok(*self.session.lock().unwrap())
    }

    async fn save_session(&self, session: &SessionStats) -> anyhow::Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) || self.fail_session_saves.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        *self.session.lock().unwrap() = *session;
        Ok(())
    }
}

/// Answers after `latency` with a fixed outcome.
pub struct ScriptedClassifier {
    pub latency: Duration,
    pub outcome: Result<ClassificationResult, TransportError>,
    pub calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn answering(outcome: Result<ClassificationResult, TransportError>) -> Self {
        Self::slow(Duration::ZERO, outcome)
    }

    pub fn slow(latency: Duration, outcome: Result<ClassificationResult, TransportError>) -> Self {
        Self {
            latency,
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassificationPort for ScriptedClassifier {
    async fn classify(&self, _request: &ScanRequest) -> Result<ClassificationResult, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.outcome.clone()
    }
}

pub struct FixedProbe;

impl ImageProbePort for FixedProbe {
    fn dimensions(&self, _bytes: &[u8]) -> anyhow::Result<ImageDimensions> {
        Ok(ImageDimensions {
            width: 1024,
            height: 768,
        })
    }
}

pub struct TokioDelay;

#[async_trait]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

mockall::mock! {
    pub Layers {}

    #[async_trait]
    impl VisualLayersPort for Layers {
        async fn analyze_visuals(&self, server_filename: &str) -> Result<VisualLayers, TransportError>;
    }
}

mockall::mock! {
    pub ServerHistory {}

    #[async_trait]
    impl ServerHistoryPort for ServerHistory {
        async fn list(&self) -> Result<Vec<ClassificationResult>, TransportError>;
        async fn clear(&self) -> Result<(), TransportError>;
    }
}

mockall::mock! {
    pub Camera {}

    #[async_trait]
    impl CameraPort for Camera {
        async fn open(&self) -> Result<(), DeviceError>;
        async fn capture_still(&self) -> Result<Bytes, DeviceError>;
        async fn close(&self);
    }
}

pub struct StaticReference;

#[async_trait]
impl ReferenceImagePort for StaticReference {
    async fn load_reference(&self) -> Result<ReferenceImage, TransportError> {
        Ok(ReferenceImage {
            bytes: Bytes::from_static(&[0xff, 0xd8, 0xff, 0xe0]),
            mime_type: MimeType::from(MimeType::JPEG),
        })
    }
}

pub struct StaticModelInfo;

#[async_trait]
impl ModelInfoPort for StaticModelInfo {
    async fn model_info(&self) -> Result<ModelInfo, TransportError> {
        Ok(ModelInfo::default())
    }
}

/// Ports a test may want to swap out; everything else gets a fake.
pub struct Harness {
    pub classifier: Arc<dyn ClassificationPort>,
    pub store: Arc<MemoryStore>,
    pub view: Arc<RecordingView>,
    pub layers: MockLayers,
    pub server_history: MockServerHistory,
    pub settings: ScanSettings,
}

impl Harness {
    pub fn new(classifier: Arc<dyn ClassificationPort>) -> Self {
        Self {
            classifier,
            store: Arc::new(MemoryStore::default()),
            view: Arc::new(RecordingView::default()),
            layers: MockLayers::new(),
            server_history: MockServerHistory::new(),
            settings: ScanSettings::default(),
        }
    }

    pub async fn build(self) -> (NoteCheckApp, Arc<MemoryStore>, Arc<RecordingView>) {
        let deps = ScanDeps {
            classifier: self.classifier,
            visual_layers: Arc::new(self.layers),
            reference_image: Arc::new(StaticReference),
            model_info: Arc::new(StaticModelInfo),
            server_history: Arc::new(self.server_history),
            store: self.store.clone(),
            image_probe: Arc::new(FixedProbe),
            view: self.view.clone(),
            delay: Arc::new(TokioDelay),
            clock: Arc::new(FixedClock(1_775_138_591_000)),
        };
        let app = NoteCheckApp::new(deps, self.settings).await;
        (app, self.store, self.view)
    }
}
