use std::sync::Arc;
use std::time::Duration;

use nc_core::ports::{CameraPort, ScanViewPort};
use nc_core::scan::{ProgressTimings, QualityPolicy, Thresholds};
use nc_core::AppConfig;

use crate::deps::ScanDeps;
use crate::usecases::{
    AssessQuality, CaptureFromCamera, ClearHistory, GetModelInfo, InspectResult, LatestResult,
    LedgerHandle, ListHistory, ListServerHistory, ProgressChoreographer, ScanDemo, ScanWorkflow,
};

/// Tunables the use cases read, lifted out of [`AppConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub thresholds: Thresholds,
    pub quality: QualityPolicy,
    pub progress: ProgressTimings,
    pub request_timeout: Duration,
    pub history_capacity: usize,
    pub sync_server: bool,
}

impl ScanSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            quality: config.quality,
            progress: config.progress,
            request_timeout: config.endpoint.request_timeout(),
            history_capacity: config.history.capacity,
            sync_server: config.history.sync_server,
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::defaults())
    }
}

/// The assembled application: one controller plus the use cases around it,
/// all sharing the same ledger and latest-result slot.
pub struct NoteCheckApp {
    pub scan: Arc<ScanWorkflow>,
    pub demo: ScanDemo,
    pub clear_history: ClearHistory,
    pub list_history: ListHistory,
    pub list_server_history: ListServerHistory,
    pub inspect: InspectResult,
    pub model_info: GetModelInfo,
    view: Arc<dyn ScanViewPort>,
}

impl NoteCheckApp {
    /// Loads the ledger through the store port, then wires every use case.
    pub async fn new(deps: ScanDeps, settings: ScanSettings) -> Self {
        let ledger = Arc::new(LedgerHandle::load(deps.store.clone(), settings.history_capacity).await);
        let latest = Arc::new(LatestResult::default());

        let scan = Arc::new(ScanWorkflow::new(
            deps.classifier.clone(),
            deps.view.clone(),
            AssessQuality::new(deps.image_probe.clone(), settings.quality),
            ProgressChoreographer::new(deps.delay.clone(), settings.progress),
            ledger.clone(),
            latest.clone(),
            settings.thresholds,
            settings.request_timeout,
        ));

        Self {
            scan,
            demo: ScanDemo::new(deps.reference_image.clone()),
            clear_history: ClearHistory::new(
                ledger.clone(),
                deps.server_history.clone(),
                deps.view.clone(),
                settings.sync_server,
            ),
            list_history: ListHistory::new(ledger),
            list_server_history: ListServerHistory::new(deps.server_history),
            inspect: InspectResult::new(
                latest,
                deps.visual_layers,
                deps.reference_image,
                deps.clock,
            ),
            model_info: GetModelInfo::new(deps.model_info),
            view: deps.view,
        }
    }

    /// Camera capture bound to this app's view.
    pub fn camera(&self, camera: Arc<dyn CameraPort>) -> CaptureFromCamera {
        CaptureFromCamera::new(camera, self.view.clone())
    }
}
