//! # Dependency Injection
//!
//! The only place that depends on `nc-infra` and `nc-app` together. It
//! assembles adapters behind their ports and makes no decisions of its own.

use std::sync::Arc;

use nc_app::app_paths::AppPaths;
use nc_app::ScanDeps;
use nc_core::config::AppConfig;
use nc_core::ports::{AppDirsError, AppDirsPort, ScanViewPort};
use nc_infra::{
    DirsAppDirsAdapter, FileScanStore, HttpScanService, ImageHeaderProbe, SystemClock, TokioDelay,
};

pub type WiringResult<T> = Result<T, WiringError>;

/// Infrastructure that could not be initialized.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application data directory unavailable: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),
}

/// Data directory from `[storage] data_dir`, or the platform default.
pub fn app_dirs_adapter(config: &AppConfig) -> DirsAppDirsAdapter {
    match &config.storage.data_dir {
        Some(dir) => DirsAppDirsAdapter::with_data_dir(dir.clone()),
        None => DirsAppDirsAdapter::new(),
    }
}

pub fn resolve_app_paths(config: &AppConfig) -> WiringResult<AppPaths> {
    let dirs = app_dirs_adapter(config).get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs))
}

/// Wire every port the scan use cases need.
///
/// One [`HttpScanService`] backs all remote ports.
pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    view: Arc<dyn ScanViewPort>,
) -> WiringResult<ScanDeps> {
    let service = Arc::new(
        HttpScanService::new(
            config.endpoint.base_url.clone(),
            config.endpoint.request_timeout(),
        )
        .map_err(|e| WiringError::HttpClient(format!("{e:#}")))?,
    );

    Ok(ScanDeps {
        classifier: service.clone(),
        visual_layers: service.clone(),
        reference_image: service.clone(),
        model_info: service.clone(),
        server_history: service,
        store: Arc::new(FileScanStore::new(
            paths.history_path.clone(),
            paths.session_path.clone(),
        )),
        image_probe: Arc::new(ImageHeaderProbe),
        view,
        delay: Arc::new(TokioDelay),
        clock: Arc::new(SystemClock),
    })
}
