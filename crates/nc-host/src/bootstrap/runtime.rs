use std::sync::Arc;

use nc_app::app_paths::AppPaths;
use nc_app::{NoteCheckApp, ScanSettings};
use nc_core::config::AppConfig;
use nc_core::ports::ScanViewPort;
use tracing::info;

use super::wiring::{resolve_app_paths, wire_dependencies, WiringResult};

/// Everything a command needs: the assembled app plus where it keeps state.
pub struct AppRuntime {
    app: NoteCheckApp,
    paths: AppPaths,
    config: AppConfig,
}

impl AppRuntime {
    /// Resolve paths, wire adapters, then load the persisted ledger.
    pub async fn new(config: AppConfig, view: Arc<dyn ScanViewPort>) -> WiringResult<Self> {
        let paths = resolve_app_paths(&config)?;
        let deps = wire_dependencies(&config, &paths, view)?;
        let app = NoteCheckApp::new(deps, ScanSettings::from_config(&config)).await;

        info!(
            base_url = %config.endpoint.base_url,
            data_dir = %paths.history_path.parent().map(|p| p.display().to_string()).unwrap_or_default(),
            "runtime ready"
        );

        Ok(Self { app, paths, config })
    }

    pub fn app(&self) -> &NoteCheckApp {
        &self.app
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
