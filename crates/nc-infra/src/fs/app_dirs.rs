use std::path::PathBuf;

use nc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "notecheck";

/// Suffixes the data directory so parallel profiles keep separate ledgers.
const PROFILE_ENV: &str = "NC_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    data_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            data_dir_override: None,
        }
    }

    /// Uses `data_dir` as the app data root verbatim, e.g. from
    /// `[storage] data_dir` in the config file.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir_override: Some(data_dir),
        }
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        if let Some(dir) = &self.data_dir_override {
            return Ok(AppDirs {
                app_data_root: dir.clone(),
            });
        }

        let base = dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?;
        Ok(AppDirs {
            app_data_root: base.join(resolved_app_dir_name()),
        })
    }
}
