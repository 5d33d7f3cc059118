use std::path::PathBuf;

use nc_core::app_dirs::AppDirs;

pub const HISTORY_FILE_NAME: &str = "scan_history.json";
pub const SESSION_FILE_NAME: &str = "session_stats.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub history_path: PathBuf,
    pub session_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            history_path: dirs.app_data_root.join(HISTORY_FILE_NAME),
            session_path: dirs.app_data_root.join(SESSION_FILE_NAME),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
