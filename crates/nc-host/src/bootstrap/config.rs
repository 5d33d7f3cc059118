//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Mapping and defaults
//! live in `AppConfig::from_toml`; nothing here validates values.

use std::path::PathBuf;

use anyhow::Context;
use nc_app::app_paths::AppPaths;
use nc_core::config::AppConfig;
use nc_core::ports::AppDirsPort;
use tracing::info;

/// Points at an explicit config file, bypassing the data directory.
pub const CONFIG_PATH_ENV: &str = "NC_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::defaults());
    }
    load_config(config_path)
}

/// `NC_CONFIG` when set, otherwise `config.toml` in the app data directory.
pub fn resolve_config_path(app_dirs: &dyn AppDirsPort) -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let dirs = app_dirs.get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs).config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc_core::app_dirs::AppDirs;
    use nc_core::ports::AppDirsError;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct FixedDirs;

    impl AppDirsPort for FixedDirs {
        fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
            Ok(AppDirs {
                app_data_root: PathBuf::from("/tmp/notecheck"),
            })
        }
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_temp(
            r#"
            [endpoint]
            base_url = "https://notes.example.com/"
            request_timeout_secs = 12

            [thresholds]
            uncertain_below = 65

            [history]
            capacity = 25
            sync_server = true

            [storage]
            data_dir = "/srv/notecheck"
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.endpoint.base_url, "https://notes.example.com");
        assert_eq!(config.endpoint.request_timeout_secs, 12);
        assert_eq!(config.thresholds.uncertain_below, 65.0);
        assert_eq!(config.thresholds.verified_at, 90.0);
        assert_eq!(config.history.capacity, 25);
        assert!(config.history.sync_server);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/notecheck")));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = write_temp("[endpoint\nbase_url = ");
        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_missing_file_is_an_error_but_defaults_are_available() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load_config(path.clone()).is_err());
        assert_eq!(load_config_or_default(path).unwrap(), AppConfig::defaults());
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_prefers_env() {
        std::env::set_var(CONFIG_PATH_ENV, "/etc/notecheck.toml");
        let explicit = resolve_config_path(&FixedDirs).unwrap();
        std::env::remove_var(CONFIG_PATH_ENV);
        let derived = resolve_config_path(&FixedDirs).unwrap();

        assert_eq!(explicit, PathBuf::from("/etc/notecheck.toml"));
        assert_eq!(derived, PathBuf::from("/tmp/notecheck/config.toml"));
    }
}
