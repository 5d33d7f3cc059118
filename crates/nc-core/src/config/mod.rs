//! # Configuration DTO / 配置 DTO
//!
//! Maps a parsed TOML document onto [`AppConfig`]. Every field is optional in
//! the file; anything missing keeps the value from [`AppConfig::defaults`].
//! No validation happens here: an out-of-range threshold is a fact the
//! interpreter will simply apply.
//!
//! 将 TOML 映射到 AppConfig；缺失字段使用默认值，不做校验。

use std::path::PathBuf;
use std::time::Duration;

use crate::scan::history::DEFAULT_HISTORY_CAPACITY;
use crate::scan::{ProgressTimings, QualityPolicy, Thresholds};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration DTO.
///
/// 应用配置 DTO。
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub thresholds: Thresholds,
    pub quality: QualityPolicy,
    pub history: HistoryConfig,
    pub progress: ProgressTimings,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Base URL of the classification service, without a trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    pub capacity: usize,
    /// Also clear server-side history on the clear action.
    pub sync_server: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageConfig {
    /// Overrides the platform data directory. Path only, not checked.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    /// 从 TOML 值创建 AppConfig。
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let mut config = Self::defaults();

        let section = |name: &str| toml_value.get(name);
        let str_at = |name: &str, key: &str| {
            section(name)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };
        let int_at = |name: &str, key: &str| {
            section(name)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
        };
        // Integers are accepted where a float is expected: `uncertain_below = 70`.
        let float_at = |name: &str, key: &str| {
            section(name).and_then(|s| s.get(key)).and_then(|v| {
                v.as_float().or_else(|| v.as_integer().map(|i| i as f64))
            })
        };
        let bool_at = |name: &str, key: &str| {
            section(name)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_bool())
        };
        let millis_at = |key: &str| int_at("progress", key).map(|ms| Duration::from_millis(ms as u64));

        if let Some(base_url) = str_at("endpoint", "base_url") {
            config.endpoint.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = int_at("endpoint", "request_timeout_secs") {
            config.endpoint.request_timeout_secs = secs as u64;
        }

        if let Some(v) = float_at("thresholds", "uncertain_below") {
            config.thresholds.uncertain_below = v;
        }
        if let Some(v) = float_at("thresholds", "verified_at") {
            config.thresholds.verified_at = v;
        }
        if let Some(v) = float_at("thresholds", "high_at") {
            config.thresholds.high_at = v;
        }

        if let Some(v) = int_at("quality", "min_file_bytes") {
            config.quality.min_file_bytes = v as u64;
        }
        if let Some(v) = int_at("quality", "min_dimension") {
            config.quality.min_dimension = v as u32;
        }

        if let Some(v) = int_at("history", "capacity") {
            config.history.capacity = v as usize;
        }
        if let Some(v) = bool_at("history", "sync_server") {
            config.history.sync_server = v;
        }

        if let Some(v) = millis_at("analyzing_after_ms") {
            config.progress.analyzing_after = v;
        }
        if let Some(v) = millis_at("verifying_after_ms") {
            config.progress.verifying_after = v;
        }
        if let Some(v) = millis_at("min_display_ms") {
            config.progress.min_display = v;
        }

        if let Some(dir) = str_at("storage", "data_dir") {
            config.storage.data_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Documented defaults: local endpoint, 30 s timeout, 70/90/95 thresholds,
    /// 50 KiB / 500 px quality floor, 10 history entries.
    pub fn defaults() -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            thresholds: Thresholds::default(),
            quality: QualityPolicy::default(),
            history: HistoryConfig {
                capacity: DEFAULT_HISTORY_CAPACITY,
                sync_server: false,
            },
            progress: ProgressTimings::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_empty_document_yields_defaults() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::defaults());
        assert_eq!(config.endpoint.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.history.capacity, 10);
        assert!(!config.history.sync_server);
    }

    #[test]
    fn test_from_toml_reads_every_section() {
        let toml_str = r#"
            [endpoint]
            base_url = "https://notes.example.test/"
            request_timeout_secs = 5

            [thresholds]
            uncertain_below = 60
            verified_at = 85.5
            high_at = 97.0

            [quality]
            min_file_bytes = 1024
            min_dimension = 320

            [history]
            capacity = 25
            sync_server = true

            [progress]
            analyzing_after_ms = 10
            verifying_after_ms = 20
            min_display_ms = 30

            [storage]
            data_dir = "/tmp/notecheck"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.endpoint.base_url, "https://notes.example.test");
        assert_eq!(config.endpoint.request_timeout_secs, 5);
        assert_eq!(config.thresholds.uncertain_below, 60.0);
        assert_eq!(config.thresholds.verified_at, 85.5);
        assert_eq!(config.thresholds.high_at, 97.0);
        assert_eq!(config.quality.min_file_bytes, 1024);
        assert_eq!(config.quality.min_dimension, 320);
        assert_eq!(config.history.capacity, 25);
        assert!(config.history.sync_server);
        assert_eq!(config.progress.analyzing_after, Duration::from_millis(10));
        assert_eq!(config.progress.verifying_after, Duration::from_millis(20));
        assert_eq!(config.progress.min_display, Duration::from_millis(30));
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/notecheck")));
    }

    #[test]
    fn test_from_toml_does_not_validate_thresholds() {
        // Inverted thresholds are kept as-is
        let toml_str = r#"
            [thresholds]
            verified_at = 50
            high_at = 40
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.thresholds.verified_at, 50.0);
        assert_eq!(config.thresholds.high_at, 40.0);
    }

    #[test]
    fn test_from_toml_ignores_wrongly_typed_values() {
        let toml_str = r#"
            [history]
            capacity = "lots"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
    }
}
