use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::debug;

use nc_core::ports::ScanStorePort;
use nc_core::scan::{SessionStats, StoredHistory};

/// Scan history and session counters, each kept as a pretty-printed JSON file.
pub struct FileScanStore {
    history_path: PathBuf,
    session_path: PathBuf,
}

impl FileScanStore {
    pub fn new(history_path: impl Into<PathBuf>, session_path: impl Into<PathBuf>) -> Self {
        Self {
            history_path: history_path.into(),
            session_path: session_path.into(),
        }
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

/// Missing file loads as `T::default()`.
async fn read_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let content = match fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved state, starting empty");
            return Ok(T::default());
        }
        Err(e) => return Err(e).with_context(|| format!("read failed: {}", path.display())),
    };

    serde_json::from_str(&content).with_context(|| format!("parse failed: {}", path.display()))
}

/// Writes next to the target, then renames over it.
async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create data dir failed: {}", dir.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("serialize scan state failed")?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content)
        .await
        .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path).await.with_context(|| {
        format!(
            "rename temp file to target failed: {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[async_trait]
impl ScanStorePort for FileScanStore {
    async fn load_history(&self) -> Result<StoredHistory> {
        read_json(&self.history_path).await
    }

    async fn save_history(&self, history: &StoredHistory) -> Result<()> {
        write_json(&self.history_path, history).await
    }

    async fn load_session(&self) -> Result<SessionStats> {
        read_json(&self.session_path).await
    }

    async fn save_session(&self, session: &SessionStats) -> Result<()> {
        write_json(&self.session_path, session).await
    }
}
