use async_trait::async_trait;

use crate::scan::{SessionStats, StoredHistory};

/// Durable home of the scan ledger.
///
/// A missing store is not an error: loads return the empty value.
#[async_trait]
pub trait ScanStorePort: Send + Sync {
    async fn load_history(&self) -> anyhow::Result<StoredHistory>;
    async fn save_history(&self, history: &StoredHistory) -> anyhow::Result<()>;
    async fn load_session(&self) -> anyhow::Result<SessionStats>;
    async fn save_session(&self, session: &SessionStats) -> anyhow::Result<()>;
}
