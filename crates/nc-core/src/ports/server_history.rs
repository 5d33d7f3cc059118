use async_trait::async_trait;

use crate::ports::errors::TransportError;
use crate::scan::ClassificationResult;

/// History kept by the classification service itself.
///
/// 服务端保存的扫描历史。
#[async_trait]
pub trait ServerHistoryPort: Send + Sync {
    /// Most recent first, as the server stores it.
    async fn list(&self) -> Result<Vec<ClassificationResult>, TransportError>;
    async fn clear(&self) -> Result<(), TransportError>;
}
