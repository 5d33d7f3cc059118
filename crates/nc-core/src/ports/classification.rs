use async_trait::async_trait;

use crate::ports::errors::TransportError;
use crate::scan::{ClassificationResult, ScanRequest};

/// Remote authenticity classifier.
///
/// Implementations issue exactly one request per call and never touch
/// history or session state.
///
/// 远端真伪分类器：每次调用只发出一个请求。
#[async_trait]
pub trait ClassificationPort: Send + Sync {
    async fn classify(&self, request: &ScanRequest) -> Result<ClassificationResult, TransportError>;
}
