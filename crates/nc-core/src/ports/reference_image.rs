use async_trait::async_trait;
use bytes::Bytes;

use crate::ports::errors::TransportError;
use crate::scan::MimeType;

/// A known-genuine note image. Used as the demo input and as the default
/// comparison overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub bytes: Bytes,
    pub mime_type: MimeType,
}

#[async_trait]
pub trait ReferenceImagePort: Send + Sync {
    async fn load_reference(&self) -> Result<ReferenceImage, TransportError>;
}
