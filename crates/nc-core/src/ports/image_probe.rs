use crate::scan::ImageDimensions;

/// Reads pixel dimensions from an encoded image without decoding it fully.
pub trait ImageProbePort: Send + Sync {
    fn dimensions(&self, bytes: &[u8]) -> anyhow::Result<ImageDimensions>;
}
