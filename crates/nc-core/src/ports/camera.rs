use async_trait::async_trait;
use bytes::Bytes;

use crate::ports::errors::DeviceError;

/// Device camera producing JPEG stills.
///
/// `close` must be safe to call on a stream that failed to open or is already
/// closed.
///
/// 设备摄像头。
#[async_trait]
pub trait CameraPort: Send + Sync {
    async fn open(&self) -> Result<(), DeviceError>;
    async fn capture_still(&self) -> Result<Bytes, DeviceError>;
    async fn close(&self);
}
