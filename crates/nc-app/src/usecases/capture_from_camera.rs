//! Camera acquisition.
//! 摄像头采集。

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use nc_core::ports::{CameraPort, DeviceError, ScanViewPort};
use nc_core::scan::MimeType;
use nc_core::{ScanContext, ScanRequest, ViewEvent};

pub const CAMERA_FILE_NAME: &str = "camera_capture.jpg";

/// Opens the camera, takes one still and closes the stream on every path.
pub struct CaptureFromCamera {
    camera: Arc<dyn CameraPort>,
    view: Arc<dyn ScanViewPort>,
}

impl CaptureFromCamera {
    pub fn new(camera: Arc<dyn CameraPort>, view: Arc<dyn ScanViewPort>) -> Self {
        Self { camera, view }
    }

    pub async fn execute(&self) -> Result<ScanRequest, DeviceError> {
        let span = info_span!("usecase.capture_from_camera.execute");

        async {
            let captured = self.open_and_capture().await;
            self.camera.close().await;

            let request = captured.and_then(|frame| {
                ScanRequest::new(
                    frame,
                    MimeType::JPEG,
                    CAMERA_FILE_NAME,
                    ScanContext::Default,
                )
                .map_err(|err| DeviceError::CaptureFailed(err.to_string()))
            });

            match request {
                Ok(request) => {
                    info!(size_bytes = request.size_bytes(), "camera frame captured");
                    Ok(request)
                }
                Err(err) => {
                    warn!(error = %err, "camera capture failed");
                    self.view.render(ViewEvent::DeviceUnavailable {
                        message: err.to_string(),
                    });
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Explicit close, e.g. when the user dismisses the camera panel.
    pub async fn close(&self) {
        self.camera.close().await;
    }

    async fn open_and_capture(&self) -> Result<bytes::Bytes, DeviceError> {
        self.camera.open().await?;
        self.camera.capture_still().await
    }
}
