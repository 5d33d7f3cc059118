use std::sync::Arc;

use tracing::{info_span, Instrument};

use nc_core::ports::ReferenceImagePort;
use nc_core::{ScanContext, ScanRequest};

use super::scan_workflow::ScanError;

pub const DEMO_FILE_NAME: &str = "demo_note.jpg";

/// Builds a learning-mode request from the bundled reference note.
pub struct ScanDemo {
    reference_image: Arc<dyn ReferenceImagePort>,
}

impl ScanDemo {
    pub fn new(reference_image: Arc<dyn ReferenceImagePort>) -> Self {
        Self { reference_image }
    }

    pub async fn execute(&self) -> Result<ScanRequest, ScanError> {
        let image = self
            .reference_image
            .load_reference()
            .instrument(info_span!("usecase.scan_demo.execute"))
            .await
            .map_err(ScanError::ReferenceUnavailable)?;

        Ok(ScanRequest::new(
            image.bytes,
            image.mime_type,
            DEMO_FILE_NAME,
            ScanContext::Learning,
        )?)
    }
}
