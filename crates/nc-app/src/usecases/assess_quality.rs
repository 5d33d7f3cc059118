//! Pre-flight quality advisory.
//! 提交前的图像质量提示。

use std::sync::Arc;

use tracing::debug;

use nc_core::ports::ImageProbePort;
use nc_core::scan::{QualityAdvisory, QualityPolicy};
use nc_core::ScanRequest;

/// Warns about images likely to classify poorly. Never blocks submission.
///
/// If the header cannot be read the dimension rule is skipped and only the
/// size rule applies.
pub struct AssessQuality {
    probe: Arc<dyn ImageProbePort>,
    policy: QualityPolicy,
}

impl AssessQuality {
    pub fn new(probe: Arc<dyn ImageProbePort>, policy: QualityPolicy) -> Self {
        Self { probe, policy }
    }

    pub fn execute(&self, request: &ScanRequest) -> QualityAdvisory {
        let dimensions = match self.probe.dimensions(request.image()) {
            Ok(dimensions) => Some(dimensions),
            Err(err) => {
                debug!(
                    file_name = request.file_name(),
                    error = %err,
                    "image header unreadable, skipping resolution check"
                );
                None
            }
        };

        self.policy.assess(request.size_bytes(), dimensions)
    }
}
