//! # Scan Dependencies / 扫描依赖
//!
//! Parameter grouping for [`crate::NoteCheckApp`] construction.
//! 仅用于参数打包。
//!
//! Every port is required. The camera is not listed: it exists only on hosts
//! with a capture device and is handed to
//! [`crate::usecases::CaptureFromCamera`] directly.

use std::sync::Arc;

use nc_core::ports::*;

pub struct ScanDeps {
    // Remote service / 远端服务
    pub classifier: Arc<dyn ClassificationPort>,
    pub visual_layers: Arc<dyn VisualLayersPort>,
    pub reference_image: Arc<dyn ReferenceImagePort>,
    pub model_info: Arc<dyn ModelInfoPort>,
    pub server_history: Arc<dyn ServerHistoryPort>,

    // Local state / 本地状态
    pub store: Arc<dyn ScanStorePort>,
    pub image_probe: Arc<dyn ImageProbePort>,

    // View / 视图
    pub view: Arc<dyn ScanViewPort>,

    // System / 系统
    pub delay: Arc<dyn DelayPort>,
    pub clock: Arc<dyn ClockPort>,
}
