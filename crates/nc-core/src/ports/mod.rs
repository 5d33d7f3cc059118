//! Port interfaces for the application layer
//!
//! Ports define the contract between the scan use cases and the
//! infrastructure that talks to the classification service, the filesystem,
//! the camera and the view. Use cases hold them as `Arc<dyn Port>`.

pub mod app_dirs;
pub mod camera;
pub mod classification;
mod clock;
mod delay;
pub mod errors;
pub mod image_probe;
pub mod model_info;
pub mod reference_image;
pub mod scan_store;
pub mod server_history;
pub mod view;
pub mod visual_layers;

pub use clock::*;
pub use delay::*;

pub use app_dirs::AppDirsPort;
pub use camera::CameraPort;
pub use classification::ClassificationPort;
pub use errors::{AppDirsError, ClassificationError, DeviceError, StoreError, TransportError};
pub use image_probe::ImageProbePort;
pub use model_info::ModelInfoPort;
pub use reference_image::{ReferenceImage, ReferenceImagePort};
pub use scan_store::ScanStorePort;
pub use server_history::ServerHistoryPort;
pub use view::ScanViewPort;
pub use visual_layers::VisualLayersPort;
