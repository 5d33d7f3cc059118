pub mod fs;
pub mod http;
pub mod image;
pub mod store;
pub mod time;

pub use fs::DirsAppDirsAdapter;
pub use http::HttpScanService;
pub use image::ImageHeaderProbe;
pub use store::FileScanStore;
pub use time::{SystemClock, TokioDelay};
