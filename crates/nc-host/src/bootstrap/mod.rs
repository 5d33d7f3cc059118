pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_default, resolve_config_path};
pub use runtime::AppRuntime;
pub use wiring::{wire_dependencies, WiringError, WiringResult};
