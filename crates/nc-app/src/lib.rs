//! NoteCheck Application Orchestration Layer
//!
//! Scan use cases built on the ports declared in `nc-core`. Nothing here
//! knows about HTTP, files or terminals.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app::{NoteCheckApp, ScanSettings};
pub use deps::ScanDeps;
