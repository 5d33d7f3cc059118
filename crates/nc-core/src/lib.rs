//! # nc-core
//!
//! Core domain models and business rules for NoteCheck.
//!
//! This crate contains pure scan workflow logic without any infrastructure
//! dependencies. Everything that touches the network, the filesystem or a
//! camera is reached through a trait in [`ports`].

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod ids;
pub mod inspect;
pub mod model_info;
pub mod ports;
pub mod scan;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{ReportId, ScanId};
pub use scan::{
    ClassificationResult, Confidence, HistoryEntry, HistoryLog, Label, PresentationModel,
    ProgressStage, QualityAdvisory, ScanContext, ScanLedger, ScanRequest, SessionStats,
};
pub use view::ViewEvent;
