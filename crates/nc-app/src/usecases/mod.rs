//! Scan use cases
//!
//! [acquire: file | camera | demo]
//!         ↓
//! ScanWorkflow::submit  → AssessQuality, ProgressChoreographer, interpret
//!         ↓
//! LedgerHandle (history + session, saved after every change)
//!         ↓
//! ListHistory / ClearHistory / InspectResult

pub mod assess_quality;
pub mod capture_from_camera;
pub mod clear_history;
pub mod get_model_info;
pub mod inspect;
pub mod ledger;
pub mod list_history;
pub mod progress;
pub mod scan_demo;
pub mod scan_workflow;

pub use assess_quality::AssessQuality;
pub use capture_from_camera::CaptureFromCamera;
pub use clear_history::ClearHistory;
pub use get_model_info::GetModelInfo;
pub use inspect::{InspectError, InspectResult, LatestResult};
pub use ledger::{LedgerHandle, LedgerView};
pub use list_history::{ListHistory, ListServerHistory};
pub use progress::ProgressChoreographer;
pub use scan_demo::ScanDemo;
pub use scan_workflow::{ScanError, ScanOutcome, ScanWorkflow};
