//! Scan domain: request, result, and the pure rules applied between them.
//!
//! 扫描领域：请求、结果，以及两者之间的纯规则。
//!
//! [ScanRequest]
//!       ↓  (ClassificationPort)
//! [ClassificationResult]
//!       ↓  interpret()
//! [PresentationModel]  →  view
//!       ↓
//! [ScanLedger] = HistoryLog + SessionStats  →  ScanStorePort

pub mod error;
pub mod history;
pub mod interpret;
pub mod ledger;
pub mod progress;
pub mod quality;
pub mod request;
pub mod result;
pub mod session;

pub use error::{ConfidenceError, DenominationParseError, ValidationError};
pub use history::{HistoryEntry, HistoryLog, HistorySummary, StorageOrder, StoredHistory};
pub use interpret::{interpret, CertaintyBand, PresentationModel, RiskTier, Thresholds};
pub use ledger::ScanLedger;
pub use progress::{ProgressEvent, ProgressStage, ProgressStateMachine, ProgressTimings};
pub use quality::{ImageDimensions, QualityAdvisory, QualityPolicy, QualityWarning};
pub use request::{MimeType, ScanContext, ScanRequest};
pub use result::{ClassificationResult, Confidence, Label};
pub use session::{parse_denomination, SessionSnapshot, SessionStats};
