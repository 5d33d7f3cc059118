use std::time::Duration;

use thiserror::Error;

/// Failure talking to the remote service.
///
/// 与远端服务通信失败。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx status.
    #[error("endpoint returned {status}: {message}")]
    Endpoint { status: u16, message: String },

    /// 2xx with an `{error}` payload.
    #[error("endpoint rejected the request: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Classification failures are transport failures; the alias keeps call
/// sites readable.
pub type ClassificationError = TransportError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("capture failed: {0}")]
    CaptureFailed(String),
}

/// Persisting history or session state failed. The scan result itself is
/// unaffected.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load scan state: {0}")]
    Load(#[source] anyhow::Error),

    #[error("failed to save scan state: {0}")]
    Save(#[source] anyhow::Error),

    /// History reached disk but session stats did not; the session file lags
    /// until the next successful save rewrites both.
    #[error("scan history saved but session stats were not: {0}")]
    SessionLagging(#[source] anyhow::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
