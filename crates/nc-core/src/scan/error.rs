use thiserror::Error;

/// Input rejected before any network call.
///
/// 在任何网络调用之前被拒绝的输入。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please upload an image file (got `{mime_type}`)")]
    NotAnImage { mime_type: String },

    #[error("image is empty")]
    EmptyImage,
}

/// A denomination string that does not reduce to a whole number.
///
/// Never surfaced to the user; the session aggregator skips the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenominationParseError {
    #[error("denomination `{0}` contains no digits")]
    NoDigits(String),

    #[error("denomination `{0}` is out of range")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfidenceError {
    #[error("confidence must be a finite number, got {0}")]
    NotFinite(f64),

    #[error("confidence {0} is outside [0, 100]")]
    OutOfRange(f64),
}
