//! Pre-flight image quality advisory.
//!
//! Advisory only: the result is shown to the user but never blocks a scan.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_FILE_BYTES: u64 = 50 * 1024;
pub const DEFAULT_MIN_DIMENSION: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityPolicy {
    pub min_file_bytes: u64,
    pub min_dimension: u32,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            min_file_bytes: DEFAULT_MIN_FILE_BYTES,
            min_dimension: DEFAULT_MIN_DIMENSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QualityWarning {
    FileTooSmall {
        size_bytes: u64,
        min_bytes: u64,
    },
    LowResolution {
        width: u32,
        height: u32,
        min_dimension: u32,
    },
}

impl std::fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityWarning::FileTooSmall { min_bytes, .. } => {
                write!(f, "File size too small (< {}KB)", min_bytes / 1024)
            }
            QualityWarning::LowResolution { min_dimension, .. } => {
                write!(f, "Low resolution (< {}px)", min_dimension)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAdvisory {
    pub warnings: Vec<QualityWarning>,
}

impl QualityAdvisory {
    pub fn is_clear(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Banner text, or `None` when the banner should be hidden.
    pub fn banner_text(&self) -> Option<String> {
        if self.is_clear() {
            None
        } else {
            Some(format!("Warning: {}", self.messages().join(", ")))
        }
    }
}

impl QualityPolicy {
    /// Evaluate every rule independently.
    ///
    /// `dimensions` is `None` when the image header could not be decoded; the
    /// size rule still applies in that case.
    pub fn assess(&self, size_bytes: u64, dimensions: Option<ImageDimensions>) -> QualityAdvisory {
        let mut warnings = Vec::new();

        if size_bytes < self.min_file_bytes {
            warnings.push(QualityWarning::FileTooSmall {
                size_bytes,
                min_bytes: self.min_file_bytes,
            });
        }

        if let Some(ImageDimensions { width, height }) = dimensions {
            if width < self.min_dimension || height < self.min_dimension {
                warnings.push(QualityWarning::LowResolution {
                    width,
                    height,
                    min_dimension: self.min_dimension,
                });
            }
        }

        QualityAdvisory { warnings }
    }
}
