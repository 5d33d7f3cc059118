use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Caller-supplied label attached to a scan for downstream analytics.
///
/// 调用方附加到扫描请求上的上下文标签。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScanContext {
    #[default]
    Default,
    Learning,
    Custom(String),
}

impl ScanContext {
    pub fn as_str(&self) -> &str {
        match self {
            ScanContext::Default => "default",
            ScanContext::Learning => "learning",
            ScanContext::Custom(label) => label,
        }
    }
}

impl From<String> for ScanContext {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "default" => ScanContext::Default,
            "learning" => ScanContext::Learning,
            _ => ScanContext::Custom(trimmed.to_string()),
        }
    }
}

impl From<&str> for ScanContext {
    fn from(value: &str) -> Self {
        ScanContext::from(value.to_string())
    }
}

impl From<ScanContext> for String {
    fn from(value: ScanContext) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ScanContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeType(pub String);

impl MimeType {
    pub const JPEG: &'static str = "image/jpeg";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_image(&self) -> bool {
        self.0.trim().to_ascii_lowercase().starts_with("image/")
    }
}

impl From<&str> for MimeType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MimeType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An image about to be submitted for classification.
///
/// Built once per submission and never mutated. Construction is the only
/// validation gate: a request that exists has an image MIME type and a
/// non-empty body.
///
/// 提交分类前的图像请求；构造即校验，之后不可变。
#[derive(Debug, Clone)]
pub struct ScanRequest {
    image: Bytes,
    mime_type: MimeType,
    file_name: String,
    context: ScanContext,
}

impl ScanRequest {
    pub fn new(
        image: impl Into<Bytes>,
        mime_type: impl Into<MimeType>,
        file_name: impl Into<String>,
        context: ScanContext,
    ) -> Result<Self, ValidationError> {
        let mime_type = mime_type.into();
        if !mime_type.is_image() {
            return Err(ValidationError::NotAnImage {
                mime_type: mime_type.0,
            });
        }

        let image = image.into();
        if image.is_empty() {
            return Err(ValidationError::EmptyImage);
        }

        Ok(Self {
            image,
            mime_type,
            file_name: file_name.into(),
            context,
        })
    }

    pub fn image(&self) -> &Bytes {
        &self.image
    }

    pub fn size_bytes(&self) -> u64 {
        self.image.len() as u64
    }

    pub fn mime_type(&self) -> &MimeType {
        &self.mime_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn context(&self) -> &ScanContext {
        &self.context
    }
}
