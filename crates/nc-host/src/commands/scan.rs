//! Scan commands: a file from disk, or the demo note.

use std::path::Path;

use anyhow::Context;
use tracing::{info_span, Instrument};

use nc_core::ScanContext;

use super::dto::ScanResultDto;
use super::map_err;
use crate::bootstrap::AppRuntime;

/// MIME type from the file extension; anything unknown is passed through as
/// `application/octet-stream` and rejected by validation.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub async fn scan_file(
    runtime: &AppRuntime,
    path: &Path,
    context: ScanContext,
) -> Result<ScanResultDto, String> {
    let span = info_span!("command.scan_file", path = %path.display(), %context);
    async {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image: {}", path.display()))
            .map_err(map_err)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let outcome = runtime
            .app()
            .scan
            .submit_image(bytes, mime_for_path(path), file_name, context)
            .await
            .map_err(map_err)?;
        Ok(ScanResultDto::from(&outcome))
    }
    .instrument(span)
    .await
}

pub async fn scan_demo(runtime: &AppRuntime) -> Result<ScanResultDto, String> {
    let span = info_span!("command.scan_demo");
    async {
        let app = runtime.app();
        let request = app.demo.execute().await.map_err(map_err)?;
        let outcome = app.scan.submit(request).await.map_err(map_err)?;
        Ok(ScanResultDto::from(&outcome))
    }
    .instrument(span)
    .await
}
