//! Scan a file, then build its authenticity report and comparison view.

use std::path::Path;

use tracing::{info_span, Instrument};

use nc_core::inspect::{ComparisonSlider, LayerKind, OverlaySource};
use nc_core::ScanContext;

use super::dto::ReportDto;
use super::map_err;
use super::scan::scan_file;
use crate::bootstrap::AppRuntime;

/// Nominal comparison canvas, in pixels.
const SLIDER_WIDTH: f64 = 600.0;
const SLIDER_HANDLE_WIDTH: f64 = 40.0;

/// `layer` picks a forensic overlay; `None` compares against the reference
/// note.
pub async fn inspect_file(
    runtime: &AppRuntime,
    path: &Path,
    context: ScanContext,
    layer: Option<LayerKind>,
) -> Result<ReportDto, String> {
    let scan = scan_file(runtime, path, context).await?;

    let span = info_span!("command.inspect_file", scan_id = %scan.scan_id, ?layer);
    async {
        let inspect = &runtime.app().inspect;
        let report = inspect.report().await.map_err(map_err)?;

        let overlay = layer.map_or(OverlaySource::Reference, OverlaySource::Layer);
        let comparison = inspect
            .compare(overlay, ComparisonSlider::new(SLIDER_WIDTH, SLIDER_HANDLE_WIDTH))
            .await
            .map_err(map_err)?;

        Ok(ReportDto::new(scan, &report, &comparison))
    }
    .instrument(span)
    .await
}
