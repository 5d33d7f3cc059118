//! Comparison and report for the most recent result.
//!
//! Visual layers are fetched on first use and cached with the result they
//! belong to. A failed fetch is not cached, so the next request retries.

use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};
use tracing::{info, info_span, warn, Instrument};

use nc_core::inspect::{
    ComparisonSlider, ComparisonView, ImageRef, OverlaySource, ScanReport, VisualLayers,
    LAYERS_UNAVAILABLE_WARNING,
};
use nc_core::ports::{ClockPort, ReferenceImagePort, TransportError, VisualLayersPort};
use nc_core::{ClassificationResult, PresentationModel, ReportId, ScanId};

const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("no scan result to inspect")]
    NoResult,
    #[error("visual layers unavailable: {0}")]
    Layers(#[source] TransportError),
}

/// A completed scan and its lazily fetched layers.
pub struct InspectionTarget {
    pub scan_id: ScanId,
    pub original: ImageRef,
    pub result: ClassificationResult,
    pub model: PresentationModel,
    layers: OnceCell<VisualLayers>,
}

impl InspectionTarget {
    pub fn new(
        scan_id: ScanId,
        original: ImageRef,
        result: ClassificationResult,
        model: PresentationModel,
    ) -> Self {
        Self {
            scan_id,
            original,
            result,
            model,
            layers: OnceCell::new(),
        }
    }
}

/// Slot for the result currently on screen. Replaced by each completed scan,
/// emptied on reset.
#[derive(Default)]
pub struct LatestResult {
    slot: RwLock<Option<Arc<InspectionTarget>>>,
}

impl LatestResult {
    pub async fn set(&self, target: InspectionTarget) {
        *self.slot.write().await = Some(Arc::new(target));
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }

    pub async fn get(&self) -> Option<Arc<InspectionTarget>> {
        self.slot.read().await.clone()
    }
}

pub struct InspectResult {
    latest: Arc<LatestResult>,
    visual_layers: Arc<dyn VisualLayersPort>,
    reference_image: Arc<dyn ReferenceImagePort>,
    clock: Arc<dyn ClockPort>,
    reference: OnceCell<ImageRef>,
}

impl InspectResult {
    pub fn new(
        latest: Arc<LatestResult>,
        visual_layers: Arc<dyn VisualLayersPort>,
        reference_image: Arc<dyn ReferenceImagePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            latest,
            visual_layers,
            reference_image,
            clock,
            reference: OnceCell::new(),
        }
    }

    /// Forensic layers for the current result, fetched at most once.
    pub async fn visual_layers(&self) -> Result<VisualLayers, InspectError> {
        let target = self.target().await?;
        self.layers_for(&target).await
    }

    /// Side-by-side view of the original against `overlay`.
    ///
    /// An unavailable overlay degrades to the original with a warning.
    pub async fn compare(
        &self,
        overlay: OverlaySource,
        slider: ComparisonSlider,
    ) -> Result<ComparisonView, InspectError> {
        let target = self.target().await?;

        let span = info_span!("usecase.inspect.compare", scan_id = %target.scan_id, ?overlay);
        async {
            let layers = match overlay {
                OverlaySource::Layer(_) => self.layers_for(&target).await.ok(),
                OverlaySource::Reference => None,
            };
            let reference = match overlay {
                OverlaySource::Reference => self.reference().await,
                OverlaySource::Layer(_) => None,
            };

            let view = ComparisonView::build(
                target.original.clone(),
                overlay,
                layers.as_ref(),
                reference.as_ref(),
                slider,
            );
            if let Some(warning) = &view.warning {
                warn!(warning = %warning, "comparison degraded");
            }
            Ok(view)
        }
        .instrument(span)
        .await
    }

    /// Report for the current result. Missing layers add a warning instead of
    /// failing.
    pub async fn report(&self) -> Result<ScanReport, InspectError> {
        let target = self.target().await?;

        let span = info_span!("usecase.inspect.report", scan_id = %target.scan_id);
        async {
            let (available_layers, warnings) = match self.layers_for(&target).await {
                Ok(layers) if !layers.is_empty() => (layers.available(), Vec::new()),
                Ok(_) | Err(_) => (Vec::new(), vec![LAYERS_UNAVAILABLE_WARNING.to_string()]),
            };

            let timestamp = chrono::DateTime::from_timestamp_millis(self.clock.now_ms())
                .map(|issued| issued.format(REPORT_TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| target.result.timestamp.clone());

            let report = ScanReport::new(
                ReportId::generate(),
                &target.model,
                timestamp,
                available_layers,
                warnings,
            );
            info!(report_id = %report.report_id, "report generated");
            Ok(report)
        }
        .instrument(span)
        .await
    }

    async fn target(&self) -> Result<Arc<InspectionTarget>, InspectError> {
        self.latest.get().await.ok_or(InspectError::NoResult)
    }

    async fn layers_for(&self, target: &InspectionTarget) -> Result<VisualLayers, InspectError> {
        target
            .layers
            .get_or_try_init(|| async {
                self.visual_layers
                    .analyze_visuals(&target.result.server_filename)
                    .await
            })
            .await
            .cloned()
            .map_err(|err| {
                warn!(error = %err, "visual layer fetch failed");
                InspectError::Layers(err)
            })
    }

    async fn reference(&self) -> Option<ImageRef> {
        self.reference
            .get_or_try_init(|| async {
                self.reference_image
                    .load_reference()
                    .await
                    .map(|image| ImageRef::data_uri(image.mime_type.as_str(), &image.bytes))
            })
            .await
            .map_err(|err| warn!(error = %err, "reference image fetch failed"))
            .ok()
            .cloned()
    }
}
