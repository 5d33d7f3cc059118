//! Scan workflow controller.
//!
//! One awaited pipeline per scan:
//! validate → advisory → staged progress around classify → interpret →
//! ledger update and save → view refresh.
//!
//! 扫描流程控制器：每次扫描一条顺序执行的流水线。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, warn, Instrument};

use nc_core::inspect::ImageRef;
use nc_core::ports::{ClassificationPort, DeviceError, ScanViewPort, TransportError};
use nc_core::scan::{interpret, MimeType, QualityAdvisory, Thresholds, ValidationError};
use nc_core::view::FailureCard;
use nc_core::{
    ClassificationResult, PresentationModel, ProgressStage, ScanContext, ScanId, ScanRequest,
    ViewEvent,
};

use super::assess_quality::AssessQuality;
use super::inspect::{InspectionTarget, LatestResult};
use super::ledger::LedgerHandle;
use super::progress::ProgressChoreographer;

/// Errors produced by the scan controller.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a scan is already in progress")]
    Busy,
    #[error("scan was cancelled")]
    Cancelled,
    #[error("classification failed: {0}")]
    Classification(#[from] TransportError),
    #[error("camera error: {0}")]
    Device(#[from] DeviceError),
    #[error("reference image unavailable: {0}")]
    ReferenceUnavailable(#[source] TransportError),
}

/// Everything a completed scan produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub scan_id: ScanId,
    pub result: ClassificationResult,
    pub model: PresentationModel,
    pub advisory: QualityAdvisory,
}

pub struct ScanWorkflow {
    classifier: Arc<dyn ClassificationPort>,
    view: Arc<dyn ScanViewPort>,
    assess_quality: AssessQuality,
    choreographer: ProgressChoreographer,
    ledger: Arc<LedgerHandle>,
    latest: Arc<LatestResult>,
    thresholds: Thresholds,
    request_timeout: Duration,
    in_flight: AtomicBool,
    cancel: Mutex<CancellationToken>,
}

impl ScanWorkflow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: Arc<dyn ClassificationPort>,
        view: Arc<dyn ScanViewPort>,
        assess_quality: AssessQuality,
        choreographer: ProgressChoreographer,
        ledger: Arc<LedgerHandle>,
        latest: Arc<LatestResult>,
        thresholds: Thresholds,
        request_timeout: Duration,
    ) -> Self {
        Self {
            classifier,
            view,
            assess_quality,
            choreographer,
            ledger,
            latest,
            thresholds,
            request_timeout,
            in_flight: AtomicBool::new(false),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Build a request from raw input and submit it.
    ///
    /// A non-image MIME type or an empty buffer is rejected here, before any
    /// network call and without touching progress or the ledger.
    pub async fn submit_image(
        &self,
        image: impl Into<Bytes>,
        mime_type: impl Into<MimeType>,
        file_name: impl Into<String>,
        context: ScanContext,
    ) -> Result<ScanOutcome, ScanError> {
        let request = match ScanRequest::new(image, mime_type, file_name, context) {
            Ok(request) => request,
            Err(err) => {
                info!(error = %err, "scan request rejected");
                self.view.render(ViewEvent::ValidationRejected {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };
        self.submit(request).await
    }

    pub async fn submit(&self, request: ScanRequest) -> Result<ScanOutcome, ScanError> {
        // Token swap and busy check share the lock `reset` takes, so a reset
        // either precedes this scan or cancels it.
        let (_guard, token) = {
            let mut current = self.cancel.lock().await;
            let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
                warn!(file_name = request.file_name(), "scan refused: another scan is in flight");
                return Err(ScanError::Busy);
            };
            *current = CancellationToken::new();
            (guard, current.clone())
        };

        let span = info_span!(
            "usecase.scan_workflow.submit",
            file_name = request.file_name(),
            context = %request.context(),
            size_bytes = request.size_bytes(),
        );

        async {
            let advisory = self.assess_quality.execute(&request);
            self.view.render(ViewEvent::AdvisoryChanged {
                banner: advisory.banner_text(),
            });

            let work = self.classify_with_timeout(&request);
            let view = self.view.clone();
            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    info!("scan cancelled while in flight");
                    return Err(ScanError::Cancelled);
                }
                outcome = self.choreographer.run(
                    work,
                    |stage| view.render(ViewEvent::Progress { stage }),
                    |outcome: &Result<ClassificationResult, TransportError>| outcome.is_ok(),
                ) => outcome,
            };

            // Held until the outcome is fully applied; a reset arriving now
            // waits and then clears what this scan rendered.
            let _applying = self.cancel.lock().await;
            if token.is_cancelled() {
                info!("scan cancelled before its result was applied");
                return Err(ScanError::Cancelled);
            }

            match outcome {
                Ok(result) => Ok(self.complete(&request, result, advisory).await),
                Err(err) => {
                    warn!(error = %err, "classification failed");
                    self.view
                        .render(ViewEvent::Failure(FailureCard::new(err.to_string())));
                    Err(ScanError::Classification(err))
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Cancel any in-flight scan and return the view to its initial state.
    ///
    /// A scan cancelled before its result is applied emits nothing further
    /// and mutates nothing. One already applying its result finishes first,
    /// then is cleared from the view.
    pub async fn reset(&self) {
        let current = self.cancel.lock().await;
        current.cancel();
        self.latest.clear().await;
        self.view.render(ViewEvent::Reset);
        self.view.render(ViewEvent::Progress {
            stage: ProgressStage::Idle,
        });
        info!("scan view reset");
    }

    async fn classify_with_timeout(
        &self,
        request: &ScanRequest,
    ) -> Result<ClassificationResult, TransportError> {
        match tokio::time::timeout(self.request_timeout, self.classifier.classify(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(TransportError::Timeout(self.request_timeout)),
        }
    }

    async fn complete(
        &self,
        request: &ScanRequest,
        result: ClassificationResult,
        advisory: QualityAdvisory,
    ) -> ScanOutcome {
        let model = interpret(&result, &self.thresholds);
        let scan_id = ScanId::new();

        let (ledger, saved) = self.ledger.record(scan_id.clone(), &result, &model).await;
        if let Err(err) = saved {
            warn!(error = %err, "scan state was not persisted");
        }

        self.latest
            .set(InspectionTarget::new(
                scan_id.clone(),
                ImageRef::data_uri(request.mime_type().as_str(), request.image()),
                result.clone(),
                model.clone(),
            ))
            .await;

        self.view.render(ViewEvent::Result(Box::new(model.clone())));
        self.view.render(ViewEvent::SessionChanged(ledger.session));
        self.view.render(ViewEvent::HistoryChanged {
            entries: ledger.entries,
            summary: ledger.summary,
        });

        info!(
            scan_id = %scan_id,
            label = %result.label,
            confidence = result.confidence.value(),
            uncertain = model.is_uncertain,
            "scan completed"
        );

        ScanOutcome {
            scan_id,
            result,
            model,
            advisory,
        }
    }
}

/// Holds the in-flight flag; released on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
