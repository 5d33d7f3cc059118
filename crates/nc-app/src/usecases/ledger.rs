//! Owned history + session state with save-after-every-mutation.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use nc_core::ports::{ScanStorePort, StoreError};
use nc_core::scan::{HistorySummary, SessionSnapshot};
use nc_core::{ClassificationResult, HistoryEntry, PresentationModel, ScanId, ScanLedger};

/// What the view needs to redraw history and the session strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerView {
    pub entries: Vec<HistoryEntry>,
    pub summary: HistorySummary,
    pub session: SessionSnapshot,
}

impl LedgerView {
    fn of(ledger: &ScanLedger) -> Self {
        Self {
            entries: ledger.history().list(),
            summary: ledger.history().summary(),
            session: ledger.session().snapshot(),
        }
    }
}

/// The single owner of the [`ScanLedger`].
///
/// Mutations hold the lock across the save so two writers cannot interleave
/// their snapshots on disk.
pub struct LedgerHandle {
    ledger: Mutex<ScanLedger>,
    store: Arc<dyn ScanStorePort>,
}

impl LedgerHandle {
    /// Load both halves from the store. Unreadable state starts empty.
    pub async fn load(store: Arc<dyn ScanStorePort>, capacity: usize) -> Self {
        let history = match store.load_history().await {
            Ok(history) => history,
            Err(err) => {
                warn!(error = %StoreError::Load(err), "starting with empty scan history");
                Default::default()
            }
        };
        let session = match store.load_session().await {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %StoreError::Load(err), "starting with empty session stats");
                Default::default()
            }
        };

        let ledger = ScanLedger::restore(history, session, capacity);
        debug!(
            entries = ledger.history().len(),
            scans = ledger.session().scan_count,
            "scan ledger loaded"
        );

        Self {
            ledger: Mutex::new(ledger),
            store,
        }
    }

    pub async fn record(
        &self,
        scan_id: ScanId,
        result: &ClassificationResult,
        model: &PresentationModel,
    ) -> (LedgerView, Result<(), StoreError>) {
        let mut ledger = self.ledger.lock().await;
        ledger.record_scan(scan_id, result, model);
        let saved = self.persist(&ledger).await;
        (LedgerView::of(&ledger), saved)
    }

    pub async fn clear(&self) -> (LedgerView, Result<(), StoreError>) {
        let mut ledger = self.ledger.lock().await;
        ledger.clear();
        let saved = self.persist(&ledger).await;
        (LedgerView::of(&ledger), saved)
    }

    pub async fn view(&self) -> LedgerView {
        LedgerView::of(&*self.ledger.lock().await)
    }

    async fn persist(&self, ledger: &ScanLedger) -> Result<(), StoreError> {
        self.store
            .save_history(&ledger.history().to_stored())
            .await
            .map_err(StoreError::Save)?;
        self.store
            .save_session(ledger.session())
            .await
            .map_err(StoreError::SessionLagging)
    }
}
