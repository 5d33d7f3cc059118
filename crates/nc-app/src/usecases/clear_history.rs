//! Explicit clear of history and session stats.
//! 清空历史与会话统计。

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use nc_core::ports::{ScanViewPort, ServerHistoryPort, StoreError};
use nc_core::ViewEvent;

use super::ledger::{LedgerHandle, LedgerView};

/// Empties local history, zeroes the session and persists both.
///
/// With `sync_server` the server-side history is cleared too; a failure
/// there is logged and the local clear still applies.
pub struct ClearHistory {
    ledger: Arc<LedgerHandle>,
    server_history: Arc<dyn ServerHistoryPort>,
    view: Arc<dyn ScanViewPort>,
    sync_server: bool,
}

impl ClearHistory {
    pub fn new(
        ledger: Arc<LedgerHandle>,
        server_history: Arc<dyn ServerHistoryPort>,
        view: Arc<dyn ScanViewPort>,
        sync_server: bool,
    ) -> Self {
        Self {
            ledger,
            server_history,
            view,
            sync_server,
        }
    }

    pub async fn execute(&self) -> Result<LedgerView, StoreError> {
        let span = info_span!("usecase.clear_history.execute", sync_server = self.sync_server);

        async {
            if self.sync_server {
                if let Err(err) = self.server_history.clear().await {
                    warn!(error = %err, "server history not cleared");
                }
            }

            let (ledger, saved) = self.ledger.clear().await;

            self.view
                .render(ViewEvent::SessionChanged(ledger.session.clone()));
            self.view.render(ViewEvent::HistoryChanged {
                entries: ledger.entries.clone(),
                summary: ledger.summary,
            });

            saved?;
            info!("scan history cleared");
            Ok(ledger)
        }
        .instrument(span)
        .await
    }
}
