//! Read-only views of scan history.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use nc_core::ports::{ServerHistoryPort, TransportError};
use nc_core::{HistoryEntry, ScanId};

use super::ledger::{LedgerHandle, LedgerView};

/// Local history and session counters, most recent first.
pub struct ListHistory {
    ledger: Arc<LedgerHandle>,
}

impl ListHistory {
    pub fn new(ledger: Arc<LedgerHandle>) -> Self {
        Self { ledger }
    }

    pub async fn execute(&self) -> LedgerView {
        self.ledger.view().await
    }
}

/// History as the classification service recorded it.
pub struct ListServerHistory {
    server_history: Arc<dyn ServerHistoryPort>,
}

impl ListServerHistory {
    pub fn new(server_history: Arc<dyn ServerHistoryPort>) -> Self {
        Self { server_history }
    }

    /// Most recent first, as the server returns it. Server entries are keyed
    /// by their stored filename.
    pub async fn execute(&self) -> Result<Vec<HistoryEntry>, TransportError> {
        let span = info_span!("usecase.list_server_history.execute");

        async {
            let results = self.server_history.list().await?;
            debug!(count = results.len(), "server history fetched");

            Ok(results
                .iter()
                .map(|result| {
                    HistoryEntry::from_result(ScanId::from(result.server_filename.as_str()), result)
                })
                .collect())
        }
        .instrument(span)
        .await
    }
}
