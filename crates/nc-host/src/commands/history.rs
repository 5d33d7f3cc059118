use super::dto::{HistoryDto, HistoryEntryDto, SessionDto};
use super::map_err;
use crate::bootstrap::AppRuntime;

/// Local history, most recent first, with session counters.
pub async fn list_history(runtime: &AppRuntime) -> Result<HistoryDto, String> {
    let view = runtime.app().list_history.execute().await;
    Ok(HistoryDto::from(&view))
}

/// History as the classification service keeps it.
pub async fn list_server_history(runtime: &AppRuntime) -> Result<Vec<HistoryEntryDto>, String> {
    let entries = runtime
        .app()
        .list_server_history
        .execute()
        .await
        .map_err(map_err)?;
    Ok(entries.iter().map(HistoryEntryDto::from).collect())
}

pub async fn session_stats(runtime: &AppRuntime) -> Result<SessionDto, String> {
    let view = runtime.app().list_history.execute().await;
    Ok(SessionDto::from(&view.session))
}

/// Empties history and session counters.
pub async fn clear_history(runtime: &AppRuntime) -> Result<HistoryDto, String> {
    let view = runtime.app().clear_history.execute().await.map_err(map_err)?;
    Ok(HistoryDto::from(&view))
}
