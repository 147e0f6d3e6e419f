use crate::errors::TrackerError;
use crate::models::{DayRecord, DayUpdate};
use crate::state::AppState;
use crate::storage::persist_store;
use chrono::NaiveDate;
use tracing::{error, info};

/// Applies one field edit and writes the whole store back to disk.
///
/// The store lock is held across mutate and persist so edits reach the file
/// in the order they were applied. A failed write keeps the edit in memory;
/// the caller gets the error and may retry.
pub async fn apply_update(
    state: &AppState,
    date: NaiveDate,
    update: DayUpdate,
) -> Result<DayRecord, TrackerError> {
    let field = update.field();
    let mut store = state.store.lock().await;
    let record = store.apply(date, update)?.clone();

    if let Err(err) = persist_store(&state.data_path, &store).await {
        error!("saving {field} for {date} failed: {err}");
        return Err(err);
    }

    info!("saved {field} for {date}");
    Ok(record)
}
