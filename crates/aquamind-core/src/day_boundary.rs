//! Startup-only calendar day rollover.
//!
//! The persisted day marker is compared against the current local date
//! once at process start. A matching marker keeps the persisted log;
//! anything else starts an empty log and overwrites the marker. There is
//! no scheduled midnight rollover while running.

use log::debug;

use crate::daily_log::{DailyLog, IntakeEvent};
use crate::error::{CoreError, StorageError};
use crate::storage::{KeyValueStore, DAY_MARKER_KEY, LOGS_KEY};

/// The marker value for the current local calendar date, e.g. `2026-08-30`.
/// Date strings are compared, never elapsed time.
pub fn today_marker() -> String {
    chrono::Local::now().date_naive().to_string()
}

/// Load the daily log for today, resetting it if the calendar day changed.
///
/// # Errors
///
/// Propagates storage failures; a persisted log that does not parse is
/// reported as [`StorageError::Corrupted`].
pub fn resolve(store: &dyn KeyValueStore) -> Result<DailyLog, CoreError> {
    let today = today_marker();
    let marker = store.get(DAY_MARKER_KEY)?;

    if marker.as_deref() == Some(today.as_str()) {
        let log = match store.get(LOGS_KEY)? {
            Some(raw) => {
                let entries: Vec<IntakeEvent> =
                    serde_json::from_str(&raw).map_err(|e| StorageError::Corrupted {
                        key: LOGS_KEY.to_string(),
                        message: e.to_string(),
                    })?;
                DailyLog::from_entries(entries)
            }
            None => DailyLog::new(),
        };
        return Ok(log);
    }

    debug!(
        "calendar day changed ({} -> {today}), starting a fresh log",
        marker.as_deref().unwrap_or("absent")
    );
    let log = DailyLog::new();
    store.set(DAY_MARKER_KEY, &today)?;
    log.save(store)?;
    Ok(log)
}
