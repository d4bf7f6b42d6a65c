//! Key-value persistence for the three AquaMind blobs.
//!
//! The core persists exactly three opaque JSON-shaped values: the user
//! settings, the current day's intake log, and the day marker the log
//! belongs to. Keys are carried over from the original localStorage-backed
//! client so an inspector of the data directory sees familiar names.

mod json_store;

pub use json_store::{FileStore, MemoryStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Key under which the full [`crate::Settings`] object is persisted.
pub const SETTINGS_KEY: &str = "aqua_settings";
/// Key under which the current day's intake list is persisted.
pub const LOGS_KEY: &str = "aqua_logs_today";
/// Key under which the day marker for the intake list is persisted.
pub const DAY_MARKER_KEY: &str = "aqua_logs_date";

/// Opaque key-value collaborator. An absent key reads as `None` and is
/// treated as "not present", triggering defaults upstream.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Whole-value replacement; there is no partial update.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/aquamind[-dev]/` based on AQUAMIND_ENV.
///
/// Set AQUAMIND_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("AQUAMIND_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("aquamind-dev")
    } else {
        base_dir.join("aquamind")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
