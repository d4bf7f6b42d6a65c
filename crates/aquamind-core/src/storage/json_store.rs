//! File-backed and in-memory implementations of [`KeyValueStore`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{data_dir, KeyValueStore};
use crate::error::StorageError;

/// Stores each key as a `<key>.json` file under the data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store rooted at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store rooted at a custom directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory store. Cloning yields a second handle onto the same map, which
/// lets tests keep inspecting the store after handing it to the app.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(dir.path());

        assert!(store.get("aqua_settings").unwrap().is_none());
        store.set("aqua_settings", r#"{"name":"Deniz"}"#).unwrap();
        assert_eq!(
            store.get("aqua_settings").unwrap().as_deref(),
            Some(r#"{"name":"Deniz"}"#)
        );
    }

    #[test]
    fn file_store_set_replaces_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(dir.path());

        store.set("aqua_logs_date", "Sat Aug 29 2026").unwrap();
        store.set("aqua_logs_date", "Sun Aug 30 2026").unwrap();
        assert_eq!(
            store.get("aqua_logs_date").unwrap().as_deref(),
            Some("Sun Aug 30 2026")
        );
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }
}
