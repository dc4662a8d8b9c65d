//! Durable key-value store
//!
//! The gateway keeps the whole movement list as one JSON string under a fixed
//! key. [`FileStore`] maps each key to a file on disk; [`MemoryStore`] keeps
//! values in memory and is used by tests and throwaway sessions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::FinordenError;

use super::file_io::{read_string, remove_if_exists, write_atomic};

/// String-keyed persistent storage
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, FinordenError>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), FinordenError>;

    /// Delete `key`; deleting a missing key succeeds
    fn remove(&self, key: &str) -> Result<(), FinordenError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, FinordenError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FinordenError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), FinordenError> {
        (**self).remove(key)
    }
}

/// A store that keeps one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinordenError> {
        read_string(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FinordenError> {
        write_atomic(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), FinordenError> {
        remove_if_exists(self.path_for(key))
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut data) = store.data.write() {
            data.insert(key.into(), value.into());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinordenError> {
        let data = self.data.read().map_err(|e| {
            FinordenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FinordenError> {
        let mut data = self.data.write().map_err(|e| {
            FinordenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), FinordenError> {
        let mut data = self.data.write().map_err(|e| {
            FinordenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.remove(key);
        Ok(())
    }
}
