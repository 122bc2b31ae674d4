//! Key-value persistence seam
//!
//! The page keeps all of its state in a single string-keyed store
//! (`localStorage` in the browser). Callers receive the store explicitly
//! instead of reaching for a global, which lets tests swap in [`MemoryStore`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Errors surfaced by a [`KeyValueStore`] backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("lock poisoned")]
    Poisoned,
}

/// String-keyed persistent store
///
/// Implementations are synchronous: the browser storage API is, and every
/// caller runs on the UI thread.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key` (create or overwrite)
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key` if present
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store
///
/// Data lives only as long as the value (and its clones, which share the map).
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial contents
    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
