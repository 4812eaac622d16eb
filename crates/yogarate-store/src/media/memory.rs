//! In-memory key-value medium for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use yogarate_core::{KeyValueStore, RepositoryError};

use super::validate_key;

/// `HashMap`-backed medium.
///
/// Clones share the same entries, so a test can keep a handle on the medium
/// after handing a clone to a store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Create a new empty medium.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        validate_key(key)?;
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let kv = MemoryKeyValueStore::new();
        assert_eq!(kv.get("ratings").unwrap(), None);

        kv.set("ratings", "[]").unwrap();
        assert_eq!(kv.get("ratings").unwrap().as_deref(), Some("[]"));
        assert_eq!(kv.len(), 1);

        kv.remove("ratings").unwrap();
        kv.remove("ratings").unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn clones_share_entries() {
        let kv = MemoryKeyValueStore::new();
        let handle = kv.clone();
        kv.set("instructors", "[1]").unwrap();
        assert_eq!(handle.get("instructors").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let kv = MemoryKeyValueStore::new();
        assert!(kv.set("../escape", "x").is_err());
        assert!(kv.get("").is_err());
    }
}
