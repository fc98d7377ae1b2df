//! In-memory storage backed by DashMap.

use dashmap::DashMap;

use super::KeyValueStorage;
use super::StorageError;

/// A key-value store backed by a concurrent hash map.
///
/// Data is lost when the process exits.
///
/// # Example
///
/// ```
/// use backoffice::{KeyValueStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// storage.set("theme", b"dark".to_vec())?;
/// assert_eq!(storage.get("theme")?, Some(b"dark".to_vec()));
/// # Ok::<(), backoffice::StorageError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    store: DashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }
}
