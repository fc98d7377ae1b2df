//! Storage backend trait.

use super::StorageError;

/// Raw byte storage keyed by string.
///
/// [`TypedStorage`](super::TypedStorage) layers typed serialization on top.
pub trait KeyValueStorage: Send + Sync {
    /// Get raw bytes for a key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Set raw bytes for a key.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
