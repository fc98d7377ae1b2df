//! Typed key-value storage.

mod backend;
mod memory;

pub use backend::KeyValueStorage;
pub use memory::MemoryStorage;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Storage error type.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error for key {key}: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: bincode::Error,
    },
}

impl StorageError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Typed storage.
///
/// Wraps a [`KeyValueStorage`] with typed serialization via bincode. Cloning
/// shares the backend.
#[derive(Clone)]
pub struct TypedStorage {
    backend: Arc<dyn KeyValueStorage>,
}

impl TypedStorage {
    /// Create a typed storage over a backend.
    pub fn new(backend: impl KeyValueStorage + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a typed storage over a shared backend.
    pub fn from_shared(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    /// In-memory storage.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map(Some)
                .map_err(|source| StorageError::Deserialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, StorageError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = bincode::serialize(value).map_err(StorageError::Serialization)?;
        self.backend.set(key, bytes)
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }
}

impl std::fmt::Debug for TypedStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedStorage").finish_non_exhaustive()
    }
}
