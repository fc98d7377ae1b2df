//! Tests for typed storage.

use std::sync::Arc;

use backoffice::{KeyValueStorage, MemoryStorage, StorageError, TypedStorage};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Prefs {
    page_size: u32,
    hidden: Vec<String>,
}

/// Backend that fails every operation.
struct Unavailable;

impl KeyValueStorage for Unavailable {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::backend("offline"))
    }

    fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::backend("offline"))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::backend("offline"))
    }
}

#[test]
fn test_typed_round_trip() {
    let storage = TypedStorage::in_memory();
    let prefs = Prefs {
        page_size: 20,
        hidden: vec!["stock".to_string()],
    };
    storage.set("prefs", &prefs).unwrap();
    assert_eq!(storage.get::<Prefs>("prefs").unwrap(), Some(prefs));
}

#[test]
fn test_missing_key() {
    let storage = TypedStorage::in_memory();
    assert_eq!(storage.get::<String>("nothing").unwrap(), None);
    assert_eq!(storage.get_or("nothing", 10u32).unwrap(), 10);
}

#[test]
fn test_remove() {
    let storage = TypedStorage::in_memory();
    storage.set("k", &1u8).unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get::<u8>("k").unwrap(), None);
}

#[test]
fn test_clones_share_backend() {
    let backend: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let a = TypedStorage::from_shared(backend.clone());
    let b = a.clone();
    a.set("shared", "yes").unwrap();
    assert_eq!(b.get::<String>("shared").unwrap().as_deref(), Some("yes"));
    assert!(backend.get("shared").unwrap().is_some());
}

#[test]
fn test_deserialization_error_names_key() {
    let memory = MemoryStorage::new();
    memory.set("broken", vec![0xff]).unwrap();
    let storage = TypedStorage::new(memory);

    let err = storage.get::<String>("broken").unwrap_err();
    assert!(matches!(err, StorageError::Deserialization { ref key, .. } if key == "broken"));
}

#[test]
fn test_backend_errors_propagate() {
    let storage = TypedStorage::new(Unavailable);
    let err = storage.set("k", &1u8).unwrap_err();
    assert_eq!(err.to_string(), "storage backend error: offline");
}
