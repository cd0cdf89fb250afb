use std::sync::Arc;

use super::*;
use crate::session::Role;
use crate::storage::MemoryStorage;

const KEY: &str = "veritas.session";

fn ada() -> Session {
    Session::new("u-ada", "Ada", "ada@example.edu", Role::Teacher)
}

/// Storage whose writes and removals always fail.
struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("offline".to_owned()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_owned()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn open_empty_slot_has_no_session() {
    let store = SessionStore::open(MemoryStorage::new(), KEY);
    assert!(store.current().is_none());
}

#[test]
fn save_then_load_round_trips_all_fields() {
    let mut store = SessionStore::open(MemoryStorage::new(), KEY);
    store.save(ada()).unwrap();
    assert_eq!(store.load(), Some(ada()));
}

#[test]
fn reopen_recovers_persisted_session() {
    let storage = Arc::new(MemoryStorage::new());
    let mut first = SessionStore::open(Arc::clone(&storage), KEY);
    first.save(ada()).unwrap();

    let restarted = SessionStore::open(storage, KEY);
    assert_eq!(restarted.current(), Some(&ada()));
}

#[test]
fn malformed_json_loads_as_empty() {
    let storage = MemoryStorage::new();
    storage.write(KEY, "{not json").unwrap();
    let store = SessionStore::open(storage, KEY);
    assert!(store.current().is_none());
}

#[test]
fn unknown_role_loads_as_empty() {
    let storage = MemoryStorage::new();
    storage
        .write(KEY, r#"{"id":"u1","displayName":"A","email":"a@b","role":"admin"}"#)
        .unwrap();
    assert!(SessionStore::open(storage, KEY).current().is_none());
}

#[test]
fn empty_id_loads_as_empty() {
    let storage = MemoryStorage::new();
    storage
        .write(KEY, r#"{"id":"","displayName":"A","email":"a@b","role":"student"}"#)
        .unwrap();
    assert!(SessionStore::open(storage, KEY).current().is_none());
}

#[test]
fn unreadable_storage_loads_as_empty() {
    let store = SessionStore::open(BrokenStorage, KEY);
    assert!(store.current().is_none());
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_overwrites_previous_session() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = SessionStore::open(Arc::clone(&storage), KEY);
    store.save(ada()).unwrap();
    let grace = Session::new("u-grace", "Grace", "grace@example.edu", Role::Student);
    store.save(grace.clone()).unwrap();

    assert_eq!(store.current(), Some(&grace));
    assert_eq!(SessionStore::open(storage, KEY).current(), Some(&grace));
}

#[test]
fn save_failure_keeps_in_memory_session() {
    let mut store = SessionStore::open(BrokenStorage, KEY);
    assert!(store.save(ada()).is_err());
    assert_eq!(store.current(), Some(&ada()));
}

#[test]
fn clear_removes_memory_and_slot() {
    let storage = Arc::new(MemoryStorage::new());
    let mut store = SessionStore::open(Arc::clone(&storage), KEY);
    store.save(ada()).unwrap();
    store.clear().unwrap();

    assert!(store.current().is_none());
    assert_eq!(storage.read(KEY).unwrap(), None);
    assert!(SessionStore::open(storage, KEY).current().is_none());
}

#[test]
fn clear_twice_is_harmless() {
    let mut store = SessionStore::open(MemoryStorage::new(), KEY);
    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.current().is_none());
}

#[test]
fn clear_failure_still_drops_memory() {
    let mut store = SessionStore::open(BrokenStorage, KEY);
    let _ = store.save(ada());
    assert!(store.clear().is_err());
    assert!(store.current().is_none());
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("veritas-store-{}", uuid::Uuid::new_v4()));
    let mut store = SessionStore::open(crate::storage::FileStorage::new(&dir), KEY);
    store.save(ada()).unwrap();

    let reopened = SessionStore::open(crate::storage::FileStorage::new(&dir), KEY);
    assert_eq!(reopened.current(), Some(&ada()));

    std::fs::remove_dir_all(dir).unwrap();
}
