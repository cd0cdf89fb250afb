use super::*;

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("veritas-{tag}-{}", uuid::Uuid::new_v4()))
}

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_read_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("k").unwrap(), None);
}

#[test]
fn memory_write_then_read() {
    let storage = MemoryStorage::new();
    storage.write("k", "v1").unwrap();
    storage.write("k", "v2").unwrap();
    assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn memory_remove_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.write("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.read("k").unwrap(), None);
}

#[test]
fn arc_storage_shares_slots() {
    let shared = Arc::new(MemoryStorage::new());
    let other = Arc::clone(&shared);
    shared.write("k", "v").unwrap();
    assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
}

// =============================================================================
// FileStorage
// =============================================================================

#[test]
fn file_read_missing_dir_is_none() {
    let storage = FileStorage::new(scratch_dir("missing"));
    assert_eq!(storage.read("veritas.session").unwrap(), None);
}

#[test]
fn file_write_creates_dir_and_persists() {
    let dir = scratch_dir("write");
    let storage = FileStorage::new(&dir);
    storage.write("veritas.session", "{\"a\":1}").unwrap();

    let reopened = FileStorage::new(&dir);
    assert_eq!(reopened.read("veritas.session").unwrap().as_deref(), Some("{\"a\":1}"));
    assert!(!storage.slot_path("veritas.session").with_extension("json.tmp").exists());

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_remove_missing_is_ok() {
    let dir = scratch_dir("remove");
    let storage = FileStorage::new(&dir);
    storage.remove("veritas.session").unwrap();
    storage.write("veritas.session", "x").unwrap();
    storage.remove("veritas.session").unwrap();
    assert_eq!(storage.read("veritas.session").unwrap(), None);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn file_slot_path_sanitizes_key() {
    let storage = FileStorage::new("/tmp/veritas");
    let path = storage.slot_path("../etc/passwd");
    assert_eq!(path.file_name().unwrap(), ".._etc_passwd.json");
    assert_eq!(path.parent().unwrap(), storage.dir());
}
