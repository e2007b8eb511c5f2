use super::*;

#[test]
fn memory_storage_write_read_remove() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.read(TOKEN_KEY), None);
    storage.write(TOKEN_KEY, "tok").expect("write");
    assert_eq!(storage.read(TOKEN_KEY).as_deref(), Some("tok"));
    storage.remove(TOKEN_KEY).expect("remove");
    assert!(storage.is_empty());
}

#[test]
fn removing_absent_key_succeeds() {
    let mut storage = MemoryStorage::new();
    assert!(storage.remove(USER_KEY).is_ok());
}

#[test]
fn with_entries_prepopulates() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (USER_KEY, "{}")]);
    assert!(storage.contains(TOKEN_KEY));
    assert_eq!(storage.read(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn storage_error_names_operation_and_key() {
    let err = StorageError::write(USER_KEY, "quota exceeded");
    assert_eq!(err.to_string(), "storage write failed for `user`: quota exceeded");
}
