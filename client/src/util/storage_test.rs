#![cfg(not(feature = "csr"))]

use super::*;
use tasks::storage::{TOKEN_KEY, USER_KEY};

#[test]
fn read_is_empty_in_native_tests() {
    assert_eq!(BrowserStorage.read(TOKEN_KEY), None);
}

#[test]
fn write_and_remove_are_noops_but_succeed() {
    let mut storage = BrowserStorage;
    assert!(storage.write(USER_KEY, "{}").is_ok());
    assert!(storage.remove(USER_KEY).is_ok());
    assert_eq!(storage.read(USER_KEY), None);
}
