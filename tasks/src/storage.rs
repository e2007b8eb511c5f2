//! Durable key/value storage behind the session store.
//!
//! The browser backs this with `localStorage` and the CLI with a JSON file;
//! both only ever see the two keys below.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// A durable write or delete failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("storage {op} failed for `{key}`: {reason}")]
pub struct StorageError {
    pub op: &'static str,
    pub key: String,
    pub reason: String,
}

impl StorageError {
    pub fn write(key: &str, reason: impl Into<String>) -> Self {
        Self {
            op: "write",
            key: key.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn remove(key: &str, reason: impl Into<String>) -> Self {
        Self {
            op: "remove",
            key: key.to_owned(),
            reason: reason.into(),
        }
    }
}

/// String key/value store that survives restarts.
pub trait SessionStorage {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the delete.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage; contents vanish with the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
