//! `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only web-sys glue so the session code never touches
//! the browser directly. Native builds have no durable storage: reads find
//! nothing and writes are accepted and dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use tasks::{SessionStorage, StorageError};

/// Session storage backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| StorageError::write(key, "localStorage unavailable"))?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::write(key, js_reason(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| StorageError::remove(key, "localStorage unavailable"))?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::remove(key, js_reason(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
