//! `localStorage` backend for the session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the `csr` build talks to the browser. Other builds see an empty,
//! read-only slot, so the app still renders (signed out) under native tests.

use veritas::StorageError;
use veritas::storage::SessionStorage;

/// Session slot backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("no browser storage in this build".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(feature = "csr")))]
mod tests {
    use super::*;

    #[test]
    fn native_build_reads_empty_slot() {
        assert_eq!(BrowserStorage.read("veritas.session").unwrap(), None);
    }

    #[test]
    fn native_build_rejects_writes_but_allows_remove() {
        assert!(BrowserStorage.write("veritas.session", "{}").is_err());
        assert!(BrowserStorage.remove("veritas.session").is_ok());
    }
}
