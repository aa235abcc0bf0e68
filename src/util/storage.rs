//! Browser-local key/value persistence with JSON encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auto-save drafts and the dark mode preference live in `localStorage`. The
//! [`KeyValueStore`] trait keeps that behind a seam so the same persistence
//! logic runs against [`MemoryStore`] in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. The JSON helpers log and swallow every failure:
//! a missing, full, or corrupted store degrades to "nothing persisted" rather
//! than breaking page interactivity.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`KeyValueStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (private mode, disabled cookies, SSR).
    #[error("local storage is not available")]
    Unavailable,
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },
    /// The backing store rejected the operation for another reason.
    #[error("storage {op} failed for `{key}`: {message}")]
    Backend {
        op: &'static str,
        key: String,
        message: String,
    },
    /// The value could not be encoded as JSON.
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// Missing keys, unreadable storage, and malformed JSON all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            leptos::logging::warn!("local storage not available: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed value under `{key}`: {e}");
            None
        }
    }
}

/// Load the JSON value under `key`, or `default` when it cannot be read.
pub fn load_json_or<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    load_json(store, key).unwrap_or(default)
}

/// Encode `value` as JSON and store it under `key`.
///
/// Failures are logged; the return value reports whether the write landed.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> bool {
    match try_save_json(store, key, value) {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("local storage write skipped: {e}");
            false
        }
    }
}

/// Encode and store `value`, surfacing the failure to the caller.
pub fn try_save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    store.set_item(key, &raw)
}

/// Remove `key`, logging any failure.
pub fn remove(store: &impl KeyValueStore, key: &str) -> bool {
    match store.remove_item(key) {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("could not clear `{key}`: {e}");
            false
        }
    }
}

/// In-memory store with optional failure simulation.
///
/// Clones share the same entries, so a test can hold one handle while a
/// component writes through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose total key + value length may not exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().quota_bytes = Some(quota_bytes);
        store
    }

    /// Make every subsequent operation fail with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    /// Raw stored string under `key`, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        if let Some(quota) = inner.quota_bytes {
            let used: usize = inner
                .entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_owned() });
            }
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        inner.entries.remove(key);
        Ok(())
    }
}

/// `window.localStorage`, resolved lazily on each operation.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Backend {
            op: "read",
            key: key.to_owned(),
            message: js_message(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| {
            let message = js_message(&e);
            if message.contains("QuotaExceeded") {
                StorageError::QuotaExceeded { key: key.to_owned() }
            } else {
                StorageError::Backend {
                    op: "write",
                    key: key.to_owned(),
                    message,
                }
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| StorageError::Backend {
            op: "remove",
            key: key.to_owned(),
            message: js_message(&e),
        })
    }
}
