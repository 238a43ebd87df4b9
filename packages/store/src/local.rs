//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Each
//! key maps to one `localStorage` item, optionally prefixed so several apps on
//! the same origin do not collide.
//!
//! `localStorage` is synchronous, so this backend needs no async plumbing. The
//! handle is looked up on every call because `web_sys::Storage` is not `Send`
//! and the lookup is cheap.

use crate::error::StoreError;
use crate::session::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    prefix: String,
}

impl LocalStore {
    /// Store keys verbatim (`"user"` stays `"user"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store keys as `"<prefix>:<key>"`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn item_key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{key}", self.prefix)
        }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&self.item_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.item_key(key), value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(&self.item_key(key))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
