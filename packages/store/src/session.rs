//! # Session persistence port
//!
//! The client keeps exactly one durable record: the profile of the user who is
//! currently signed in. It is written after a successful login, removed on
//! logout, and read once at startup. This module splits that concern in two:
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface with three methods (`get`, `set`,
//! `remove`). Implementations live in sibling modules:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`MemoryStore`](crate::MemoryStore) | tests, fallback | [`crate::memory`] |
//! | [`FileStore`](crate::FileStore) | desktop / mobile | [`crate::file_store`] |
//! | `LocalStore` | web (`wasm32` + `web` feature) | `crate::local` |
//!
//! ## [`SessionStore`]
//!
//! A typed wrapper over one key of a backend. Values are stored as JSON, so
//! whatever the server sent for the profile round-trips unchanged.
//! [`load`](SessionStore::load) distinguishes "nothing stored" (`Ok(None)`) from
//! "something stored but unreadable" ([`StoreError::Malformed`]) so callers can
//! log the latter before treating both as an empty session.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Key under which the signed-in user's profile is kept.
pub const DEFAULT_SESSION_KEY: &str = "user";

/// Synchronous key-value storage that survives process restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed load/save/clear access to a single key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Bind to [`DEFAULT_SESSION_KEY`].
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and decode the stored value, if any.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: self.key.clone(),
                source,
            })
    }

    /// Encode and write `value`, replacing whatever was stored before.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;
        self.backend.set(&self.key, &raw)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}
