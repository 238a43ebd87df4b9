//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on desktop and mobile platforms so the signed-in
//! session survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json          # one file per key, holding the raw value
//! ```
//!
//! ## Platform data directories
//!
//! The desktop entry point passes [`dirs::data_dir()`]`/live-location-tracker`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/live-location-tracker/` |
//! | Linux | `~/.local/share/live-location-tracker/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\live-location-tracker\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("llt_store_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_dir("roundtrip");

        let store = FileStore::new(dir.clone());
        assert_eq!(store.get("user").unwrap(), None);
        store.set("user", r#"{"id":1}"#).unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some(r#"{"id":1}"#));
        assert!(dir.join("user.json").exists());

        reopened.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);
        reopened.remove("user").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = temp_dir("session");

        let session = SessionStore::new(FileStore::new(dir.clone()));
        session.save(&vec!["a", "b"]).unwrap();

        let reopened = SessionStore::new(FileStore::new(dir.clone()));
        let loaded: Option<Vec<String>> = reopened.load().unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
