//! # Client configuration: `live-location-tracker.toml`
//!
//! Defines the TOML file the native clients read at startup (filename:
//! [`ClientConfig::filename`]). The web client builds the same structure in
//! code, using the page origin as the API base.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # the auth API lives under <base_url>/api
//!
//! [storage]
//! session_key = "user"                 # key holding the signed-in profile
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Where the auth API is reached. |
//! | [`StorageConfig`] | Which durable key holds the session. |
//!
//! All structs derive `Default`, so a missing or empty file is the default
//! configuration.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::session::DEFAULT_SESSION_KEY;

/// Top-level configuration stored in `live-location-tracker.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the server; request paths (`/api/auth/...`) are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point at another API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "live-location-tracker.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `<dir>/live-location-tracker.toml`; a missing file yields the default.
    pub fn load_from_dir(dir: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(content) => Ok(Self::from_toml(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.storage.session_key, "user");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://track.example\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://track.example");
        assert_eq!(config.storage.session_key, "user");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("https://a.example");
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_missing_dir_is_default() {
        let dir = std::env::temp_dir().join(format!("llt_config_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(ClientConfig::load_from_dir(&dir).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_load_from_dir_rejects_bad_toml() {
        let dir = std::env::temp_dir().join(format!("llt_config_bad_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(ClientConfig::filename()), "[api\nbase_url = 3").unwrap();

        let err = ClientConfig::load_from_dir(&dir).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
