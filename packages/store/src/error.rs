//! Errors raised by key-value backends and the session persistence port.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached (no `localStorage`, poisoned lock, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value exists but does not decode into the expected shape.
    #[error("stored value under `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
