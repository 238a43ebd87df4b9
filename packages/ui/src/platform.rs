//! Platform-specific construction of the durable store and client config.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`],
//!   API base taken from the page origin.
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`] under
//!   the platform data dir, config read from the platform config dir with an
//!   `LLT_API_BASE_URL` override.

use store::{ClientConfig, SessionStore};

/// Directory name used under the platform data/config dirs.
pub const APP_DIR: &str = "live-location-tracker";

/// Environment variable that overrides `[api] base_url` on native platforms.
pub const API_BASE_URL_ENV: &str = "LLT_API_BASE_URL";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the session store for this platform, keyed per `config`.
pub fn make_session_store(config: &ClientConfig) -> SessionStore<PlatformStore> {
    let key = config.storage.session_key.clone();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::with_key(store::LocalStore::new(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        SessionStore::with_key(store::FileStore::new(base), key)
    }
}

/// Load the client configuration for this platform, falling back to defaults.
pub fn load_client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(origin) => ClientConfig::default().with_base_url(origin),
            None => ClientConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        let config = match ClientConfig::load_from_dir(&dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config, {}: {}", dir.display(), e);
                ClientConfig::default()
            }
        };
        apply_env_override(config, std::env::var(API_BASE_URL_ENV).ok())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_env_override(config: ClientConfig, base_url: Option<String>) -> ClientConfig {
    match base_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => config.with_base_url(url.trim()),
        None => config,
    }
}
