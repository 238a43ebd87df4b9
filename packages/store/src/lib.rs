pub mod config;
pub mod error;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use session::{KeyValueStore, SessionStore, DEFAULT_SESSION_KEY};
