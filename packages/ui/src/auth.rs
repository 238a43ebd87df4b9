//! Session context and hooks for the UI.

use api::HttpAuthClient;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::controller::SessionController;
use crate::platform::{make_session_store, PlatformStore};

/// The controller type the app runs with on this platform.
pub type Shell = SessionController<PlatformStore>;

/// Get the session controller.
/// Returns a signal that updates on every screen, tab or form change.
pub fn use_session() -> Signal<Shell> {
    use_context::<Signal<Shell>>()
}

/// Get the HTTP client for the auth API.
pub fn use_auth_api() -> HttpAuthClient {
    use_context::<HttpAuthClient>()
}

/// Provider component that owns the session controller.
/// The persisted session is restored synchronously before the first render.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let store_config = config.clone();
    use_context_provider(move || {
        let mut shell = SessionController::new(make_session_store(&store_config));
        let screen = shell.restore_session();
        tracing::info!(%screen, "session restored");
        Signal::new(shell)
    });
    use_context_provider(move || HttpAuthClient::new(config.api.base_url.clone()));

    rsx! {
        {children}
    }
}
