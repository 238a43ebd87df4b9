use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Same-origin API when served next to the backend
    let config = use_hook(ui::load_client_config);
    tracing::debug!(base_url = %config.api.base_url, "client config loaded");

    rsx! {
        SessionProvider {
            config,
            AppShell {}
        }
    }
}
