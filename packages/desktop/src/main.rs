use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};

fn main() {
    // LLT_API_BASE_URL may come from a local .env
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_client_config);
    tracing::debug!(base_url = %config.api.base_url, "client config loaded");

    rsx! {
        SessionProvider {
            config,
            AppShell {}
        }
    }
}
