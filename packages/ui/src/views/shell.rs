use dioxus::prelude::*;

use crate::auth::use_session;
use crate::view::Screen;
use crate::SHELL_CSS;

use super::{DashboardView, LoadingScreen, LoginView, RegisterView};

/// Top-level view: renders whichever screen the session controller selects.
///
/// Must be placed inside a [`SessionProvider`](crate::SessionProvider).
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let screen = session.read().screen();

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        {match screen {
            Screen::Loading => rsx! { LoadingScreen {} },
            Screen::Login => rsx! { LoginView {} },
            Screen::Register => rsx! { RegisterView {} },
            Screen::Dashboard => rsx! { DashboardView {} },
        }}
    }
}
