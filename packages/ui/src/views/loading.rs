use dioxus::prelude::*;

use crate::icons::FaShieldHalved;
use crate::Icon;

/// Shown until the persisted session has been read.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            Icon { icon: FaShieldHalved, width: 48, height: 48 }
            p { "Loading..." }
        }
    }
}
