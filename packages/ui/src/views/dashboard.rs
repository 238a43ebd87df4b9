use dioxus::prelude::*;

use crate::auth::use_session;
use crate::icons::{
    FaBars, FaBell, FaGear, FaMapLocationDot, FaRightFromBracket, FaShieldHalved, FaUsers, FaXmark,
};
use crate::view::Tab;
use crate::Icon;

use super::{AlertsPanel, FamilyPanel, MapPanel, SettingsPanel};

/// Signed-in shell: header, tab sidebar and the active panel.
#[component]
pub fn DashboardView() -> Element {
    let mut session = use_session();
    let (user, view) = {
        let shell = session.read();
        (shell.user().cloned(), shell.view().clone())
    };
    let Some(user) = user else {
        return rsx! {};
    };
    let active_tab = view.active_tab();
    let sidebar_open = view.sidebar_open();

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard__header",
                div {
                    class: "dashboard__brand",
                    button {
                        class: "sidebar-toggle",
                        title: if sidebar_open { "Close menu" } else { "Open menu" },
                        onclick: move |_| {
                            session.write().toggle_sidebar();
                        },
                        if sidebar_open {
                            Icon { icon: FaXmark, width: 24, height: 24 }
                        } else {
                            Icon { icon: FaBars, width: 24, height: 24 }
                        }
                    }
                    Icon { icon: FaShieldHalved, width: 32, height: 32 }
                    h1 { "Live Location Tracker" }
                }
                div {
                    class: "dashboard__user",
                    span { "Welcome, {user.first_name}" }
                    button {
                        class: "btn btn--outline",
                        onclick: move |_| {
                            if let Err(e) = session.write().logout() {
                                tracing::warn!("logout refused: {}", e);
                            }
                        },
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }

            div {
                class: "dashboard__body",

                nav {
                    class: if sidebar_open { "sidebar sidebar--open" } else { "sidebar" },
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.id()}",
                            class: if tab == active_tab { "sidebar__tab sidebar__tab--active" } else { "sidebar__tab" },
                            onclick: move |_| {
                                if let Err(e) = session.write().select_tab(tab) {
                                    tracing::debug!("tab not selected: {}", e);
                                }
                            },
                            TabIcon { tab }
                            "{tab.label()}"
                        }
                    }
                }

                main {
                    class: "dashboard__main",
                    {match active_tab {
                        Tab::Map => rsx! { MapPanel {} },
                        Tab::Family => rsx! { FamilyPanel {} },
                        Tab::Alerts => rsx! { AlertsPanel {} },
                        Tab::Settings => rsx! { SettingsPanel { user: user.clone() } },
                    }}
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: Tab) -> Element {
    match tab {
        Tab::Map => rsx! { Icon { icon: FaMapLocationDot, width: 20, height: 20 } },
        Tab::Family => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
        Tab::Alerts => rsx! { Icon { icon: FaBell, width: 20, height: 20 } },
        Tab::Settings => rsx! { Icon { icon: FaGear, width: 20, height: 20 } },
    }
}
