//! Screen and tab selection for the shell.
//!
//! Which top-level screen is visible is derived from the session; the
//! dashboard tab and the mobile sidebar are plain presentation state.

use std::fmt;

/// Mutually exclusive top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Before the persisted session has been read. Left exactly once.
    #[default]
    Loading,
    Login,
    Register,
    Dashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Loading => "loading",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Dashboard sub-views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Map,
    Family,
    Alerts,
    Settings,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 4] = [Tab::Map, Tab::Family, Tab::Alerts, Tab::Settings];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Map => "map",
            Tab::Family => "family",
            Tab::Alerts => "alerts",
            Tab::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Map => "Map View",
            Tab::Family => "Family",
            Tab::Alerts => "Alerts",
            Tab::Settings => "Settings",
        }
    }
}

/// Which screen, tab and sidebar state are showing.
///
/// Only [`SessionController`](crate::SessionController) mutates this, so the
/// screen can never disagree with the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) screen: Screen,
    pub(crate) active_tab: Tab,
    pub(crate) sidebar_open: bool,
}

impl ViewState {
    pub(crate) fn on(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Only meaningful while [`screen`](Self::screen) is [`Screen::Dashboard`].
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_loading_on_map() {
        let view = ViewState::default();
        assert_eq!(view.screen(), Screen::Loading);
        assert_eq!(view.active_tab(), Tab::Map);
        assert!(!view.sidebar_open());
    }

    #[test]
    fn test_tab_labels_and_ids() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Map View", "Family", "Alerts", "Settings"]);
        let ids: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["map", "family", "alerts", "settings"]);
    }

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::Dashboard.to_string(), "dashboard");
        assert_eq!(Screen::Register.to_string(), "register");
    }
}
