//! Shared UI for the Live Location Tracker client shell.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`controller`] | [`SessionController`]: session restore, login, register, logout, tab and sidebar state |
//! | [`form`] | [`FormState`] for the login and registration forms |
//! | [`view`] | [`Screen`], [`Tab`] and [`ViewState`] |
//! | [`platform`] | Per-platform session store and config loading |
//! | [`views`] | Dioxus components for each screen |
//!
//! The web and desktop launchers only wrap [`AppShell`] in a
//! [`SessionProvider`]; everything else lives here.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SHELL_CSS: Asset = asset!("/assets/shell.css");

pub mod controller;
pub use controller::{
    SessionController, LOGIN_FAILED, REGISTRATION_FAILED, REGISTRATION_SUCCEEDED, RESEND_FAILED,
    VERIFICATION_SENT,
};

pub mod error;
pub use error::ShellError;

pub mod form;
pub use form::{FormFields, FormState};

pub mod view;
pub use view::{Screen, Tab, ViewState};

pub mod platform;
pub use platform::{load_client_config, make_session_store, PlatformStore};

mod auth;
pub use auth::{use_auth_api, use_session, SessionProvider, Shell};

pub mod views;
pub use views::AppShell;
