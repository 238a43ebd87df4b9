//! Placeholder dashboard panels. Location, family and alert features are not
//! implemented; these only mark where they will live.

use api::UserProfile;
use dioxus::prelude::*;

use crate::icons::{FaBell, FaMapLocationDot, FaUsers};
use crate::Icon;

#[component]
pub fn MapPanel() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Live Location Map" }
            div {
                class: "panel__map",
                div {
                    Icon { icon: FaMapLocationDot, width: 48, height: 48 }
                    p { "Map integration would be implemented here" }
                    p { class: "panel__hint", "Google Maps, Mapbox, or similar service" }
                }
            }
        }
    }
}

#[component]
pub fn FamilyPanel() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Family Members" }
            div {
                class: "panel__card",
                div {
                    Icon { icon: FaUsers, width: 20, height: 20 }
                    h3 { "Add Family Members" }
                    p { class: "panel__hint", "Invite family members to join your circle" }
                }
                button {
                    class: "btn",
                    disabled: true,
                    title: "Family circles are not available yet",
                    "Add Member"
                }
            }
        }
    }
}

#[component]
pub fn AlertsPanel() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Emergency Alerts" }
            div {
                class: "panel__empty",
                Icon { icon: FaBell, width: 48, height: 48 }
                p { "No alerts at this time" }
                p { class: "panel__hint", "Emergency alerts will appear here" }
            }
        }
    }
}

/// Read-only view of the signed-in profile.
#[component]
pub fn SettingsPanel(user: UserProfile) -> Element {
    let phone = user.phone_number.clone().unwrap_or_default();

    rsx! {
        section {
            class: "panel",
            h2 { "Settings" }
            h3 { "Profile Information" }
            div {
                class: "panel__grid",
                ProfileField { label: "First Name", value: user.first_name.clone() }
                ProfileField { label: "Last Name", value: user.last_name.clone() }
                ProfileField { label: "Email", value: user.email.clone() }
                ProfileField { label: "Phone Number", value: phone }
            }
            button {
                class: "btn",
                disabled: true,
                title: "Profile editing is not available yet",
                "Update Profile"
            }
        }
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "field",
            label { "{label}" }
            input { r#type: "text", readonly: true, value: "{value}" }
        }
    }
}
