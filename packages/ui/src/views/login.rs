//! Sign-in screen with email/password form.

use api::AuthApi;
use dioxus::prelude::*;

use crate::auth::{use_auth_api, use_session};
use crate::icons::FaShieldHalved;
use crate::Icon;

/// Login page component.
#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let api = use_auth_api();
    let form = session.read().login_form().clone();

    let submit_api = api.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = submit_api.clone();
        spawn(async move {
            let begun = session.write().begin_login();
            let request = match begun {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("login not submitted: {}", e);
                    return;
                }
            };
            let outcome = api.login(&request).await;
            if let Err(e) = session.write().complete_login(outcome) {
                tracing::debug!("login not completed: {}", e);
            }
        });
    };

    let handle_resend = move |_| {
        let api = api.clone();
        spawn(async move {
            let begun = session.write().begin_resend();
            let request = match begun {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("resend not submitted: {}", e);
                    return;
                }
            };
            let outcome = api.resend_verification(&request).await;
            if let Err(e) = session.write().complete_resend(outcome) {
                tracing::debug!("resend not completed: {}", e);
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                div {
                    class: "auth-card__header",
                    Icon { icon: FaShieldHalved, width: 48, height: 48 }
                    h1 { "Live Location Tracker" }
                    p { "Keep your family safe" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    div {
                        class: "field",
                        label { r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            required: true,
                            value: "{form.fields.email}",
                            oninput: move |evt: FormEvent| {
                                session.write().login_form_mut().fields.email = evt.value();
                            },
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "login-password", "Password" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            value: "{form.fields.password}",
                            oninput: move |evt: FormEvent| {
                                session.write().login_form_mut().fields.password = evt.value();
                            },
                        }
                    }

                    if let Some(err) = form.error() {
                        div { class: "alert alert--error", "{err}" }
                    }

                    if let Some(notice) = form.notice() {
                        div { class: "alert alert--success", "{notice}" }
                    }

                    if form.offers_resend() {
                        button {
                            class: "link-button",
                            r#type: "button",
                            disabled: form.is_submitting(),
                            onclick: handle_resend,
                            "Resend verification email"
                        }
                    }

                    button {
                        class: "btn btn--block",
                        r#type: "submit",
                        disabled: form.is_submitting(),
                        if form.is_submitting() { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "auth-card__footer",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            if let Err(e) = session.write().show_register() {
                                tracing::debug!("cannot open registration: {}", e);
                            }
                        },
                        "Don't have an account? Sign up"
                    }
                }
            }
        }
    }
}
