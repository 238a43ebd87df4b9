//! Registration page view with the account form.

use api::AuthApi;
use dioxus::prelude::*;

use crate::auth::{use_auth_api, use_session};
use crate::icons::FaShieldHalved;
use crate::Icon;

/// Register page component. A successful registration stays here and asks
/// the user to verify their email.
#[component]
pub fn RegisterView() -> Element {
    let mut session = use_session();
    let api = use_auth_api();
    let form = session.read().register_form().clone();
    let phone = form.fields.phone_number.clone().unwrap_or_default();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let begun = session.write().begin_register();
            let request = match begun {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!("registration not submitted: {}", e);
                    return;
                }
            };
            let outcome = api.register(&request).await;
            if let Err(e) = session.write().complete_register(outcome) {
                tracing::debug!("registration not completed: {}", e);
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
                    h1 { "Create Account" }
                    p { "Join Live Location Tracker" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    div {
                        class: "auth-form__row",
                        div {
                            class: "field",
                            label { r#for: "register-first-name", "First Name" }
                            input {
                                id: "register-first-name",
                                r#type: "text",
                                required: true,
                                value: "{form.fields.first_name}",
                                oninput: move |evt: FormEvent| {
                                    session.write().register_form_mut().fields.first_name = evt.value();
                                },
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "register-last-name", "Last Name" }
                            input {
                                id: "register-last-name",
                                r#type: "text",
                                required: true,
                                value: "{form.fields.last_name}",
                                oninput: move |evt: FormEvent| {
                                    session.write().register_form_mut().fields.last_name = evt.value();
                                },
                            }
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "register-email", "Email" }
                        input {
                            id: "register-email",
                            r#type: "email",
                            required: true,
                            value: "{form.fields.email}",
                            oninput: move |evt: FormEvent| {
                                session.write().register_form_mut().fields.email = evt.value();
                            },
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "register-phone", "Phone Number" }
                        input {
                            id: "register-phone",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |evt: FormEvent| {
                                session.write().register_form_mut().fields.phone_number = Some(evt.value());
                            },
                        }
                    }

                    div {
                        class: "field",
                        label { r#for: "register-password", "Password" }
                        input {
                            id: "register-password",
                            r#type: "password",
                            required: true,
                            value: "{form.fields.password}",
                            oninput: move |evt: FormEvent| {
                                session.write().register_form_mut().fields.password = evt.value();
                            },
                        }
                    }

                    if let Some(err) = form.error() {
                        div { class: "alert alert--error", "{err}" }
                    }

                    if let Some(notice) = form.notice() {
                        div { class: "alert alert--success", "{notice}" }
                    }

                    button {
                        class: "btn btn--block",
                        r#type: "submit",
                        disabled: form.is_submitting(),
                        if form.is_submitting() { "Creating Account..." } else { "Create Account" }
                    }
                }

                div {
                    class: "auth-card__footer",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            if let Err(e) = session.write().show_login() {
                                tracing::debug!("cannot open sign-in: {}", e);
                            }
                        },
                        "Already have an account? Sign in"
                    }
                }
            }
        }
    }
}
