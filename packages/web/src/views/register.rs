//! Registration page. A successful registration auto-logs-in with the same
//! credentials.

use dioxus::prelude::*;

use ui::components::{Alert, AlertKind, Button, Card, Input};
use ui::use_session;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let state = session.state();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let name = full_name().trim().to_string();
            let mail = email().trim().to_string();
            let pass = password();

            if name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if mail.is_empty() || !mail.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if pass.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if pass != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match session.register(&mail, &pass, &name).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.detail_or("Registration failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-screen__panel",
                h1 { class: "auth-screen__title", "College Football Tracker" }
                p { class: "auth-screen__subtitle", "Create an account to get started" }

                Card {
                    h2 { class: "auth-screen__heading", "Sign up" }

                    if let Some(message) = error() {
                        Alert {
                            kind: AlertKind::Error,
                            message,
                            on_close: move |_| error.set(None),
                        }
                    }

                    form {
                        onsubmit: handle_register,
                        class: "auth-screen__form",

                        Input {
                            label: "Full name",
                            placeholder: "Your name",
                            value: full_name(),
                            required: true,
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
                        }

                        Input {
                            label: "Email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }

                        Input {
                            label: "Password",
                            r#type: "password",
                            placeholder: "Min 8 characters",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }

                        Input {
                            label: "Confirm password",
                            r#type: "password",
                            placeholder: "Repeat your password",
                            value: confirm_password(),
                            required: true,
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }

                        Button {
                            r#type: "submit",
                            class: "auth-screen__submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Sign up" }
                        }
                    }

                    p {
                        class: "auth-screen__switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
