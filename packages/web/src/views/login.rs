//! Login page with the email/password form.

use dioxus::prelude::*;

use ui::components::{Alert, AlertKind, Button, Card, Input};
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    let state = session.state();
    if !state.loading && state.user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session.login(email().trim(), &password()).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.detail_or("Invalid email or password")));
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
                p { class: "auth-screen__subtitle", "Sign in to track your games" }

                Card {
                    h2 { class: "auth-screen__heading", "Login" }

                    if let Some(message) = error() {
                        Alert {
                            kind: AlertKind::Error,
                            message,
                            on_close: move |_| error.set(None),
                        }
                    }

                    form {
                        onsubmit: handle_login,
                        class: "auth-screen__form",

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
                            placeholder: "••••••••",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }

                        Button {
                            r#type: "submit",
                            class: "auth-screen__submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    p {
                        class: "auth-screen__switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Sign up" }
                    }
                }
            }
        }
    }
}
