//! Registration page. Accounts created here are always ordinary users;
//! moderators are provisioned out of band.

use dioxus::prelude::*;
use ui::{sign_in, use_session, Alert, AlertKind};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.read().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if u.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(u, e, p).await {
                Ok(user) => {
                    sign_in(session, user);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("registration failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-intro",
                h1 { "Create Account" }
                p { "Join your neighbours in reporting waste, flooding and energy issues." }
            }
            div {
                class: "card auth-card",
                h2 { "Sign Up" }

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                form {
                    onsubmit: handle_register,
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "Pick a username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "you@example.org",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    label { r#for: "confirm-password", "Confirm password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        placeholder: "Repeat password",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
