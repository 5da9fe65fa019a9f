//! Login page: credential form posting to the backend.

use dioxus::prelude::*;
use ui::{sign_in, use_session, Alert, AlertKind};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
    if session.read().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::login(u, p).await {
                Ok(user) => {
                    sign_in(session, user);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
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
                h1 { "Welcome Back" }
                p { "Sign in to continue your journey in making Mumbai more sustainable." }
            }
            div {
                class: "card auth-card",
                h2 { "Login" }
                p { class: "card-subtitle", "Enter your credentials to access your account" }

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                form {
                    onsubmit: handle_login,
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "Enter your username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
