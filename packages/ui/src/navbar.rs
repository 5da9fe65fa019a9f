//! App header: brand, navigation links, session controls. The moderator
//! entry appears purely based on the session record's role.

use dioxus::prelude::*;

use crate::session::use_session;
use crate::LogoutButton;

#[component]
pub fn Navbar() -> Element {
    let session = use_session();

    rsx! {
        header {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                span { class: "navbar-logo", "CC" }
                span { class: "navbar-title", "Circular Cities" }
            }
            nav {
                class: "navbar-links",
                Link { to: "/dashboard", "Dashboard" }
                Link { to: "/submissions", "Submissions" }
                Link { to: "/leaderboard", "Leaderboard" }
                if session().is_moderator() {
                    Link { to: "/moderator", "Moderator" }
                }
            }
            div {
                class: "navbar-session",
                if let Some(user) = session().user {
                    span { class: "navbar-user", "{user.username}" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { class: "navbar-login", to: "/login", "Login" }
                }
            }
        }
    }
}
