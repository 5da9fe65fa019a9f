//! Session context and hooks for the UI.
//!
//! The session is read from the persisted store once when the provider
//! mounts and only changes through [`sign_in`] / [`sign_out`]. It is the
//! only state shared across views.

use dioxus::prelude::*;
use store::{session_store, SessionStore, User};

use crate::icons::FaRightFromBracket;
use crate::Icon;

/// The current session: the persisted user record, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    /// Whether the moderation UI should be reachable. The role field of
    /// the persisted record is the only gate.
    pub fn is_moderator(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_moderator())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component to enable the session hooks.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState {
        user: session_store().load(),
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly returned user record and publish it to the app.
pub fn sign_in(mut session: Signal<SessionState>, user: User) {
    session_store().save(&user);
    session.set(SessionState { user: Some(user) });
}

/// Clear the persisted record and publish the logged-out state.
pub fn sign_out(mut session: Signal<SessionState>) {
    session_store().clear();
    session.set(SessionState::default());
}

/// Button that logs the current user out and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let nav = use_navigator();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                sign_out(session);
                nav.push("/login");
            },
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
