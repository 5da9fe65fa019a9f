//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{sign_in, sign_out, use_session, LogoutButton, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod submission_card;
pub use submission_card::{StatusBadge, SubmissionCard, TypeIcon};

mod alert;
pub use alert::{Alert, AlertKind};

mod loading;
pub use loading::Loading;
