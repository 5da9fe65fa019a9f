use dioxus::prelude::*;
use ui::{use_session, SessionState};

mod dashboard;
mod leaderboard;
mod login;
mod moderator;
mod register;
mod submission_detail;
mod submissions;

pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
pub use login::Login;
pub use moderator::Moderator;
pub use register::Register;
pub use submission_detail::SubmissionDetail;
pub use submissions::Submissions;

/// Session guard for protected views: when no session record exists, the
/// user is sent to the login page.
pub(crate) fn use_require_session() -> Signal<SessionState> {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        if session.read().user.is_none() {
            nav.replace("/login");
        }
    });
    session
}
