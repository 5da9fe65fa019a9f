use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{
    Dashboard, Leaderboard, Login, Moderator, Register, SubmissionDetail, Submissions,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/submissions")]
        Submissions {},
        #[route("/submissions/:submission_id")]
        SubmissionDetail { submission_id: i64 },
        #[route("/moderator")]
        Moderator {},
        #[route("/leaderboard")]
        Leaderboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Shared chrome around every page.
#[component]
fn AppShell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        footer {
            class: "footer",
            p { "Circular Cities — community reporting for a sustainable Mumbai." }
            p { class: "footer-contact", "Mumbai, Maharashtra, India · info@circularcities.example" }
        }
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
