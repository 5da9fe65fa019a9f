//! Dashboard: welcome card, per-type counts over the approved feed, the
//! five most recent reports, and the user's contribution level.

use dioxus::prelude::*;
use store::feed::{self, RECENT_LIMIT};
use store::{Submission, SubmissionType};
use ui::icons::FaAward;
use ui::{Alert, AlertKind, Icon, Loading, SubmissionCard, TypeIcon};

use super::use_require_session;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_require_session();
    let nav = use_navigator();
    let mut submissions = use_signal(Vec::<Submission>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // Full re-fetch of the approved feed on every mount
    let _loader = use_resource(move || async move {
        match api::approved_submissions().await {
            Ok(subs) => submissions.set(feed::originals(&subs)),
            Err(e) => {
                tracing::error!("fetching approved submissions: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let Some(user) = session().user else {
        return rsx! {};
    };

    if loading() {
        return rsx! {
            Loading { label: "Loading dashboard..." }
        };
    }

    let subs = submissions();
    let recent = feed::recent(&subs, RECENT_LIMIT);
    let level = feed::contribution_level(user.points);
    let progress = user.points.clamp(0, 100);

    rsx! {
        div {
            class: "dashboard",

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, message: err }
            }

            div {
                class: "card welcome-card",
                div {
                    h1 { "Welcome, {user.username}" }
                    p { class: "card-subtitle", "Thank you for contributing to a more sustainable Mumbai." }
                }
                div {
                    class: "welcome-card__points",
                    Icon { icon: FaAward, width: 28, height: 28 }
                    div {
                        p { class: "points-label", "Your Points" }
                        p { class: "points-value", "{user.points}" }
                    }
                }
                Link { class: "button primary", to: Route::Submissions {}, "Report New Issue" }
            }

            div {
                class: "stat-grid",
                for ty in SubmissionType::ALL {
                    div {
                        class: "card stat-card",
                        TypeIcon { ty: ty }
                        span { class: "stat-card__count", "{feed::of_type(&subs, ty).len()}" }
                        span { class: "stat-card__label", "{ty.label()}" }
                    }
                }
            }

            div {
                class: "dashboard-columns",
                div {
                    class: "card",
                    h2 { "Recent Submissions" }
                    p { class: "card-subtitle", "Latest approved issues reported by the community" }
                    if recent.is_empty() {
                        p { class: "empty", "No approved submissions found." }
                    } else {
                        for sub in recent {
                            SubmissionCard {
                                submission: sub,
                                on_select: move |id| {
                                    nav.push(Route::SubmissionDetail { submission_id: id });
                                },
                            }
                        }
                    }
                    Link { class: "button secondary", to: Route::Submissions {}, "View All Submissions" }
                }

                div {
                    class: "card",
                    h2 { "Your Activity" }
                    div {
                        class: "activity-level",
                        span { "Contribution Level" }
                        span { class: "badge badge--level", "{level}" }
                    }
                    div {
                        class: "progress",
                        div { class: "progress__fill", style: "width: {progress}%;" }
                    }
                    div {
                        class: "progress__scale",
                        span { "0 points" }
                        span { "100 points" }
                    }
                    div {
                        class: "quick-actions",
                        Link { class: "button secondary", to: Route::Submissions {}, "New Report" }
                        Link { class: "button secondary", to: Route::Leaderboard {}, "Leaderboard" }
                    }
                }
            }
        }
    }
}
