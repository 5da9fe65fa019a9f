//! Points leaderboard with podium cards, range tabs, and the signed-in
//! user's own rank.

use dioxus::prelude::*;
use store::{feed, feed::LeaderboardRange, User};
use ui::{icons::*, Alert, AlertKind, Icon, Loading};

use super::use_require_session;

#[component]
pub fn Leaderboard() -> Element {
    let session = use_require_session();
    let mut users = use_signal(Vec::<User>::new);
    let mut range = use_signal(|| LeaderboardRange::AllTime);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        match api::leaderboard().await {
            Ok(list) => users.set(list),
            Err(e) => {
                tracing::error!("fetching leaderboard: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    if loading() {
        return rsx! {
            Loading { label: "Loading leaderboard..." }
        };
    }

    let list = users();
    let me = session().user;
    let my_rank = me.as_ref().map(|u| feed::rank_of(&list, u.id)).unwrap_or(0);

    rsx! {
        div {
            class: "leaderboard-page",

            div {
                class: "card",
                div {
                    class: "leaderboard-header",
                    Icon { icon: FaTrophy, width: 24, height: 24 }
                    h2 { "Community Leaderboard" }
                }
                p { class: "card-subtitle", "Top contributors to a cleaner Mumbai" }

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                div {
                    class: "tabs",
                    for r in LeaderboardRange::ALL {
                        button {
                            class: if range() == r { "tab tab--active" } else { "tab" },
                            onclick: move |_| range.set(r),
                            "{r.label()}"
                        }
                    }
                }

                if list.is_empty() {
                    p { class: "empty", "No contributors yet." }
                } else {
                    div {
                        class: "podium",
                        for (i, u) in list.iter().take(3).enumerate() {
                            div {
                                key: "{u.id}",
                                class: "podium-card podium-card--{i + 1}",
                                Icon { icon: FaTrophy, width: 20, height: 20 }
                                span { class: "podium-card__rank", "#{i + 1}" }
                                span { class: "podium-card__name", "{u.username}" }
                                span {
                                    class: "podium-card__points",
                                    "{feed::scaled_points(u.points, range())} pts"
                                }
                            }
                        }
                    }

                    table {
                        class: "leaderboard-table",
                        thead {
                            tr {
                                th { "Rank" }
                                th { "Contributor" }
                                th { "Points" }
                                th { "Level" }
                            }
                        }
                        tbody {
                            for (i, u) in list.iter().enumerate() {
                                tr {
                                    key: "{u.id}",
                                    class: if me.as_ref().map(|m| m.id) == Some(u.id) { "row--me" } else { "" },
                                    td { "{i + 1}" }
                                    td {
                                        Icon { icon: FaUser, width: 12, height: 12 }
                                        " {u.username}"
                                        if me.as_ref().map(|m| m.id) == Some(u.id) {
                                            span { class: "badge badge--me", "You" }
                                        }
                                    }
                                    td { "{feed::scaled_points(u.points, range())}" }
                                    td { "{feed::contribution_level(u.points)}" }
                                }
                            }
                        }
                    }
                }
            }

            if let (Some(user), true) = (me.as_ref(), my_rank > 0) {
                div {
                    class: "card rank-card",
                    h3 { "Your Standing" }
                    p {
                        "Ranked #{my_rank} with "
                        strong { "{feed::scaled_points(user.points, range())} points" }
                        " ({feed::contribution_level(user.points)})"
                    }
                }
            }
        }
    }
}
