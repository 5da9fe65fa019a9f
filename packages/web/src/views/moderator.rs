//! Moderation panel: review pending reports per category, approve or
//! reject them, and mark approved issues as resolved.

use dioxus::prelude::*;
use store::{Decision, Submission, SubmissionType};
use ui::{icons::*, Alert, AlertKind, Icon, Loading, StatusBadge, TypeIcon};

use super::use_require_session;
use crate::Route;

fn type_from_value(value: &str) -> SubmissionType {
    match value {
        "power" => SubmissionType::Power,
        "tree" => SubmissionType::Tree,
        _ => SubmissionType::Waste,
    }
}

#[component]
pub fn Moderator() -> Element {
    let session = use_require_session();
    let nav = use_navigator();

    use_effect(move || {
        let state = session.read();
        if state.user.is_some() && !state.is_moderator() {
            nav.replace(Route::Dashboard {});
        }
    });

    let mut selected_type = use_signal(|| SubmissionType::Waste);
    let mut pending = use_signal(Vec::<Submission>::new);
    let mut selected = use_signal(|| Option::<Submission>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut acting = use_signal(|| false);

    let mut loader = use_resource(move || {
        let ty = selected_type();
        async move {
            loading.set(true);
            match api::pending_submissions(ty).await {
                Ok(subs) => pending.set(subs),
                Err(e) => {
                    tracing::error!("fetching pending submissions: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let mut decide = move |submission_id: i64, decision: Decision| {
        spawn(async move {
            error.set(None);
            message.set(None);
            let Some(user) = session().user else {
                return;
            };
            acting.set(true);
            match api::decide(user.id, submission_id, decision).await {
                Ok(()) => {
                    let verb = match decision {
                        Decision::Approved => "approved",
                        Decision::Rejected => "rejected",
                    };
                    message.set(Some(format!("Submission {verb}.")));
                    if selected.peek().as_ref().map(|s| s.id) == Some(submission_id) {
                        selected.set(None);
                    }
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("deciding submission {submission_id}: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            acting.set(false);
        });
    };

    let mut resolve = move |submission_id: i64| {
        spawn(async move {
            error.set(None);
            message.set(None);
            let Some(user) = session().user else {
                return;
            };
            acting.set(true);
            match api::resolve(submission_id, user.id).await {
                Ok(()) => {
                    message.set(Some("Submission marked as resolved.".to_string()));
                    if selected.peek().as_ref().map(|s| s.id) == Some(submission_id) {
                        selected.set(None);
                    }
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("resolving submission {submission_id}: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            acting.set(false);
        });
    };

    rsx! {
        div {
            class: "moderator-page",

            div {
                class: "card",
                div {
                    class: "moderator-header",
                    Icon { icon: FaShieldHalved, width: 24, height: 24 }
                    h2 { "Moderator Panel" }
                }
                p { class: "card-subtitle", "Review pending community reports" }

                if let Some(msg) = message() {
                    Alert { kind: AlertKind::Success, message: msg }
                }
                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                label { r#for: "moderation-type", "Category" }
                select {
                    id: "moderation-type",
                    value: selected_type().as_str(),
                    onchange: move |evt| {
                        selected.set(None);
                        selected_type.set(type_from_value(&evt.value()));
                    },
                    for ty in SubmissionType::ALL {
                        option { value: ty.as_str(), "{ty.label()}" }
                    }
                }

                if loading() {
                    Loading { label: "Loading pending submissions..." }
                } else if pending().is_empty() {
                    p { class: "empty", "No pending submissions in this category." }
                } else {
                    ul {
                        class: "pending-list",
                        for sub in pending() {
                            li {
                                key: "{sub.id}",
                                class: if selected().as_ref().map(|s| s.id) == Some(sub.id) {
                                    "pending-item pending-item--active"
                                } else {
                                    "pending-item"
                                },
                                onclick: {
                                    let sub = sub.clone();
                                    move |_| selected.set(Some(sub.clone()))
                                },
                                TypeIcon { ty: sub.submission_type, size: 16 }
                                span { class: "pending-item__location", "{sub.location}" }
                                StatusBadge { status: sub.status }
                            }
                        }
                    }
                }
            }

            if let Some(sub) = selected() {
                div {
                    class: "card review-card",
                    h3 { "Review Submission" }

                    img {
                        class: "detail-image",
                        src: sub.image_url.clone(),
                        alt: "Submission photo",
                    }
                    p { class: "detail-description", "{sub.description}" }
                    div {
                        class: "detail-meta",
                        span {
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            " {sub.location}"
                        }
                        span { "Coordinates: {sub.latitude}, {sub.longitude}" }
                    }

                    if let Some(analysis) = sub.genai_analysis.as_ref().and_then(|a| a.result.clone()) {
                        div {
                            class: "analysis-box",
                            h4 { "AI Analysis" }
                            p { "{analysis}" }
                        }
                    }

                    div {
                        class: "review-actions",
                        button {
                            class: "primary",
                            disabled: acting() || !sub.status.can_decide(),
                            onclick: move |_| decide(sub.id, Decision::Approved),
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                            " Approve"
                        }
                        button {
                            class: "danger",
                            disabled: acting() || !sub.status.can_decide(),
                            onclick: move |_| decide(sub.id, Decision::Rejected),
                            Icon { icon: FaCircleXmark, width: 14, height: 14 }
                            " Reject"
                        }
                        button {
                            class: "secondary",
                            disabled: acting() || !sub.status.can_resolve(),
                            onclick: move |_| resolve(sub.id),
                            " Mark Resolved"
                        }
                    }
                }
            }
        }
    }
}
