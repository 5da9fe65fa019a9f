//! Detail page for a single submission: full report, its community
//! solutions, and the form for proposing a new solution.

use dioxus::prelude::*;
use store::{Submission, SubmissionStatus};
use ui::{icons::*, Alert, AlertKind, Icon, Loading, StatusBadge, TypeIcon};

use super::use_require_session;

#[component]
pub fn SubmissionDetail(submission_id: i64) -> Element {
    let session = use_require_session();
    let mut id = use_signal(|| submission_id);
    if *id.peek() != submission_id {
        id.set(submission_id);
    }

    let mut submission = use_signal(|| Option::<Submission>::None);
    let mut solutions = use_signal(Vec::<Submission>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let mut description = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource(move || {
        let id = id();
        async move {
            loading.set(true);
            match api::submission(id).await {
                Ok(sub) => submission.set(Some(sub)),
                Err(e) => {
                    tracing::error!("fetching submission {id}: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            match api::solutions_for(id).await {
                Ok(subs) => solutions.set(subs),
                Err(e) => tracing::error!("fetching solutions for {id}: {e}"),
            }
            loading.set(false);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            message.set(None);

            let Some(user) = session().user else {
                return;
            };
            let Some(parent) = submission() else {
                return;
            };
            if description().trim().is_empty() || image_url().trim().is_empty() {
                error.set(Some("Description and image URL are required".to_string()));
                return;
            }

            submitting.set(true);
            let payload = api::NewSubmission::solution_for(
                &parent,
                user.id,
                description().trim().to_string(),
                image_url().trim().to_string(),
            );
            match api::create_submission(payload).await {
                Ok(created) => {
                    message.set(Some("Solution submitted successfully!".to_string()));
                    solutions.with_mut(|subs| subs.push(created));
                    description.set(String::new());
                    image_url.set(String::new());
                }
                Err(e) => {
                    tracing::error!("creating solution: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    if loading() {
        return rsx! {
            Loading { label: "Loading submission..." }
        };
    }

    let Some(sub) = submission() else {
        return rsx! {
            div {
                class: "card",
                h2 { "Submission not found" }
                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }
            }
        };
    };
    let created = sub
        .created_at
        .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "detail-page",

            div {
                class: "card detail-card",
                div {
                    class: "detail-header",
                    TypeIcon { ty: sub.submission_type, size: 28 }
                    h2 { "{sub.submission_type.label()}" }
                    StatusBadge { status: sub.status }
                }

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
                    if !created.is_empty() {
                        span {
                            Icon { icon: FaClock, width: 14, height: 14 }
                            " {created}"
                        }
                    }
                }
            }

            div {
                class: "card solutions-card",
                h3 { "Community Solutions" }

                if let Some(msg) = message() {
                    Alert { kind: AlertKind::Success, message: msg }
                }
                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                if solutions().is_empty() {
                    p { class: "empty", "No solutions proposed yet. Be the first!" }
                } else {
                    for solution in solutions() {
                        div {
                            class: "solution",
                            key: "{solution.id}",
                            img {
                                class: "solution-image",
                                src: solution.image_url.clone(),
                                alt: "Solution photo",
                            }
                            div {
                                class: "solution-body",
                                p { "{solution.description}" }
                                StatusBadge { status: solution.status }
                            }
                        }
                    }
                }

                if sub.status != SubmissionStatus::Resolved {
                    form {
                        class: "solution-form",
                        onsubmit: handle_submit,
                        h4 { "Propose a Solution" }

                        label { r#for: "solution-description", "Description" }
                        textarea {
                            id: "solution-description",
                            rows: 3,
                            placeholder: "Describe your proposed solution",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }

                        label { r#for: "solution-image", "Image URL" }
                        input {
                            id: "solution-image",
                            r#type: "text",
                            placeholder: "https://example.com/solution.jpg",
                            value: image_url(),
                            oninput: move |evt| image_url.set(evt.value()),
                        }

                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Submit Solution" }
                        }
                    }
                }
            }
        }
    }
}
