//! Presentational pieces for submission lists: the per-type icon, the
//! status badge, and the card row used by the feed, dashboard and
//! moderation views.

use dioxus::prelude::*;
use store::{Submission, SubmissionStatus, SubmissionType};

use crate::icons::{FaBolt, FaClock, FaDroplet, FaLocationDot, FaTrash};
use crate::Icon;

/// Category icon, colored per type.
#[component]
pub fn TypeIcon(ty: SubmissionType, #[props(default = 20)] size: u32) -> Element {
    match ty {
        SubmissionType::Waste => rsx! {
            span { class: "type-icon type-icon--waste",
                Icon { icon: FaTrash, width: size, height: size }
            }
        },
        SubmissionType::Power => rsx! {
            span { class: "type-icon type-icon--power",
                Icon { icon: FaDroplet, width: size, height: size }
            }
        },
        SubmissionType::Tree => rsx! {
            span { class: "type-icon type-icon--tree",
                Icon { icon: FaBolt, width: size, height: size }
            }
        },
    }
}

/// Status badge with the wire value uppercased, as the views display it.
#[component]
pub fn StatusBadge(status: SubmissionStatus) -> Element {
    let text = status.as_str().to_uppercase();
    rsx! {
        span { class: "badge badge--{status.as_str()}", "{text}" }
    }
}

fn short_date(sub: &Submission) -> String {
    sub.created_at
        .map(|t| t.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// One row in a submission list. Clicking it hands the submission id back
/// to the view, which decides where to navigate.
#[component]
pub fn SubmissionCard(submission: Submission, on_select: EventHandler<i64>) -> Element {
    let id = submission.id;
    let date = short_date(&submission);

    rsx! {
        div {
            class: "submission-card",
            onclick: move |_| on_select.call(id),
            TypeIcon { ty: submission.submission_type }
            div {
                class: "submission-card__body",
                div {
                    class: "submission-card__meta",
                    span { class: "submission-card__type", "{submission.submission_type.as_str().to_uppercase()}" }
                    span {
                        class: "submission-card__date",
                        Icon { icon: FaClock, width: 12, height: 12 }
                        "{date}"
                    }
                }
                h4 { class: "submission-card__description", "{submission.description}" }
                div {
                    class: "submission-card__location",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    "{submission.location}"
                }
            }
        }
    }
}
