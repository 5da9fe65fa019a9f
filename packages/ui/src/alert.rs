//! Inline message banners for request outcomes.

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Inline banner above a view's content. Errors carry the server's own
/// message; nothing here retries or escalates.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    match kind {
        AlertKind::Success => rsx! {
            div { class: "alert alert--success",
                Icon { icon: FaCircleCheck, width: 14, height: 14 }
                span { "{message}" }
            }
        },
        AlertKind::Error => rsx! {
            div { class: "alert alert--error",
                Icon { icon: FaCircleXmark, width: 14, height: 14 }
                span { "{message}" }
            }
        },
    }
}
