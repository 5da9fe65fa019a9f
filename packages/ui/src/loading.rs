use dioxus::prelude::*;

/// Spinner shown while a view's mount fetch is in flight.
#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "loading__spinner" }
            p { class: "loading__label", "{label}" }
        }
    }
}
