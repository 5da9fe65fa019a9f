//! Community submissions: the tabbed feed of approved, parent-less issue
//! reports plus the creation form for new ones.

use dioxus::prelude::*;
use store::{feed, Submission, SubmissionType};
use ui::{Alert, AlertKind, Loading, SubmissionCard};

use super::use_require_session;
use crate::Route;

// Default map position: Mumbai
const DEFAULT_LAT: &str = "19.076";
const DEFAULT_LON: &str = "72.8777";

fn type_from_value(value: &str) -> SubmissionType {
    match value {
        "power" => SubmissionType::Power,
        "tree" => SubmissionType::Tree,
        _ => SubmissionType::Waste,
    }
}

#[component]
pub fn Submissions() -> Element {
    let session = use_require_session();
    let nav = use_navigator();
    let mut submissions = use_signal(Vec::<Submission>::new);
    let mut tab = use_signal(|| Option::<SubmissionType>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // Form state
    let mut form_type = use_signal(|| SubmissionType::Waste);
    let mut location = use_signal(String::new);
    let mut latitude = use_signal(|| DEFAULT_LAT.to_string());
    let mut longitude = use_signal(|| DEFAULT_LON.to_string());
    let mut description = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut submitting = use_signal(|| false);

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

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            message.set(None);

            let Some(user) = session().user else {
                return;
            };
            let (Ok(lat), Ok(lon)) = (latitude().trim().parse::<f64>(), longitude().trim().parse::<f64>())
            else {
                error.set(Some("Latitude and longitude must be numbers".to_string()));
                return;
            };
            if location().trim().is_empty() || description().trim().is_empty() || image_url().trim().is_empty() {
                error.set(Some("Location, description and image URL are required".to_string()));
                return;
            }

            submitting.set(true);
            let payload = api::NewSubmission::issue(
                user.id,
                form_type(),
                location().trim().to_string(),
                lat,
                lon,
                description().trim().to_string(),
                image_url().trim().to_string(),
            );
            match api::create_submission(payload).await {
                Ok(created) => {
                    message.set(Some("Submission created successfully!".to_string()));
                    submissions.with_mut(|subs| subs.push(created));
                    // Reset the form; the user identifier is re-read from the
                    // session on the next submit.
                    form_type.set(SubmissionType::Waste);
                    location.set(String::new());
                    latitude.set(DEFAULT_LAT.to_string());
                    longitude.set(DEFAULT_LON.to_string());
                    description.set(String::new());
                    image_url.set(String::new());
                }
                Err(e) => {
                    tracing::error!("creating submission: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    if loading() {
        return rsx! {
            Loading { label: "Loading submissions..." }
        };
    }

    let subs = submissions();
    let visible = match tab() {
        None => subs.clone(),
        Some(ty) => feed::of_type(&subs, ty),
    };
    let empty_text = match tab() {
        None => "No approved submissions found.".to_string(),
        Some(ty) => format!("No {} submissions found.", ty.label().to_lowercase()),
    };

    rsx! {
        div {
            class: "submissions-page",

            div {
                class: "card feed-card",
                h2 { "Community Submissions" }
                p { class: "card-subtitle", "Browse issues reported by Mumbai citizens" }

                if let Some(msg) = message() {
                    Alert { kind: AlertKind::Success, message: msg }
                }
                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                div {
                    class: "tabs",
                    button {
                        class: if tab().is_none() { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(None),
                        "All"
                    }
                    for ty in SubmissionType::ALL {
                        button {
                            class: if tab() == Some(ty) { "tab tab--active" } else { "tab" },
                            onclick: move |_| tab.set(Some(ty)),
                            "{ty.label()}"
                        }
                    }
                }

                if visible.is_empty() {
                    p { class: "empty", "{empty_text}" }
                } else {
                    for sub in visible {
                        SubmissionCard {
                            submission: sub,
                            on_select: move |id| {
                                nav.push(Route::SubmissionDetail { submission_id: id });
                            },
                        }
                    }
                }
            }

            div {
                class: "card form-card",
                h2 { "Report New Issue" }
                p { class: "card-subtitle", "Help improve Mumbai by reporting sustainability issues" }

                form {
                    onsubmit: handle_submit,

                    label { r#for: "submission-type", "Issue Type" }
                    select {
                        id: "submission-type",
                        value: form_type().as_str(),
                        onchange: move |evt| form_type.set(type_from_value(&evt.value())),
                        for ty in SubmissionType::ALL {
                            option { value: ty.as_str(), "{ty.label()}" }
                        }
                    }

                    label { r#for: "location", "Location" }
                    input {
                        id: "location",
                        r#type: "text",
                        placeholder: "Enter location (e.g., Bandra, Mumbai)",
                        value: location(),
                        oninput: move |evt| location.set(evt.value()),
                    }

                    div {
                        class: "form-row",
                        div {
                            label { r#for: "latitude", "Latitude" }
                            input {
                                id: "latitude",
                                r#type: "number",
                                step: "0.000001",
                                value: latitude(),
                                oninput: move |evt| latitude.set(evt.value()),
                            }
                        }
                        div {
                            label { r#for: "longitude", "Longitude" }
                            input {
                                id: "longitude",
                                r#type: "number",
                                step: "0.000001",
                                value: longitude(),
                                oninput: move |evt| longitude.set(evt.value()),
                            }
                        }
                    }

                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 4,
                        placeholder: "Describe the issue in detail",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }

                    label { r#for: "image-url", "Image URL" }
                    input {
                        id: "image-url",
                        r#type: "text",
                        placeholder: "https://example.com/image.jpg",
                        value: image_url(),
                        oninput: move |evt| image_url.set(evt.value()),
                    }
                    p { class: "field-hint", "Provide a URL to an image that shows the issue" }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Submit Report" }
                    }
                }
            }
        }
    }
}
