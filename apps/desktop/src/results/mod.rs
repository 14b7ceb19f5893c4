//! Results section — status regions and the result grid.

mod result_card;

use dioxus::prelude::*;
use videovault_core::ViewStatus;

use crate::state::*;
use result_card::ResultCard;

#[component]
pub fn ResultsSection() -> Element {
    let search = SEARCH.read();
    let base_url = CLIENT
        .read()
        .as_ref()
        .map(|c| c.config().base_url().to_string())
        .unwrap_or_default();

    let body = match search.status() {
        ViewStatus::Loading => rsx! {
            div {
                class: "status status-loading",
                span { class: "spinner spinner-lg" }
                p { "Searching the vault..." }
            }
        },
        ViewStatus::Failed(message) => rsx! {
            div {
                class: "status status-error",
                p { class: "status-error-message", "{message}" }
                p { class: "status-error-hint", "Make sure the backend is reachable at {base_url}" }
            }
        },
        ViewStatus::Prompt => rsx! {
            div {
                class: "status status-prompt",
                p { "Enter a category above to start exploring videos" }
            }
        },
        ViewStatus::Empty => rsx! {
            div {
                class: "status status-empty",
                p { "No videos found. Try a different category!" }
            }
        },
        ViewStatus::Results(videos) => {
            let total = search.total_results;
            rsx! {
                div {
                    class: "results-header",
                    h3 {
                        "Results for \""
                        span { class: "results-query", "{search.query}" }
                        "\""
                    }
                    span { class: "results-count", "{total} videos found" }
                }
                div {
                    class: "results-grid",
                    for video in videos.iter() {
                        ResultCard { key: "{video.id}", video: video.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "results-section",
            {body}
        }
    }
}
