//! A single video in the result grid.

use dioxus::prelude::*;
use videovault_core::types::placeholder_thumbnail;
use videovault_core::VideoResult;

use crate::actions::open_result;

/// Thumbnail, title, channel and publish date. Clicking opens the video, or
/// shows a notice for demo results. A broken thumbnail is swapped for a
/// placeholder keyed by the video id.
#[component]
pub fn ResultCard(video: VideoResult) -> Element {
    let mut thumbnail = use_signal(|| video.thumbnail.clone());
    let fallback = placeholder_thumbnail(&video.id);
    let summary = video.description.clone().unwrap_or_default();
    let video_for_click = video.clone();

    rsx! {
        article {
            class: "result-card",
            title: "{summary}",
            onclick: move |_| open_result(&video_for_click),

            div {
                class: "result-thumb",
                img {
                    src: "{thumbnail}",
                    alt: "{video.title}",
                    onerror: move |_| {
                        if *thumbnail.peek() != fallback {
                            thumbnail.set(fallback.clone());
                        }
                    },
                }
                if let Some(duration) = video.duration.as_deref() {
                    span { class: "result-duration", "{duration}" }
                }
            }

            div {
                class: "result-body",
                h4 { class: "result-title", "{video.title}" }
                p { class: "result-channel", "{video.channel}" }
                div {
                    class: "result-meta",
                    span { class: "result-date", "{video.published_at}" }
                    if let Some(views) = video.view_count.as_deref() {
                        span { class: "meta-dot", "\u{2022}" }
                        span { class: "result-views", "{views} views" }
                    }
                }
            }
        }
    }
}
