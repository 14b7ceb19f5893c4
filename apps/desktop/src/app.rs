//! Root application component — header, hero search, results and footer.

use dioxus::prelude::*;

use crate::actions::{install_client, load_categories};
use crate::results::ResultsSection;
use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Runs once per mount: exactly one category request, never retried.
    use_hook(|| {
        install_client();
        load_categories();
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                div { class: "app-logo", "\u{1F3AC}" }
                h1 { class: "app-title", "Video Vault" }
            }

            section {
                class: "hero",
                span { class: "hero-kicker", "Discover Amazing Content" }
                h2 {
                    class: "hero-title",
                    "Find Videos That "
                    span { class: "hero-accent", "Inspire You" }
                }
                p { class: "hero-subtitle", "Enter a category and unlock a world of curated video content" }
                SearchPanel {}
            }

            ResultsSection {}

            footer {
                class: "app-footer",
                span { "Video Vault" }
            }

            NoticeDialog {}
        }
    }
}

/// Modal notice that blocks the page until dismissed.
#[component]
fn NoticeDialog() -> Element {
    let notice = NOTICE.read();
    let Some(message) = notice.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice-backdrop",
            div {
                class: "notice-dialog",
                role: "alertdialog",
                p { class: "notice-message", "{message}" }
                button {
                    class: "notice-ok",
                    autofocus: true,
                    onclick: move |_| { *NOTICE.write() = None; },
                    "OK"
                }
            }
        }
    }
}
