//! Category search form. Submitting searches the current text; the button is
//! disabled while a search is in flight.

use dioxus::prelude::*;

use crate::actions::run_search;
use crate::state::*;

#[component]
pub fn SearchForm() -> Element {
    let search = SEARCH.read();
    let query = search.query.clone();
    let loading = !search.can_submit();

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let pending = SEARCH.write().submit();
                run_search(pending);
            },

            div {
                class: "search-field",

                svg {
                    class: "search-icon",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Enter a category (e.g., Technology, Music, Cooking...)",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        SEARCH.write().set_query(e.value());
                    },
                }

                button {
                    class: "search-submit",
                    r#type: "submit",
                    disabled: loading,
                    if loading {
                        span { class: "spinner" }
                    }
                    "Search"
                }
            }
        }
    }
}
