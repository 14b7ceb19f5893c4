//! Quick-access category chips.

use dioxus::prelude::*;

use crate::actions::run_search;
use crate::state::*;

#[component]
pub fn CategoryChips() -> Element {
    let chips: Vec<String> = SEARCH.read().visible_categories().to_vec();

    rsx! {
        div {
            class: "category-chips",
            for label in chips {
                button {
                    key: "{label}",
                    class: "chip",
                    r#type: "button",
                    onclick: {
                        let label = label.clone();
                        move |_| {
                            let pending = SEARCH.write().select_category(&label);
                            run_search(pending);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
