//! Search panel — search form + quick category chips.

mod category_chips;
mod search_form;

use category_chips::CategoryChips;
use dioxus::prelude::*;
use search_form::SearchForm;

#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchForm {}
            CategoryChips {}
        }
    }
}
