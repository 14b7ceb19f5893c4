//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use videovault_core::{SearchClient, SearchState};

/// Search page state — query, results, categories and status flags
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::new);

/// Backend client — taken from `INITIAL_CLIENT` on first render
pub static CLIENT: GlobalSignal<Option<SearchClient>> = Signal::global(|| None);

/// Message for the blocking notice dialog, if one is open
pub static NOTICE: GlobalSignal<Option<String>> = Signal::global(|| None);
