//! View state for the search page and the transitions user events and
//! network completions apply to it.
//!
//! Everything here is synchronous. An async search is split into
//! [`SearchState::begin_search`] (before the request) and
//! [`SearchState::finish_search`] (after it), so the UI can release its
//! state borrow across the await.

use tracing::debug;

use crate::types::{
    CategoryLoad, SearchOutcome, VideoResult, MAX_VISIBLE_CATEGORIES, SEARCH_ERROR_MESSAGE,
};

/// Identifies one issued search. Returned by [`SearchState::begin_search`] and
/// handed back to [`SearchState::finish_search`].
pub type RequestId = u64;

/// A search that has been started and is waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub id: RequestId,
    /// Trimmed query to send.
    pub query: String,
}

/// Which status region the page shows below the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus<'a> {
    /// Nothing searched yet.
    Prompt,
    Loading,
    Failed(&'a str),
    /// Searched, no error, no videos.
    Empty,
    Results(&'a [VideoResult]),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<VideoResult>,
    pub total_results: u64,
    pub loading: bool,
    pub error: Option<String>,
    /// Latches true on the first submitted search.
    pub has_searched: bool,
    pub categories: Vec<String>,
    /// Last request id handed out.
    issued: RequestId,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Form submission with the current query text.
    pub fn submit(&mut self) -> Option<PendingSearch> {
        let query = self.query.clone();
        self.begin_search(&query)
    }

    /// Chip click: the label becomes the query and is searched immediately.
    pub fn select_category(&mut self, label: &str) -> Option<PendingSearch> {
        self.query = label.to_string();
        self.begin_search(label)
    }

    /// Mark a search as started. Returns `None` (leaving state untouched) when
    /// the query is empty after trimming.
    pub fn begin_search(&mut self, raw: &str) -> Option<PendingSearch> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.has_searched = true;
        self.issued += 1;
        debug!(id = self.issued, query, "Search started");
        Some(PendingSearch {
            id: self.issued,
            query: query.to_string(),
        })
    }

    /// Apply a settled search. The last response to arrive wins, even if it
    /// belongs to an older request.
    pub fn finish_search(&mut self, id: RequestId, outcome: SearchOutcome) {
        if id != self.issued {
            debug!(id, latest = self.issued, "Applying response from a superseded search");
        }
        match outcome {
            SearchOutcome::Found {
                videos,
                total_results,
            } => {
                self.results = videos;
                self.total_results = total_results;
            }
            SearchOutcome::Failed(_) => {
                self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
                self.results.clear();
            }
        }
        self.loading = false;
    }

    pub fn apply_categories(&mut self, load: CategoryLoad) {
        self.categories = load.into_categories();
    }

    /// Chips to render: the first [`MAX_VISIBLE_CATEGORIES`] in source order.
    pub fn visible_categories(&self) -> &[String] {
        let n = self.categories.len().min(MAX_VISIBLE_CATEGORIES);
        &self.categories[..n]
    }

    /// The submit button is disabled while a search is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn status(&self) -> ViewStatus<'_> {
        if self.loading {
            return ViewStatus::Loading;
        }
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return ViewStatus::Failed(error);
        }
        if !self.has_searched {
            return ViewStatus::Prompt;
        }
        if self.results.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Results(&self.results)
        }
    }
}
