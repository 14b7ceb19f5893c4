//! Side effects triggered from the view: network calls and card clicks.

use dioxus::prelude::*;
use tracing::{debug, warn};
use videovault_core::error::SearchError;
use videovault_core::state::PendingSearch;
use videovault_core::types::{card_action, CardAction, SearchOutcome, DEMO_NOTICE};
use videovault_core::VideoResult;

use crate::state::*;

/// Move the pre-built client into the global signal. Called once on mount.
pub fn install_client() {
    let client = crate::INITIAL_CLIENT.lock().ok().and_then(|mut slot| slot.take());
    if client.is_some() {
        *CLIENT.write() = client;
    }
}

/// Fetch categories once and store them (or the fallback list).
pub fn load_categories() {
    let Some(client) = CLIENT.read().clone() else {
        warn!("No search client, using fallback categories");
        SEARCH.write().apply_categories(videovault_core::CategoryLoad::Fallback);
        return;
    };
    spawn(async move {
        let load = client.fetch_categories().await;
        SEARCH.write().apply_categories(load);
    });
}

/// Run a search started by `submit` or `select_category`. A `None` pending
/// search (blank query) does nothing.
pub fn run_search(pending: Option<PendingSearch>) {
    let Some(pending) = pending else {
        return;
    };
    let Some(client) = CLIENT.read().clone() else {
        SEARCH.write().finish_search(
            pending.id,
            SearchOutcome::Failed(SearchError::Request("search client unavailable".into())),
        );
        return;
    };
    spawn(async move {
        let outcome = client.search(&pending.query).await;
        SEARCH.write().finish_search(pending.id, outcome);
    });
}

pub fn open_result(video: &VideoResult) {
    match card_action(video) {
        CardAction::ShowDemoNotice => {
            debug!(id = video.id.as_str(), "Demo result clicked");
            *NOTICE.write() = Some(DEMO_NOTICE.to_string());
        }
        CardAction::OpenExternal(url) => open_external(&url),
    }
}

#[cfg(feature = "desktop")]
fn open_external(url: &str) {
    if let Err(e) = open::that(url) {
        warn!(url, error = %e, "Could not open browser");
    }
}

#[cfg(not(feature = "desktop"))]
fn open_external(url: &str) {
    let target = serde_json::Value::from(url).to_string();
    let script = format!("window.open({target}, '_blank');");
    let url = url.to_string();
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            warn!(url = url.as_str(), error = ?e, "Could not open browser");
        }
    });
}
