//! Core types shared across VideoVault: video records, the search response wire
//! format, category loading outcomes, and result-card actions.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page size sent with every search request.
pub const MAX_RESULTS: u32 = 12;

/// Number of category chips rendered under the search bar.
pub const MAX_VISIBLE_CATEGORIES: usize = 8;

/// Identifier prefix the backend uses for synthetic results.
pub const DEMO_ID_PREFIX: &str = "demo-";

/// Categories shown when the backend cannot supply its own list.
pub const FALLBACK_CATEGORIES: [&str; 8] = [
    "Technology",
    "Music",
    "Gaming",
    "Education",
    "Cooking",
    "Fitness",
    "Travel",
    "Science",
];

/// The one message shown for every kind of search failure.
pub const SEARCH_ERROR_MESSAGE: &str =
    "Unable to connect to server. Please ensure the backend is running.";

/// Notice shown instead of opening a demo result.
pub const DEMO_NOTICE: &str =
    "This is a demo video. Connect your YouTube API key to see real videos!";

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A single video returned by the search backend.
///
/// String fields that are missing or `null` become empty, so a sparse record
/// doesn't sink the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoResult {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub channel: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl VideoResult {
    /// Whether this is a synthetic placeholder with no real video behind it.
    pub fn is_demo(&self) -> bool {
        self.id.starts_with(DEMO_ID_PREFIX)
    }
}

/// Body of `GET /videos/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub videos: Option<Vec<VideoResult>>,
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Echo of the query as the backend understood it.
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl SearchResponse {
    /// Split into the result list and the reported total. The total falls back
    /// to the number of videos when the backend omits it, or reports zero
    /// while still sending videos.
    pub fn into_page(self) -> (Vec<VideoResult>, u64) {
        let videos = self.videos.unwrap_or_default();
        let count = videos.len() as u64;
        let total = match self.total_results {
            Some(0) | None => count,
            Some(total) => total,
        };
        (videos, total)
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of loading the category list. Failure is never an error here: the
/// chips degrade to [`FALLBACK_CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLoad {
    Loaded(Vec<String>),
    Fallback,
}

impl CategoryLoad {
    pub fn into_categories(self) -> Vec<String> {
        match self {
            CategoryLoad::Loaded(list) => list,
            CategoryLoad::Fallback => fallback_categories(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CategoryLoad::Fallback)
    }
}

pub fn fallback_categories() -> Vec<String> {
    FALLBACK_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

/// Result of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        videos: Vec<VideoResult>,
        total_results: u64,
    },
    Failed(crate::error::SearchError),
}

// ---------------------------------------------------------------------------
// Result card helpers
// ---------------------------------------------------------------------------

/// What clicking a result card should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Block with [`DEMO_NOTICE`]; nothing is opened.
    ShowDemoNotice,
    /// Open this URL in a new browsing context.
    OpenExternal(String),
}

pub fn card_action(video: &VideoResult) -> CardAction {
    if video.is_demo() {
        CardAction::ShowDemoNotice
    } else {
        CardAction::OpenExternal(watch_url(&video.id))
    }
}

/// External viewing page for a video id.
pub fn watch_url(id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{id}")
}

/// Stand-in thumbnail for when the real one fails to load. Keyed only by id,
/// so re-renders always pick the same image.
pub fn placeholder_thumbnail(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/480/270")
}
