//! HTTP client for the search backend's two endpoints.
//!
//! Failures are folded into tagged outcomes rather than returned as errors:
//! a category failure becomes [`CategoryLoad::Fallback`], a search failure
//! becomes [`SearchOutcome::Failed`]. Callers never have to pick which error
//! types to swallow.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ConfigError, SearchError};
use crate::types::{CategoryLoad, SearchOutcome, SearchResponse, MAX_RESULTS};

const CATEGORIES_PATH: &str = "videos/categories";
const SEARCH_PATH: &str = "videos/search";

/// Client for the VideoVault backend. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let builder = reqwest::Client::builder();
        // The browser owns timeouts and the user agent on wasm.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .user_agent(concat!("VideoVault/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout);
        let http = builder.build().map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn categories_url(&self) -> Url {
        self.config.endpoint(CATEGORIES_PATH)
    }

    /// Search URL for an already-trimmed query, with the fixed page size.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.config.endpoint(SEARCH_PATH);
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("maxResults", &MAX_RESULTS.to_string());
        url
    }

    /// Fetch the suggested category list. Never fails: any problem yields
    /// [`CategoryLoad::Fallback`].
    pub async fn fetch_categories(&self) -> CategoryLoad {
        let url = self.categories_url();
        match self.get_json::<Vec<String>>(url).await {
            Ok(categories) => {
                debug!(count = categories.len(), "Loaded categories");
                CategoryLoad::Loaded(categories)
            }
            Err(e) => {
                warn!(error = %e, "Category fetch failed, using fallback list");
                CategoryLoad::Fallback
            }
        }
    }

    /// Run one search. `query` is sent as given; trimming and the empty-query
    /// guard belong to [`SearchState::begin_search`](crate::state::SearchState::begin_search).
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let url = self.search_url(query);
        match self.get_json::<SearchResponse>(url).await {
            Ok(response) => {
                if let Some(token) = response.next_page_token.as_deref() {
                    debug!(query, next_page_token = token, "Backend offered another page");
                }
                if let Some(echo) = response.query.as_deref().filter(|q| *q != query) {
                    debug!(query, backend_query = echo, "Backend normalized query");
                }
                let (videos, total_results) = response.into_page();
                info!(query, results = videos.len(), total = total_results, "Search complete");
                SearchOutcome::Found {
                    videos,
                    total_results,
                }
            }
            Err(e) => {
                warn!(query, error = %e, "Search failed");
                SearchOutcome::Failed(e)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SearchError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SearchClient {
        SearchClient::new(ClientConfig::new("http://localhost:8080/api").unwrap()).unwrap()
    }

    #[test]
    fn search_url_encodes_query_and_fixes_page_size() {
        let url = client().search_url("rock & roll / 80s");
        assert_eq!(url.path(), "/api/videos/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "rock & roll / 80s".to_string()),
                ("maxResults".to_string(), "12".to_string()),
            ]
        );
        assert!(!url.as_str().contains(" & "));
    }

    #[test]
    fn categories_url_nests_under_base() {
        assert_eq!(
            client().categories_url().as_str(),
            "http://localhost:8080/api/videos/categories"
        );
    }
}
