//! Error types for VideoVault.

use thiserror::Error;

/// Why a search request failed. Only logged: every variant surfaces to the
/// user as the same [`SEARCH_ERROR_MESSAGE`](crate::types::SEARCH_ERROR_MESSAGE).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Connection refused, DNS failure, timeout and the like
    #[error("Request failed: {0}")]
    Request(String),
    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {0}")]
    Status(u16),
    /// Body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Errors raised while building a client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{0}': expected an http or https URL")]
    InvalidBaseUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SearchError::Status(status.as_u16())
        } else {
            SearchError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_name_the_problem() {
        let e = ConfigError::InvalidBaseUrl("ftp://x".into());
        assert!(e.to_string().contains("ftp://x"));
        let e = ConfigError::Client("tls backend unavailable".into());
        assert_eq!(e.to_string(), "Failed to build HTTP client: tls backend unavailable");
    }

    #[test]
    fn status_errors_carry_the_code() {
        assert_eq!(SearchError::Status(503).to_string(), "Backend returned HTTP 503");
    }
}
