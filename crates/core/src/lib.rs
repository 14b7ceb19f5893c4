//! VideoVault core — search client and view state for the video search page.
//!
//! This crate holds everything the UI needs that isn't rendering: the wire
//! types the backend speaks, the HTTP client for its two endpoints, the
//! search page's state transitions, and client configuration.
//!
//! # Modules
//!
//! - [`types`] — Video records, search response, category/search outcomes, card actions
//! - [`client`] — `reqwest` client for `/videos/categories` and `/videos/search`
//! - [`state`] — Search page state and the transitions user events apply
//! - [`config`] — `videovault.toml` loading and base URL handling
//! - [`error`] — Error types

pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use state::{SearchState, ViewStatus};
pub use types::{CardAction, CategoryLoad, SearchOutcome, VideoResult};
