//! VideoVault Desktop — Dioxus-powered video search by category.

use std::sync::Mutex;

use dioxus::prelude::*;
use tracing::{error, info};
use videovault_core::config::resolve_config;
use videovault_core::{ClientConfig, SearchClient};

mod actions;
mod app;
mod results;
mod search;
mod state;

use app::App;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_CLIENT: Mutex<Option<SearchClient>> = Mutex::new(None);

fn build_client() -> Option<SearchClient> {
    let config = resolve_config();
    match SearchClient::new(config) {
        Ok(client) => Some(client),
        Err(e) => {
            error!(error = %e, "Could not build search client, retrying with defaults");
            SearchClient::new(ClientConfig::default())
                .map_err(|e| error!(error = %e, "Search client unavailable"))
                .ok()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("videovault_core=info".parse().unwrap())
                .add_directive("videovault_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let client = build_client();
    if let Some(ref c) = client {
        info!(base_url = c.config().base_url(), "Using search backend");
    }
    if let Ok(mut slot) = INITIAL_CLIENT.lock() {
        *slot = client;
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((2, 6, 23, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Video Vault")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 600.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
