use std::sync::Arc;
use std::time::Duration;

use kiglist_client::{HttpClient, KiglistApi};

use crate::config::WebConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (site URL, locales).
    pub config: Arc<WebConfig>,
    /// Client for the kiglist API; every server-side fetch goes through it.
    pub api: Arc<KiglistApi>,
}

impl AppState {
    /// Build the state, creating an API client with the configured
    /// upstream timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: WebConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");
        let api = KiglistApi::new(HttpClient::with_client(client, config.api_base_url.clone()));

        Self {
            config: Arc::new(config),
            api: Arc::new(api),
        }
    }
}
