//! Runtime configuration for the FormPoint toolkit.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
///
/// Read once at startup; nothing here is hot-reloaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the main REST API, including the version prefix.
    pub api_base_url: String,
    /// Base URL of the payment service API.
    pub payment_base_url: String,
    /// Client key for the hosted payment checkout widget.
    pub payment_client_key: Option<String>,
    /// Access token carried over from a previous `login`, if any.
    pub access_token: Option<String>,
}

impl Settings {
    /// Load configuration from the environment with local-dev defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let api_base_url = env::var("FORMPOINT_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string());
        let payment_base_url = env::var("FORMPOINT_PAYMENT_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8081/api/v1".to_string());
        let payment_client_key = env::var("FORMPOINT_PAYMENT_CLIENT_KEY").ok();
        let access_token = env::var("FORMPOINT_ACCESS_TOKEN").ok();

        Ok(Self {
            api_base_url,
            payment_base_url,
            payment_client_key,
            access_token,
        })
    }

    /// WebSocket endpoint of the statistics broker.
    ///
    /// The broker is mounted at `/ws` on the API host, outside the
    /// versioned REST prefix.
    pub fn ws_url(&self) -> String {
        let host = self.api_base_url.trim_end_matches("/api/v1");
        let host = host
            .replacen("https://", "wss://", 1)
            .replacen("http://", "ws://", 1);
        format!("{host}/ws")
    }
}
