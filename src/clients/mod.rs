//! Client modules for external API interactions

pub mod llm_client;

pub use llm_client::LlmApiClient;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use crate::errors::RelayError;

pub const RELAY_USER_AGENT: &str = "SlackBot/1.0";

/// Builds the HTTP client shared by the outbound calls: JSON content type,
/// a fixed user agent and the configured request timeout.
pub fn build_http_client(timeout: Duration) -> Result<Client, RelayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(RELAY_USER_AGENT));

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| RelayError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}
