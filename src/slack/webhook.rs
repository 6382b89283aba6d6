//! Outgoing delivery through a Slack incoming webhook.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};
use url::Url;

use crate::clients::build_http_client;
use crate::core::config::AppConfig;
use crate::core::services::MessageSender;
use crate::errors::RelayError;

/// Create the JSON payload an incoming webhook expects.
///
/// # Examples
///
/// ```
/// use mention_relay::slack::webhook::create_webhook_payload;
///
/// let payload = create_webhook_payload("hello");
/// assert_eq!(payload["text"], "hello");
/// ```
#[must_use]
pub fn create_webhook_payload(text: &str) -> Value {
    json!({ "text": text })
}

pub struct SlackWebhookSender {
    http: Client,
    webhook_url: Url,
}

impl SlackWebhookSender {
    pub fn new(config: &AppConfig) -> Result<Self, RelayError> {
        Ok(Self {
            http: build_http_client(config.request_timeout)?,
            webhook_url: config.slack_webhook_url.clone(),
        })
    }
}

#[async_trait]
impl MessageSender for SlackWebhookSender {
    async fn send_message(&self, message: &str, _channel: &str) -> Result<(), RelayError> {
        info!(message_length = message.len(), "Sending Slack message");

        let resp = self
            .http
            .post(self.webhook_url.clone())
            .json(&create_webhook_payload(message))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Slack webhook request failed");
                RelayError::WebhookError(format!("Failed to send Slack message: {}", e))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(status = %status, body = %body_text, "Slack webhook request failed");
            return Err(RelayError::WebhookError(format!(
                "Failed to send Slack message: webhook returned status {}",
                status
            )));
        }

        info!("Slack message sent successfully");
        Ok(())
    }
}
