//! Seams between the pipeline stages.
//!
//! The use case only talks to these traits, so each stage can be swapped
//! (or mocked) independently.

use async_trait::async_trait;
use serde_json::Value;

use crate::core::models::{LlmRequest, LlmResponse, SlackEvent};
use crate::errors::RelayError;

pub trait EventParser: Send + Sync {
    /// Decode a raw API Gateway payload into a [`SlackEvent`].
    fn parse_slack_event(&self, raw_event: &Value) -> Result<SlackEvent, RelayError>;

    /// Pull the human-authored text out of an `app_mention` event.
    fn extract_message_text(&self, event: &SlackEvent) -> Result<String, RelayError>;
}

#[async_trait]
pub trait LlmService: Send + Sync {
    async fn generate_response(&self, request: &LlmRequest) -> Result<LlmResponse, RelayError>;
}

#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `message`. Implementations bound to a single destination may ignore `channel`.
    async fn send_message(&self, message: &str, channel: &str) -> Result<(), RelayError>;
}
