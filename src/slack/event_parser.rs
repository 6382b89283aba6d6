//! Decoding of Slack Events API payloads.
//!
//! `app_mention` events carry the user's text in a rich-text block tree:
//!
//! ```text
//! event.blocks[0]                      rich_text
//!       .elements[0]                   rich_text_section
//!                 .elements[0]         user (the bot mention)
//!                 .elements[1].text    " what the user typed"
//! ```

use serde_json::Value;
use tracing::{error, info};

use crate::api::parsing::{body_text, v_array, v_str};
use crate::core::models::SlackEvent;
use crate::core::services::EventParser;
use crate::errors::RelayError;

pub const URL_VERIFICATION: &str = "url_verification";
pub const EVENT_CALLBACK: &str = "event_callback";
pub const APP_MENTION: &str = "app_mention";
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Default, Clone, Copy)]
pub struct SlackEventParser;

impl SlackEventParser {
    pub fn new() -> Self {
        Self
    }
}

impl EventParser for SlackEventParser {
    fn parse_slack_event(&self, raw_event: &Value) -> Result<SlackEvent, RelayError> {
        parse_slack_event(raw_event)
    }

    fn extract_message_text(&self, event: &SlackEvent) -> Result<String, RelayError> {
        extract_message_text(event)
    }
}

/// Parses the API Gateway payload into a [`SlackEvent`].
///
/// # Errors
///
/// Returns [`RelayError::InvalidEvent`] if the body is empty or is not JSON.
pub fn parse_slack_event(raw_event: &Value) -> Result<SlackEvent, RelayError> {
    let body_str = body_text(raw_event)?;

    let body: Value = serde_json::from_str(&body_str).map_err(|e| {
        error!(error = %e, "Failed to parse event JSON");
        RelayError::from(e)
    })?;

    let envelope_type = body
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let event = match envelope_type.as_str() {
        URL_VERIFICATION => SlackEvent {
            event_type: URL_VERIFICATION.to_string(),
            challenge: body
                .get("challenge")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            event_data: body,
        },
        EVENT_CALLBACK => SlackEvent {
            event_type: v_str(&body, &["event", "type"])
                .unwrap_or(UNKNOWN)
                .to_string(),
            challenge: None,
            event_data: body,
        },
        _ => SlackEvent {
            event_type: UNKNOWN.to_string(),
            challenge: None,
            event_data: body,
        },
    };

    Ok(event)
}

/// Extracts the text that follows the bot mention.
///
/// # Errors
///
/// Returns [`RelayError::EventError`] when the event is not an `app_mention`
/// or the block tree does not have the expected shape.
pub fn extract_message_text(event: &SlackEvent) -> Result<String, RelayError> {
    if event.event_type != APP_MENTION {
        return Err(RelayError::EventError(format!(
            "Cannot extract message from event type: {}",
            event.event_type
        )));
    }

    let blocks = v_array(&event.event_data, &["event", "blocks"])
        .map(Vec::as_slice)
        .unwrap_or_default();
    let Some(first_block) = blocks.first() else {
        return Err(extract_error("No blocks found in app mention event"));
    };

    let elements = v_array(first_block, &["elements"])
        .map(Vec::as_slice)
        .unwrap_or_default();
    let Some(first_element) = elements.first() else {
        return Err(extract_error("No elements found in first block"));
    };

    let sub_elements = v_array(first_element, &["elements"])
        .map(Vec::as_slice)
        .unwrap_or_default();
    if sub_elements.len() < 2 {
        return Err(extract_error(
            "Insufficient elements to extract message text",
        ));
    }

    let message_text = v_str(&sub_elements[1], &["text"]).unwrap_or("").trim();
    if message_text.is_empty() {
        return Err(extract_error("Message text is empty"));
    }

    info!(
        text_length = message_text.len(),
        "Message text extracted successfully"
    );

    Ok(message_text.to_string())
}

fn extract_error(message: &str) -> RelayError {
    error!(error = message, "Failed to extract message text");
    RelayError::EventError(message.to_string())
}
