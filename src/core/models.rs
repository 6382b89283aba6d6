use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, json};

/// A decoded inbound Slack event.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackEvent {
    pub event_type: String,
    pub event_data: Value,
    pub challenge: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub application_id: u64,
    pub message: String,
    pub stream: bool,
}

impl LlmRequest {
    pub fn new(application_id: u64, message: impl Into<String>) -> Self {
        Self {
            application_id,
            message: message.into(),
            stream: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: String,
    pub metadata: Option<Value>,
}

/// API Gateway proxy output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: BTreeMap::new(),
        }
    }

    /// 200 with a pre-rendered body, sent byte for byte.
    #[must_use]
    pub fn ok_text(body: &str) -> Self {
        Self::new(200, body)
    }

    #[must_use]
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::new(status_code, json!({ "error": message }).to_string())
    }
}
