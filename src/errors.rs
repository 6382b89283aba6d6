use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Failed to process Slack event: {0}")]
    EventError(String),

    #[error("{0}")]
    LlmError(String),

    #[error("{0}")]
    WebhookError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RelayError {
    /// The bare message, without the category prefix `Display` adds.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            RelayError::InvalidEvent(msg)
            | RelayError::EventError(msg)
            | RelayError::LlmError(msg)
            | RelayError::WebhookError(msg)
            | RelayError::ConfigError(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::InvalidEvent(format!("Invalid JSON in event body: {}", error))
    }
}
