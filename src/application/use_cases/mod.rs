//! Use case implementations for the relay.
//!
//! - Hello world health endpoint
//! - Slack event processing (verification handshake and mention relay)

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api::parsing::v_str;
use crate::core::models::{ApiResponse, LlmRequest, SlackEvent};
use crate::core::services::{EventParser, LlmService, MessageSender};
use crate::errors::RelayError;
use crate::slack::event_parser::{APP_MENTION, URL_VERIFICATION};

pub const HELLO_WORLD_BODY: &str = r#"{"message": "hello world"}"#;
pub const MENTION_PROCESSED_BODY: &str = r#"{"message": "App mention processed"}"#;

#[derive(Debug, Default, Clone, Copy)]
pub struct HelloWorldUseCase;

impl HelloWorldUseCase {
    #[must_use]
    pub fn execute(&self) -> ApiResponse {
        info!("Executing hello world use case");
        ApiResponse::ok_text(HELLO_WORLD_BODY)
    }
}

pub struct SlackEventUseCase {
    event_parser: Arc<dyn EventParser>,
    llm_service: Arc<dyn LlmService>,
    message_sender: Arc<dyn MessageSender>,
    application_id: u64,
}

impl SlackEventUseCase {
    pub fn new(
        event_parser: Arc<dyn EventParser>,
        llm_service: Arc<dyn LlmService>,
        message_sender: Arc<dyn MessageSender>,
        application_id: u64,
    ) -> Self {
        Self {
            event_parser,
            llm_service,
            message_sender,
            application_id,
        }
    }

    /// Runs one event through the pipeline and maps the outcome to an HTTP response.
    ///
    /// Malformed events answer 400, failures while relaying a mention answer 500.
    pub async fn execute(&self, raw_event: &Value) -> ApiResponse {
        info!("Processing Slack event");

        let slack_event = match self.event_parser.parse_slack_event(raw_event) {
            Ok(event) => event,
            Err(e) => {
                error!(error = %e, "Slack bot error");
                return ApiResponse::error(400, e.message());
            }
        };

        match slack_event.event_type.as_str() {
            URL_VERIFICATION => Self::handle_url_verification(&slack_event),
            APP_MENTION => match self.handle_app_mention(&slack_event).await {
                Ok(()) => {
                    info!("App mention processed successfully");
                    ApiResponse::ok_text(MENTION_PROCESSED_BODY)
                }
                Err(e) => {
                    error!(error = %e, "Error processing app mention");
                    ApiResponse::error(500, e.message())
                }
            },
            other => {
                warn!(event_type = other, "Unhandled event type");
                ApiResponse::error(400, "Unrecognized event type")
            }
        }
    }

    fn handle_url_verification(event: &SlackEvent) -> ApiResponse {
        info!("Handling URL verification");
        ApiResponse::ok_text(event.challenge.as_deref().unwrap_or(""))
    }

    async fn handle_app_mention(&self, event: &SlackEvent) -> Result<(), RelayError> {
        info!("Handling app mention");

        let message_text = self.event_parser.extract_message_text(event)?;

        #[cfg(feature = "debug-logs")]
        info!("Mention text: {}", message_text);

        let llm_request = LlmRequest::new(self.application_id, message_text);
        let llm_response = self.llm_service.generate_response(&llm_request).await?;

        let channel = v_str(&event.event_data, &["event", "channel"]).unwrap_or("");
        self.message_sender
            .send_message(&llm_response.content, channel)
            .await
    }
}
