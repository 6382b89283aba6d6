//! mention-relay - relays Slack app mentions to an LLM completion API.
//!
//! Each Lambda invocation is a single linear chain:
//! 1. Decode the API Gateway payload into a Slack event
//! 2. Answer the `url_verification` handshake, or
//! 3. Pull the mention text out of an `app_mention`, send it to the LLM API,
//!    and post the reply to the configured incoming webhook
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mention_relay::application::SlackEventUseCase;
//! use mention_relay::clients::LlmApiClient;
//! use mention_relay::core::config::AppConfig;
//! use mention_relay::slack::{SlackEventParser, SlackWebhookSender};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     mention_relay::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let use_case = SlackEventUseCase::new(
//!         Arc::new(SlackEventParser::new()),
//!         Arc::new(LlmApiClient::new(&config)?),
//!         Arc::new(SlackWebhookSender::new(&config)?),
//!         config.llm_application_id,
//!     );
//!
//!     let payload = serde_json::json!({
//!         "body": r#"{"type":"url_verification","challenge":"abc"}"#
//!     });
//!     let response = use_case.execute(&payload).await;
//!     assert_eq!(response.body, "abc");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod application;
pub mod clients;
pub mod core;
pub mod errors;
pub mod slack;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of
/// each Lambda binary; later calls are no-ops.
///
/// # Example
///
/// ```
/// mention_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
