//! Event route Lambda handler.
//!
//! This module handles:
//! - Configuration loading
//! - Optional Slack signature verification
//! - Wiring the parser, LLM client and webhook sender into the use case

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{parsing, signature};
use crate::application::SlackEventUseCase;
use crate::clients::LlmApiClient;
use crate::core::config::AppConfig;
use crate::core::models::ApiResponse;
use crate::errors::RelayError;
use crate::slack::{SlackEventParser, SlackWebhookSender};

pub use self::function_handler as handler;

/// Lambda handler for the Slack events endpoint.
///
/// # Errors
///
/// Never returns `Err`; every failure is translated into an [`ApiResponse`].
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    info!("Event lambda invoked");

    Ok(handle_with(AppConfig::from_env(), &event.payload).await)
}

/// Processes one payload given the outcome of loading the configuration.
pub async fn handle_with(config: Result<AppConfig, RelayError>, payload: &Value) -> ApiResponse {
    match config {
        Ok(config) => route_event(&config, payload).await,
        Err(e) => {
            error!(error = %e, "Configuration error");
            ApiResponse::error(500, "Configuration error")
        }
    }
}

/// Processes one API Gateway payload with an already-loaded configuration.
pub async fn route_event(config: &AppConfig, payload: &Value) -> ApiResponse {
    if let Some(secret) = config.slack_signing_secret.as_deref() {
        if let Err(response) = verify_request(payload, secret) {
            return response;
        }
        info!("Slack signature verified successfully");
    }

    let use_case = match build_use_case(config) {
        Ok(use_case) => use_case,
        Err(e) => {
            error!(error = %e, "Failed to initialize clients");
            return ApiResponse::error(500, "Internal server error");
        }
    };

    use_case.execute(payload).await
}

fn build_use_case(config: &AppConfig) -> Result<SlackEventUseCase, RelayError> {
    Ok(SlackEventUseCase::new(
        Arc::new(SlackEventParser::new()),
        Arc::new(LlmApiClient::new(config)?),
        Arc::new(SlackWebhookSender::new(config)?),
        config.llm_application_id,
    ))
}

fn verify_request(payload: &Value, signing_secret: &str) -> Result<(), ApiResponse> {
    let headers = payload.get("headers").unwrap_or(&Value::Null);

    let Some(sig) = parsing::get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(ApiResponse::error(401, "Missing X-Slack-Signature header"));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(ApiResponse::error(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    let body = match parsing::body_text(payload) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Unreadable request body");
            return Err(ApiResponse::error(400, e.message()));
        }
    };

    if !signature::verify_slack_signature(&body, timestamp, sig, signing_secret) {
        return Err(ApiResponse::error(401, "Invalid Slack signature"));
    }

    Ok(())
}
