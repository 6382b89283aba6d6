//! LLM completion API client module
//!
//! Sends a single user message to the completion endpoint and pulls the
//! first reply content back out.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::{Value, json};
use tracing::{error, info};
use url::Url;

use super::build_http_client;
use crate::core::config::AppConfig;
use crate::core::models::{LlmRequest, LlmResponse};
use crate::core::services::LlmService;
use crate::errors::RelayError;

pub struct LlmApiClient {
    http: Client,
    api_url: Url,
    api_token: Option<String>,
}

impl LlmApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, RelayError> {
        Ok(Self {
            http: build_http_client(config.request_timeout)?,
            api_url: config.llm_api_url.clone(),
            api_token: config.llm_api_token.clone(),
        })
    }

    #[must_use]
    pub fn build_request_payload(request: &LlmRequest) -> Value {
        json!({
            "application_id": request.application_id,
            "stream": request.stream,
            "messages": [
                {
                    "role": "user",
                    "contents": [
                        { "type": "text", "content": request.message }
                    ]
                }
            ]
        })
    }

    /// Reads `reply[0].contents[0].content`.
    pub fn extract_response_content(response: &Value) -> Result<String, RelayError> {
        response
            .get("reply")
            .and_then(Value::as_array)
            .and_then(|reply| reply.first())
            .and_then(|message| message.get("contents"))
            .and_then(Value::as_array)
            .and_then(|contents| contents.first())
            .and_then(|content| content.get("content"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| {
                RelayError::LlmError(
                    "Invalid LLM API response: missing reply[0].contents[0].content".to_string(),
                )
            })
    }

    fn authorization(&self) -> String {
        // The upstream gateway expects the header even when no token is configured.
        self.api_token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmService for LlmApiClient {
    async fn generate_response(&self, request: &LlmRequest) -> Result<LlmResponse, RelayError> {
        let payload = Self::build_request_payload(request);

        info!(
            application_id = request.application_id,
            message_length = request.message.len(),
            "Sending LLM request"
        );

        #[cfg(feature = "debug-logs")]
        info!("LLM request payload: {}", payload);

        let response = self
            .http
            .post(self.api_url.clone())
            .header(AUTHORIZATION, self.authorization())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "LLM API request failed");
                RelayError::LlmError(format!("LLM API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(status = %status, body = %body_text, "LLM API request failed");
            return Err(RelayError::LlmError(format!(
                "LLM API request failed: status {}",
                status
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            error!(error = %e, "LLM API response parsing failed");
            RelayError::LlmError(format!("Invalid LLM API response: {}", e))
        })?;

        let content = Self::extract_response_content(&response_json).inspect_err(|e| {
            error!(error = %e, "LLM API response parsing failed");
        })?;

        info!(content_length = content.len(), "LLM request successful");

        Ok(LlmResponse {
            content,
            metadata: Some(response_json),
        })
    }
}
