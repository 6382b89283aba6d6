use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::RelayError;

pub const DEFAULT_APPLICATION_ID: u64 = 3550;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm_api_url: Url,
    pub slack_webhook_url: Url,
    pub llm_application_id: u64,
    pub request_timeout: Duration,
    pub llm_api_token: Option<String>,
    pub slack_signing_secret: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required_url = |key: &str| -> Result<Url, RelayError> {
            let raw = get(key).ok_or_else(|| {
                RelayError::ConfigError(format!("Required environment variable {} not set", key))
            })?;
            Url::parse(&raw).map_err(|e| RelayError::ConfigError(format!("{}: {}", key, e)))
        };

        let optional_u64 = |key: &str, default: u64| -> Result<u64, RelayError> {
            match get(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| RelayError::ConfigError(format!("{}: {}", key, e))),
                None => Ok(default),
            }
        };

        Ok(Self {
            llm_api_url: required_url("LLM_API_URL")?,
            slack_webhook_url: required_url("SLACK_WEBHOOK_URL")?,
            llm_application_id: optional_u64("LLM_APPLICATION_ID", DEFAULT_APPLICATION_ID)?,
            request_timeout: Duration::from_secs(optional_u64(
                "REQUEST_TIMEOUT",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            llm_api_token: get("LLM_API_TOKEN"),
            slack_signing_secret: get("SLACK_SIGNING_SECRET"),
        })
    }
}
