//! Generation-service configuration.

use std::time::Duration;

use crate::error::{GenAiError, GenAiResult};

/// Default Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used for every operation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key (the system's single static credential)
    pub api_key: String,
    /// API base URL, overridable for tests
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl GenAiConfig {
    /// Create config from environment variables.
    ///
    /// The credential is read once here; its absence is a fatal startup
    /// condition for the binary, not a recoverable per-request error.
    pub fn from_env() -> GenAiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GenAiError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
        })
    }

    /// Config pointing at an arbitrary endpoint, used by tests.
    pub fn for_endpoint(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}
