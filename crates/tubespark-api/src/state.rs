//! Application state.

use std::sync::Arc;

use tubespark_genai::{GeminiClient, GenAiError};

use crate::config::ApiConfig;
use crate::session::Session;

/// Shared application state.
///
/// The Gemini client is the single long-lived credential/client handle,
/// read-only after initialization.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub genai: Arc<GeminiClient>,
    pub session: Arc<Session>,
}

impl AppState {
    /// Create new application state from the environment. Fails when the
    /// Gemini credential is absent.
    pub fn new(config: ApiConfig) -> Result<Self, GenAiError> {
        Ok(Self::with_client(config, GeminiClient::from_env()?))
    }

    /// Create state around an existing client, used by tests.
    pub fn with_client(config: ApiConfig, client: GeminiClient) -> Self {
        Self {
            config,
            genai: Arc::new(client),
            session: Arc::new(Session::default()),
        }
    }
}
