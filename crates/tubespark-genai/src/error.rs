//! Generation-service error types.

use thiserror::Error;

pub type GenAiResult<T> = Result<T, GenAiError>;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Gemini API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no content in Gemini response")]
    EmptyResponse,

    #[error("no JSON object found in response text")]
    JsonNotFound,

    #[error("malformed JSON in response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("duration must be positive, got {0} minutes")]
    InvalidDuration(f64),
}

impl GenAiError {
    /// True for failures to turn response text into the expected shape,
    /// as opposed to transport or API-level failures.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            GenAiError::EmptyResponse | GenAiError::JsonNotFound | GenAiError::MalformedJson(_)
        )
    }

    /// True for caller-side validation failures that block dispatch.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            GenAiError::MissingApiKey | GenAiError::InvalidDuration(_)
        )
    }
}
