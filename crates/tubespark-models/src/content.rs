//! Generated content payload.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-form text produced by a detail-generation call.
///
/// The internal line markup (markdown sections, bullet markers) is a
/// presentation convention handled by [`crate::script::parse_script_blocks`],
/// not a machine-checked schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedContent {
    /// Generated text, or the fixed fallback when the remote call failed
    pub text: String,

    /// When this content was produced
    pub generated_at: DateTime<Utc>,
}

impl GeneratedContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generated_at: Utc::now(),
        }
    }
}
