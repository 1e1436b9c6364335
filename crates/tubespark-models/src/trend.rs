//! Trending topic models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A currently-trending subtopic discovered via provider-side web retrieval.
///
/// Optionally fed back into the ideation call to bias prompt content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrendingTopic {
    /// Short trend title
    pub title: String,

    /// One-sentence summary
    pub summary: String,
}

impl TrendingTopic {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}
