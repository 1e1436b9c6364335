//! Video idea models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::format::VideoFormat;

/// A candidate video concept produced by the ideation call.
///
/// Every detail-generation call (script, titles, thumbnails, hashtags) reads
/// only the title and description of one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoIdea {
    /// Short, catchy, SEO-optimized title
    pub title: String,

    /// 2-3 sentence description of the concept
    pub description: String,

    /// Format the model categorized this idea as. Echoed per item from the
    /// response; it may legitimately differ from the requested format and is
    /// not corrected.
    #[serde(rename = "type")]
    pub format: VideoFormat,
}

impl VideoIdea {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        format: VideoFormat,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_is_type() {
        let idea = VideoIdea::new("Title", "Description", VideoFormat::Shorts);
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["type"], "YouTube Shorts");
        assert!(json.get("format").is_none());
    }
}
