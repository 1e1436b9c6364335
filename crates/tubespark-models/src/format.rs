//! Video format models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Target format for a video idea.
///
/// The wire strings are the exact labels the generation prompts use, so the
/// remote model can echo them back in schema-constrained responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum VideoFormat {
    #[serde(rename = "Long-form Video")]
    LongForm,
    #[serde(rename = "YouTube Shorts")]
    Shorts,
}

impl VideoFormat {
    /// The label used in prompts and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::LongForm => "Long-form Video",
            VideoFormat::Shorts => "YouTube Shorts",
        }
    }

    pub fn is_shorts(&self) -> bool {
        matches!(self, VideoFormat::Shorts)
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for VideoFormat {
    fn default() -> Self {
        VideoFormat::LongForm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_round_trip() {
        let json = serde_json::to_string(&VideoFormat::Shorts).unwrap();
        assert_eq!(json, "\"YouTube Shorts\"");

        let parsed: VideoFormat = serde_json::from_str("\"Long-form Video\"").unwrap();
        assert_eq!(parsed, VideoFormat::LongForm);
    }

    #[test]
    fn test_unrecognized_label_is_rejected() {
        let parsed: Result<VideoFormat, _> = serde_json::from_str("\"Livestream\"");
        assert!(parsed.is_err());
    }
}
