//! Shared data models for the TubeSpark backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video formats and idea candidates
//! - Trending topics discovered via web grounding
//! - Generated content payloads
//! - Script display blocks and the line-markup formatter

pub mod content;
pub mod format;
pub mod idea;
pub mod script;
pub mod trend;

// Re-export common types
pub use content::GeneratedContent;
pub use format::VideoFormat;
pub use idea::VideoIdea;
pub use script::{parse_script_blocks, ScriptBlock};
pub use trend::TrendingTopic;
