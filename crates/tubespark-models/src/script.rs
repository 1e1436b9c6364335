//! Script display blocks and the line-markup formatter.
//!
//! Script generation emits a line-oriented markup convention (markdown
//! headings plus fixed scene/visual-action/narration markers). This module
//! converts that text into a sequence of display blocks the frontend can
//! render without re-parsing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bullet marker for a visual-action line in a Shorts script.
pub const VISUAL_ACTION_MARKER: &str = "*   **VISUAL ACTION:**";

/// Bullet marker for a narration line in a Shorts script.
pub const NARRATION_MARKER: &str = "*   **NARRATION:**";

/// Prefix of a scene heading line, e.g. `**SCENE 1 (0-3s) - THE HOOK**`.
pub const SCENE_MARKER: &str = "**SCENE";

/// One display block of a rendered script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptBlock {
    /// Level-2 markdown heading (`## `)
    Heading { text: String },
    /// Level-3 markdown heading (`### `)
    Subheading { text: String },
    /// Visual-action bullet of a Shorts scene
    VisualAction { text: String },
    /// Narration bullet of a Shorts scene
    Narration { text: String },
    /// Scene heading (`**SCENE ...**`)
    SceneHeading { text: String },
    /// Generic asterisk bullet (`* `)
    Bullet { text: String },
    /// Horizontal rule (`---` alone on a line)
    Rule,
    /// Any other non-empty line
    Paragraph { text: String },
}

/// Parse script text into display blocks, one line at a time.
///
/// Prefix matching is first-match-wins in this order: level-2 heading,
/// level-3 heading, visual-action bullet, narration bullet, scene heading,
/// generic bullet, horizontal rule, non-empty plain line. Empty lines
/// produce no block. Block order matches input line order exactly.
pub fn parse_script_blocks(content: &str) -> Vec<ScriptBlock> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ScriptBlock> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("## ") {
        return Some(ScriptBlock::Heading {
            text: rest.trim().to_string(),
        });
    }
    if let Some(rest) = trimmed.strip_prefix("### ") {
        return Some(ScriptBlock::Subheading {
            text: rest.trim().to_string(),
        });
    }
    if let Some(rest) = trimmed.strip_prefix(VISUAL_ACTION_MARKER) {
        return Some(ScriptBlock::VisualAction {
            text: rest.trim().to_string(),
        });
    }
    if let Some(rest) = trimmed.strip_prefix(NARRATION_MARKER) {
        return Some(ScriptBlock::Narration {
            text: rest.trim().to_string(),
        });
    }
    if trimmed.starts_with(SCENE_MARKER) {
        return Some(ScriptBlock::SceneHeading {
            text: trimmed.replace("**", "").trim().to_string(),
        });
    }
    if let Some(rest) = trimmed.strip_prefix("* ") {
        return Some(ScriptBlock::Bullet {
            text: rest.trim().to_string(),
        });
    }
    if trimmed == "---" {
        return Some(ScriptBlock::Rule);
    }
    if !trimmed.is_empty() {
        return Some(ScriptBlock::Paragraph {
            text: trimmed.to_string(),
        });
    }
    None
}
