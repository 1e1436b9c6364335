//! Fuzzy JSON extraction from free-form model output.
//!
//! The trend-discovery call asks for a bare JSON object, but the model may
//! still wrap it in commentary or code fences. Rather than trusting the
//! response verbatim, this module treats it as fuzzy input: locate the first
//! `{` and the last `}` and parse only that slice.

use serde_json::Value;

use crate::error::{GenAiError, GenAiResult};

/// Extract and parse the single JSON object embedded in `text`.
///
/// Fails with [`GenAiError::JsonNotFound`] when no `{`/`}` pair exists, and
/// with [`GenAiError::MalformedJson`] when the brace slice fails to parse.
pub fn extract_json_object(text: &str) -> GenAiResult<Value> {
    let start = text.find('{').ok_or(GenAiError::JsonNotFound)?;
    let end = text
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or(GenAiError::JsonNotFound)?;

    let value = serde_json::from_str(&text[start..=end])?;
    Ok(value)
}
