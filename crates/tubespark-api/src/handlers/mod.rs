//! API handlers.

pub mod details;
pub mod health;
pub mod ideas;
pub mod session;
pub mod trends;

use crate::error::{ApiError, ApiResult};

/// Reject blank (empty or whitespace-only) input before dispatching anything
/// to the generation layer; returns the trimmed value.
pub(crate) fn non_blank<'a>(value: &'a str, field: &str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
