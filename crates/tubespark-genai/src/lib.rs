//! Gemini generation-service layer.
//!
//! This crate is the thin request-formatting/response-parsing layer between
//! the HTTP surface and the hosted Gemini `generateContent` API:
//! - one prompt builder per operation ([`prompts`])
//! - a reqwest-based client with schema-constrained and web-grounded
//!   request modes ([`client`])
//! - fuzzy JSON extraction for free-text responses ([`extract`])
//!
//! No retries, no caching, no multi-provider abstraction. Every call is one
//! round-trip that either yields a typed value or a [`GenAiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompts;

pub use client::{GeminiClient, DETAIL_FALLBACK};
pub use config::GenAiConfig;
pub use error::{GenAiError, GenAiResult};
pub use extract::extract_json_object;
