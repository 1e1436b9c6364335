//! Axum HTTP API server.
//!
//! This crate provides:
//! - REST endpoints for ideation, trend discovery, and detail generation
//! - An explicit session state container with stale-response discarding
//! - Prometheus metrics and request logging middleware

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use session::Session;
pub use state::AppState;
