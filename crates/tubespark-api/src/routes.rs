//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::details::{
    generate_hashtags, generate_script, generate_thumbnails, generate_titles,
};
use crate::handlers::health::{health, ready};
use crate::handlers::ideas::generate_ideas;
use crate::handlers::session::get_session;
use crate::handlers::trends::find_trends;
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        // Ideation and trend discovery
        .route("/ideas", post(generate_ideas))
        .route("/trends", post(find_trends))
        // Detail generation for one idea
        .route("/details/script", post(generate_script))
        .route("/details/titles", post(generate_titles))
        .route("/details/thumbnails", post(generate_thumbnails))
        .route("/details/hashtags", post(generate_hashtags))
        // Session snapshot
        .route("/session", get(get_session));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
