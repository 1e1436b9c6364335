//! Trend-discovery handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::Validate;

use tubespark_models::TrendingTopic;

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_blank;
use crate::metrics;
use crate::state::AppState;

/// Fixed user-facing message for any trend-discovery failure.
const TRENDS_FAILED: &str = "failed to find trends";

/// Request to discover trending subtopics.
#[derive(Debug, Deserialize, Validate)]
pub struct FindTrendsRequest {
    /// Topic or niche to search around
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub trends: Vec<TrendingTopic>,
}

/// Find up to 5 currently-trending subtopics via web grounding.
pub async fn find_trends(
    State(state): State<AppState>,
    Json(request): Json<FindTrendsRequest>,
) -> ApiResult<Json<TrendsResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let topic = non_blank(&request.topic, "topic")?;

    let token = state.session.begin_trends(topic);

    let start = Instant::now();
    let result = state.genai.find_trending_topics(topic).await;
    metrics::record_generation("trends", result.is_ok(), start.elapsed().as_secs_f64());

    match result {
        Ok(trends) => {
            if !state.session.complete_trends(token, Ok(trends.clone())) {
                debug!("discarded stale trend result");
            }
            Ok(Json(TrendsResponse { trends }))
        }
        Err(e) => {
            warn!(error = %e, "trend discovery failed");
            state
                .session
                .complete_trends(token, Err(TRENDS_FAILED.to_string()));
            Err(ApiError::upstream(TRENDS_FAILED))
        }
    }
}
