//! Ideation handler.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::Validate;

use tubespark_models::{TrendingTopic, VideoFormat, VideoIdea};

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_blank;
use crate::metrics;
use crate::state::AppState;

/// Fixed user-facing message for any ideation failure. Transport and decode
/// failures are not distinguished here; the original error is only logged.
const IDEAS_FAILED: &str = "failed to generate ideas";

/// Request to generate video ideas.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateIdeasRequest {
    /// Topic or niche to ideate on
    #[validate(length(min = 1, message = "topic must not be empty"))]
    pub topic: String,
    /// Target video format
    pub format: VideoFormat,
    /// Optional trending-topic hint to condition the prompt on
    #[serde(default)]
    pub trend: Option<TrendingTopic>,
}

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<VideoIdea>,
}

/// Generate 5 video-idea candidates for a topic.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> ApiResult<Json<IdeasResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let topic = non_blank(&request.topic, "topic")?;

    let token = state
        .session
        .begin_ideation(topic, request.format, request.trend.clone());

    let start = Instant::now();
    let result = state
        .genai
        .generate_video_ideas(topic, request.format, request.trend.as_ref())
        .await;
    metrics::record_generation("ideas", result.is_ok(), start.elapsed().as_secs_f64());

    match result {
        Ok(ideas) => {
            if !state.session.complete_ideation(token, Ok(ideas.clone())) {
                debug!("discarded stale ideation result");
            }
            Ok(Json(IdeasResponse { ideas }))
        }
        Err(e) => {
            warn!(error = %e, "idea generation failed");
            state
                .session
                .complete_ideation(token, Err(IDEAS_FAILED.to_string()));
            Err(ApiError::upstream(IDEAS_FAILED))
        }
    }
}
