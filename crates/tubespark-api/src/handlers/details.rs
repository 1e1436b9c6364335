//! Detail-generation handlers: script, titles, thumbnails, hashtags.
//!
//! All four expand on one idea's title and description. Remote failures do
//! not surface as errors here: the generation layer collapses them to the
//! fixed fallback text, so the response still carries a renderable slot.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tubespark_genai::DETAIL_FALLBACK;
use tubespark_models::{parse_script_blocks, GeneratedContent, ScriptBlock, VideoFormat};

use crate::error::{ApiError, ApiResult};
use crate::handlers::non_blank;
use crate::metrics;
use crate::state::AppState;

/// Request to generate a script outline for one idea.
#[derive(Debug, Deserialize, Validate)]
pub struct ScriptRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub format: VideoFormat,
    /// Optional target duration in minutes; must be positive when present
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub content: GeneratedContent,
    /// The same text pre-parsed into display blocks
    pub blocks: Vec<ScriptBlock>,
}

/// Request to generate titles, thumbnail concepts, or hashtags for one idea.
#[derive(Debug, Deserialize, Validate)]
pub struct DetailRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub content: GeneratedContent,
}

/// Generate a script outline.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(request): Json<ScriptRequest>,
) -> ApiResult<Json<ScriptResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let title = non_blank(&request.title, "title")?;

    let token = state.session.begin_detail();

    let start = Instant::now();
    let result = state
        .genai
        .generate_script_outline(
            title,
            &request.description,
            request.duration_minutes,
            request.format,
        )
        .await;
    state.session.complete_detail(token);

    match result {
        Ok(text) => {
            metrics::record_generation(
                "script",
                text != DETAIL_FALLBACK,
                start.elapsed().as_secs_f64(),
            );
            let blocks = parse_script_blocks(&text);
            Ok(Json(ScriptResponse {
                content: GeneratedContent::new(text),
                blocks,
            }))
        }
        Err(e) => {
            // Only local validation reaches this arm; remote failures were
            // already collapsed to the fallback text.
            metrics::record_generation("script", false, start.elapsed().as_secs_f64());
            Err(e.into())
        }
    }
}

/// Generate 5 alternative titles.
pub async fn generate_titles(
    State(state): State<AppState>,
    Json(request): Json<DetailRequest>,
) -> ApiResult<Json<DetailResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let title = non_blank(&request.title, "title")?;

    let token = state.session.begin_detail();
    let start = Instant::now();
    let text = state.genai.generate_titles(title, &request.description).await;
    state.session.complete_detail(token);
    metrics::record_generation("titles", text != DETAIL_FALLBACK, start.elapsed().as_secs_f64());

    Ok(Json(DetailResponse {
        content: GeneratedContent::new(text),
    }))
}

/// Generate 3 thumbnail concepts.
pub async fn generate_thumbnails(
    State(state): State<AppState>,
    Json(request): Json<DetailRequest>,
) -> ApiResult<Json<DetailResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let title = non_blank(&request.title, "title")?;

    let token = state.session.begin_detail();
    let start = Instant::now();
    let text = state
        .genai
        .generate_thumbnail_ideas(title, &request.description)
        .await;
    state.session.complete_detail(token);
    metrics::record_generation(
        "thumbnails",
        text != DETAIL_FALLBACK,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(DetailResponse {
        content: GeneratedContent::new(text),
    }))
}

/// Generate 10 hashtags.
pub async fn generate_hashtags(
    State(state): State<AppState>,
    Json(request): Json<DetailRequest>,
) -> ApiResult<Json<DetailResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let title = non_blank(&request.title, "title")?;

    let token = state.session.begin_detail();
    let start = Instant::now();
    let text = state.genai.generate_hashtags(title, &request.description).await;
    state.session.complete_detail(token);
    metrics::record_generation(
        "hashtags",
        text != DETAIL_FALLBACK,
        start.elapsed().as_secs_f64(),
    );

    Ok(Json(DetailResponse {
        content: GeneratedContent::new(text),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tubespark_genai::{GenAiConfig, GeminiClient};
    use tubespark_models::VideoIdea;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    async fn state_for(server: &MockServer) -> AppState {
        let client = GeminiClient::new(GenAiConfig::for_endpoint("test-key", server.uri())).unwrap();
        AppState::with_client(ApiConfig::default(), client)
    }

    fn gemini_body(text: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
    }

    #[tokio::test]
    async fn test_script_response_includes_parsed_blocks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_body("## Introduction\nWelcome.\n---")),
            )
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let request = ScriptRequest {
            title: "My video".to_string(),
            description: "About things".to_string(),
            format: VideoFormat::LongForm,
            duration_minutes: Some(10.0),
        };

        let response = generate_script(State(state), Json(request)).await.unwrap();
        assert_eq!(response.0.blocks.len(), 3);
        assert_eq!(
            response.0.blocks[0],
            ScriptBlock::Heading {
                text: "Introduction".to_string()
            }
        );
        assert_eq!(response.0.blocks[2], ScriptBlock::Rule);
    }

    #[tokio::test]
    async fn test_script_rejects_non_positive_duration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let request = ScriptRequest {
            title: "My video".to_string(),
            description: String::new(),
            format: VideoFormat::Shorts,
            duration_minutes: Some(-2.0),
        };

        let err = generate_script(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_detail_fallback_leaves_session_results_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let state = state_for(&server).await;

        // Seed previously displayed ideation results.
        let token = state
            .session
            .begin_ideation("cooking", VideoFormat::LongForm, None);
        state.session.complete_ideation(
            token,
            Ok(vec![VideoIdea::new("Kept", "Still here.", VideoFormat::LongForm)]),
        );

        let request = DetailRequest {
            title: "Kept".to_string(),
            description: "Still here.".to_string(),
        };
        let response = generate_titles(State(state.clone()), Json(request))
            .await
            .unwrap();

        assert_eq!(response.0.content.text, DETAIL_FALLBACK);

        let snapshot = state.session.snapshot();
        assert_eq!(snapshot.ideas.len(), 1);
        assert_eq!(snapshot.ideas[0].title, "Kept");
        assert!(!snapshot.detail_loading);
    }
}
