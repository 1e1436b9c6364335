//! Gemini API client.
//!
//! One stateless method per generation operation. Each call builds a prompt,
//! performs a single authenticated round-trip against `generateContent`, and
//! normalizes the response into typed values. No retries and no caching; a
//! call either succeeds wholesale or fails with a [`GenAiError`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use tubespark_models::{TrendingTopic, VideoFormat, VideoIdea};

use crate::config::GenAiConfig;
use crate::error::{GenAiError, GenAiResult};
use crate::extract::extract_json_object;
use crate::prompts;

/// Fixed fallback text for detail-generation calls whose remote round-trip
/// failed. The UI still renders a result slot with this string; this is a
/// deliberate user-facing degradation, not a silent failure.
pub const DETAIL_FALLBACK: &str = "content generation failed";

/// Gemini API client.
pub struct GeminiClient {
    config: GenAiConfig,
    client: Client,
}

/// Gemini `generateContent` request.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: serde_json::Value,
}

impl GenerateContentRequest {
    fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
            tools: None,
        }
    }

    /// Schema-constrained request: the provider is asked to conform its JSON
    /// output to `schema`.
    fn with_schema(prompt: String, schema: serde_json::Value) -> Self {
        let mut request = Self::text(prompt);
        request.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        });
        request
    }

    /// Web-grounded request: enables the provider's live search tool.
    fn with_web_search(prompt: String) -> Self {
        let mut request = Self::text(prompt);
        request.tools = Some(vec![Tool {
            google_search: json!({}),
        }]);
        request
    }
}

/// Gemini `generateContent` response.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Expected shape of the schema-constrained ideation response.
#[derive(Debug, Deserialize)]
struct IdeasEnvelope {
    ideas: Vec<VideoIdea>,
}

/// Expected shape of the JSON object embedded in the trend response.
#[derive(Debug, Deserialize)]
struct TrendsEnvelope {
    trends: Vec<TrendingTopic>,
}

impl GeminiClient {
    /// Create a client from an explicit config.
    pub fn new(config: GenAiConfig) -> GenAiResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Create a client from environment variables. Fails with
    /// [`GenAiError::MissingApiKey`] when the credential is absent.
    pub fn from_env() -> GenAiResult<Self> {
        Self::new(GenAiConfig::from_env()?)
    }

    /// Model this client sends every request to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate exactly 5 video-idea candidates for a topic and format.
    ///
    /// The request is schema-constrained; decoded ideas are returned exactly
    /// as provided, with each item's format echoed from the response rather
    /// than corrected to the caller's.
    pub async fn generate_video_ideas(
        &self,
        topic: &str,
        format: VideoFormat,
        trend: Option<&TrendingTopic>,
    ) -> GenAiResult<Vec<VideoIdea>> {
        let prompt = prompts::ideation(topic, format, trend);
        let request = GenerateContentRequest::with_schema(prompt, ideas_response_schema());

        let text = self.generate(request).await?;
        let envelope: IdeasEnvelope = serde_json::from_str(&text)?;

        debug!(count = envelope.ideas.len(), "decoded video ideas");
        Ok(envelope.ideas)
    }

    /// Find up to 5 currently-trending subtopics via provider-side web
    /// retrieval.
    ///
    /// The response is free text expected to contain one JSON object; only
    /// the first-`{`-to-last-`}` slice is parsed, tolerating surrounding
    /// commentary or code fences.
    pub async fn find_trending_topics(&self, topic: &str) -> GenAiResult<Vec<TrendingTopic>> {
        let prompt = prompts::trend_discovery(topic);
        let request = GenerateContentRequest::with_web_search(prompt);

        let text = self.generate(request).await?;
        let value = extract_json_object(&text)?;
        let envelope: TrendsEnvelope = serde_json::from_value(value)?;

        debug!(count = envelope.trends.len(), "decoded trending topics");
        Ok(envelope.trends)
    }

    /// Generate a script outline for one idea.
    ///
    /// A non-positive duration is rejected locally, before anything is
    /// dispatched. Remote failures collapse to [`DETAIL_FALLBACK`].
    pub async fn generate_script_outline(
        &self,
        title: &str,
        description: &str,
        duration_minutes: Option<f64>,
        format: VideoFormat,
    ) -> GenAiResult<String> {
        if let Some(minutes) = duration_minutes {
            if minutes <= 0.0 {
                return Err(GenAiError::InvalidDuration(minutes));
            }
        }

        let prompt = prompts::script(title, description, duration_minutes, format);
        Ok(self.generate_detail(prompt).await)
    }

    /// Generate 5 alternative titles as newline-delimited free text.
    pub async fn generate_titles(&self, title: &str, description: &str) -> String {
        self.generate_detail(prompts::titles(title, description))
            .await
    }

    /// Generate 3 thumbnail concepts as free text.
    pub async fn generate_thumbnail_ideas(&self, title: &str, description: &str) -> String {
        self.generate_detail(prompts::thumbnails(title, description))
            .await
    }

    /// Generate 10 hashtags as newline-delimited free text.
    pub async fn generate_hashtags(&self, title: &str, description: &str) -> String {
        self.generate_detail(prompts::hashtags(title, description))
            .await
    }

    /// Run a plain-text generation, collapsing any remote failure to the
    /// fixed fallback string.
    async fn generate_detail(&self, prompt: String) -> String {
        match self.generate(GenerateContentRequest::text(prompt)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "detail generation failed, returning fallback");
                DETAIL_FALLBACK.to_string()
            }
        }
    }

    /// Perform one `generateContent` round-trip and return the text of the
    /// first candidate part, with code fences stripped.
    async fn generate(&self, request: GenerateContentRequest) -> GenAiResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api { status, body });
        }

        let decoded: GenerateContentResponse = response.json().await?;

        let text = decoded
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or(GenAiError::EmptyResponse)?;

        Ok(strip_code_fences(text).to_string())
    }
}

/// Strip a surrounding markdown code fence the model may emit despite
/// instructions.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Response schema for the ideation call: an object with an `ideas` array of
/// exactly the three idea fields, each type-enforced by the provider.
fn ideas_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ideas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, catchy, SEO-optimized video title."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief 2-3 sentence description of the video concept."
                        },
                        "type": {
                            "type": "STRING",
                            "enum": [
                                VideoFormat::LongForm.as_str(),
                                VideoFormat::Shorts.as_str()
                            ],
                            "description": "The video format."
                        }
                    },
                    "required": ["title", "description", "type"]
                }
            }
        },
        "required": ["ideas"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(GenAiConfig::for_endpoint("test-key", server.uri())).unwrap()
    }

    /// Wrap `text` in the Gemini candidate/part envelope.
    fn gemini_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn test_ideas_are_echoed_exactly_and_request_is_schema_constrained() {
        let server = MockServer::start().await;

        let payload = json!({
            "ideas": [
                {"title": "Idea A", "description": "First.", "type": "Long-form Video"},
                {"title": "Idea B", "description": "Second.", "type": "YouTube Shorts"},
                {"title": "Idea C", "description": "Third.", "type": "Long-form Video"}
            ]
        });

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(&payload.to_string())))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let trend = TrendingTopic::new("Trend title", "Trend summary.");
        let ideas = client
            .generate_video_ideas("cooking", VideoFormat::LongForm, Some(&trend))
            .await
            .unwrap();

        // No filtering, reordering, or dedup; per-item format is echoed even
        // when it differs from the requested one.
        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[0], VideoIdea::new("Idea A", "First.", VideoFormat::LongForm));
        assert_eq!(ideas[1].format, VideoFormat::Shorts);
        assert_eq!(ideas[2].title, "Idea C");
    }

    #[tokio::test]
    async fn test_ideas_decode_failure_is_malformed_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("not json at all")))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .generate_video_ideas("cooking", VideoFormat::Shorts, None)
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::MalformedJson(_)));
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_empty_candidates_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .generate_video_ideas("cooking", VideoFormat::Shorts, None)
            .await
            .unwrap_err();
        assert!(matches!(err, GenAiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_trends_extracts_object_from_noisy_text() {
        let server = MockServer::start().await;

        let noisy = "Sure! Here is what I found:\n```json\n{\"trends\":[{\"title\":\"A\",\"summary\":\"B\"}]}\n```\nHope this helps.";
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({"tools": [{"googleSearch": {}}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(noisy)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let trends = client.find_trending_topics("cooking").await.unwrap();
        assert_eq!(trends, vec![TrendingTopic::new("A", "B")]);
    }

    #[tokio::test]
    async fn test_trends_without_json_object_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("no object here")))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.find_trending_topics("cooking").await.unwrap_err();
        assert!(matches!(err, GenAiError::JsonNotFound));
    }

    #[tokio::test]
    async fn test_detail_transport_failure_yields_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client.generate_titles("My video", "About things").await;
        assert_eq!(text, DETAIL_FALLBACK);

        let text = client.generate_hashtags("My video", "About things").await;
        assert_eq!(text, DETAIL_FALLBACK);
    }

    #[tokio::test]
    async fn test_script_rejects_non_positive_duration_without_dispatch() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        for minutes in [0.0, -1.5] {
            let err = client
                .generate_script_outline("T", "D", Some(minutes), VideoFormat::Shorts)
                .await
                .unwrap_err();
            assert!(matches!(err, GenAiError::InvalidDuration(_)));
        }
    }

    #[tokio::test]
    async fn test_script_success_returns_text() {
        let server = MockServer::start().await;

        let script = "## Introduction\nWelcome.\n---";
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(script)))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client
            .generate_script_outline("T", "D", Some(2.0), VideoFormat::Shorts)
            .await
            .unwrap();
        assert_eq!(text, script);
    }

    #[tokio::test]
    async fn test_detail_calls_are_idempotent_against_deterministic_mock() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("Title 1\nTitle 2")))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let first = client.generate_titles("T", "D").await;
        let second = client.generate_titles("T", "D").await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\nplain\n```"), "plain");
        assert_eq!(strip_code_fences("  untouched  "), "untouched");
    }
}
