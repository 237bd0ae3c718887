/// LLM client: the single point of entry for generative-AI calls in Folio.
///
/// Every rewrite goes through the [`TextGenerator`] trait; `GeminiClient` is the
/// production implementation. Calls are one-shot: no retry and no client-side
/// timeout, a failure is reported to the caller and the document stays as it was.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod json;
pub mod prompts;

pub use json::{extract_json, extract_json_as};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into free-form text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`; absent when no key is configured.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate with newlines.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: &str) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_BASE)
    }

    /// Points the client at a different API root (used to reach a local stub in tests).
    pub fn with_base_url(api_key: String, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: format!("{}/{model}:generateContent", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("Gemini call succeeded: {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1beta/models")
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "a" }, { "text": "b" }] } }]
        }))
        .unwrap();
        assert_eq!(response.text(), "a\nb");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_request_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: GenerationConfig { temperature: 0.4 },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert!(value["generationConfig"]["temperature"].is_number());
    }

    #[tokio::test]
    async fn test_generate_against_stub() {
        let app = Router::new().route(
            "/v1beta/models/:model",
            post(|Json(body): Json<Value>| async move {
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": format!("echo: {prompt}") }] } }]
                }))
            }),
        );
        let base = serve(app).await;

        let client = GeminiClient::with_base_url("test-key".to_string(), "gemini-test", &base);
        let text = client.generate("hello").await.unwrap();
        assert_eq!(text, "echo: hello");
    }

    #[tokio::test]
    async fn test_generate_reports_http_status() {
        let app = Router::new().route(
            "/v1beta/models/:model",
            post(|| async { (StatusCode::FORBIDDEN, "bad key") }),
        );
        let base = serve(app).await;

        let client = GeminiClient::with_base_url("k".to_string(), "m", &base);
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_generate_empty_text_is_error() {
        let app = Router::new().route(
            "/v1beta/models/:model",
            post(|| async { Json(json!({ "candidates": [] })) }),
        );
        let base = serve(app).await;

        let client = GeminiClient::with_base_url("k".to_string(), "m", &base);
        assert!(matches!(
            client.generate("hello").await,
            Err(LlmError::EmptyContent)
        ));
    }
}
