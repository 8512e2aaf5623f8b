//! Gemini `generateContent` client
//!
//! Implements [`TextGenerator`] over the public Generative Language REST API.
//! One `reqwest::Client` is built per generator and reused for every call;
//! the per-request timeout is the client's.

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scamper_application::{GenerationError, GenerationParams, TextGenerator};
use scamper_domain::truncate;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body kept in [`GeminiError::Api`]
const MAX_ERROR_BODY: usize = 500;

/// Connection settings for [`GeminiTextGenerator`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    /// Resolve settings from the `[gemini]` section.
    ///
    /// Fails when neither `gemini.api_key` nor the configured environment
    /// variable yields a key.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GeminiError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }
}

/// [`TextGenerator`] backed by Gemini
pub struct GeminiTextGenerator {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiTextGenerator {
    pub fn new(settings: GeminiSettings) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Call `generateContent` and return the first candidate's text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::from_prompt(
            prompt,
            GenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
            },
        );

        debug!(
            model = %self.settings.model,
            prompt_chars = prompt.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            warn!(model = %self.settings.model, "Gemini rate limit hit");
            return Err(GeminiError::RateLimited(truncate(&body, MAX_ERROR_BODY)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GeminiError::Timeout(self.settings.timeout)
            } else {
                GeminiError::Malformed(e.to_string())
            }
        })?;

        body.text().ok_or_else(|| {
            let reason = body
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            GeminiError::Malformed(format!("response contained no text ({})", reason))
        })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GeminiError {
        if e.is_timeout() {
            GeminiError::Timeout(self.settings.timeout)
        } else {
            GeminiError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerationError> {
        self.generate_content(prompt, params)
            .await
            .map_err(GenerationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::HeaderMap;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone)]
    struct MockState {
        status: u16,
        body: Value,
        delay: Duration,
        seen: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
    }

    async fn mock_handler(
        State(state): State<MockState>,
        Path(call): Path<String>,
        headers: HeaderMap,
        Json(request): Json<Value>,
    ) -> impl IntoResponse {
        let key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        state.seen.lock().unwrap().push((call, key, request));
        tokio::time::sleep(state.delay).await;
        (
            axum::http::StatusCode::from_u16(state.status).unwrap(),
            Json(state.body.clone()),
        )
    }

    async fn start_mock(state: MockState) -> String {
        let app = Router::new()
            .route("/v1beta/models/{call}", post(mock_handler))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://127.0.0.1:{}", addr.port())
    }

    fn mock_state(status: u16, body: Value) -> MockState {
        MockState {
            status,
            body,
            delay: Duration::ZERO,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn generator(base_url: String, timeout: Duration) -> GeminiTextGenerator {
        GeminiTextGenerator::new(GeminiSettings {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url,
            timeout,
        })
        .unwrap()
    }

    fn params() -> GenerationParams {
        GenerationParams {
            temperature: 0.7,
            max_output_tokens: 1000,
        }
    }

    #[tokio::test]
    async fn test_generate_success() {
        let state = mock_state(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "1. Idea"}]}}]}),
        );
        let seen = Arc::clone(&state.seen);
        let base = start_mock(state).await;
        let g = generator(format!("{}/", base), Duration::from_secs(5));

        let text = g.generate("Prompt de prueba", &params()).await.unwrap();

        assert_eq!(text, "1. Idea");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (call, key, request) = &seen[0];
        assert_eq!(call, "gemini-test:generateContent");
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(request["contents"][0]["parts"][0]["text"], "Prompt de prueba");
        assert_eq!(request["generationConfig"]["maxOutputTokens"], 1000);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let base = start_mock(mock_state(429, json!({"error": "quota"}))).await;
        let g = generator(base, Duration::from_secs(5));

        let err = g.generate("p", &params()).await.unwrap_err();

        assert!(matches!(err, GenerationError::RateLimited(_)));
    }

    #[tokio::test]
    async fn test_server_error() {
        let base = start_mock(mock_state(500, json!({"error": "boom"}))).await;
        let g = generator(base, Duration::from_secs(5));

        let err = g.generate_content("p", &params()).await.unwrap_err();

        assert!(matches!(err, GeminiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_no_text_is_malformed() {
        let base = start_mock(mock_state(
            200,
            json!({"candidates": [{"finishReason": "SAFETY"}]}),
        ))
        .await;
        let g = generator(base, Duration::from_secs(5));

        let err = g.generate_content("p", &params()).await.unwrap_err();

        match err {
            GeminiError::Malformed(msg) => assert!(msg.contains("SAFETY")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout() {
        let mut state = mock_state(200, json!({}));
        state.delay = Duration::from_secs(2);
        let base = start_mock(state).await;
        let g = generator(base, Duration::from_millis(200));

        let err = g.generate("p", &params()).await.unwrap_err();

        assert_eq!(err, GenerationError::Timeout);
    }

    #[test]
    fn test_settings_require_api_key() {
        let config = FileGeminiConfig {
            api_key: None,
            api_key_env: "SCAMPER_TEST_DEFINITELY_UNSET_KEY".to_string(),
            ..FileGeminiConfig::default()
        };

        let err = GeminiSettings::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("SCAMPER_TEST_DEFINITELY_UNSET_KEY"));
    }

    #[test]
    fn test_settings_from_config() {
        let config = FileGeminiConfig {
            api_key: Some("inline".to_string()),
            timeout_seconds: 12,
            ..FileGeminiConfig::default()
        };

        let settings = GeminiSettings::from_config(&config).unwrap();
        assert_eq!(settings.api_key, "inline");
        assert_eq!(settings.model, "gemini-1.5-flash");
        assert_eq!(settings.timeout, Duration::from_secs(12));
    }
}
