//! Gemini configuration from TOML (`[gemini]` section)

use scamper_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model name used in the request path
    pub model: String,
    /// Sampling temperature in `[0, 1]`
    pub temperature: f32,
    /// Upper bound on generated tokens per call
    pub max_output_tokens: u32,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Calls admitted per minute across the whole process
    pub max_calls_per_minute: u32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 1000,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: 30,
            max_calls_per_minute: 60,
        }
    }
}

impl FileGeminiConfig {
    /// Inline `api_key` first, then the `api_key_env` variable. Blank values
    /// count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}
