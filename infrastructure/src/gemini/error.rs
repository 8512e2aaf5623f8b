//! Error types for the Gemini adapter

use scamper_application::GenerationError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("No API key configured: set {env_var} or gemini.api_key")]
    MissingApiKey { env_var: String },

    #[error("Gemini request failed: {0}")]
    Transport(String),

    #[error("Gemini request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Gemini rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Gemini API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed Gemini response: {0}")]
    Malformed(String),
}

impl From<GeminiError> for GenerationError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::ClientBuild(_) | GeminiError::MissingApiKey { .. } => {
                GenerationError::Configuration(e.to_string())
            }
            GeminiError::Transport(msg) => GenerationError::Connection(msg),
            GeminiError::Timeout(_) => GenerationError::Timeout,
            GeminiError::RateLimited(msg) => GenerationError::RateLimited(msg),
            GeminiError::Api { .. } => GenerationError::RequestFailed(e.to_string()),
            GeminiError::Malformed(msg) => GenerationError::MalformedResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_generation_error() {
        assert_eq!(
            GenerationError::from(GeminiError::Timeout(Duration::from_secs(30))),
            GenerationError::Timeout
        );
        assert!(matches!(
            GenerationError::from(GeminiError::RateLimited("429".into())),
            GenerationError::RateLimited(_)
        ));
        assert!(matches!(
            GenerationError::from(GeminiError::Api {
                status: 500,
                body: "boom".into()
            }),
            GenerationError::RequestFailed(msg) if msg.contains("500")
        ));
        assert!(matches!(
            GenerationError::from(GeminiError::MissingApiKey {
                env_var: "GEMINI_API_KEY".into()
            }),
            GenerationError::Configuration(_)
        ));
    }
}
