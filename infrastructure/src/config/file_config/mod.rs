//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod scamper;
mod web;

pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;
pub use scamper::FileScamperConfig;
pub use web::FileWebConfig;

use scamper_application::ScamperConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.temperature must be between 0.0 and 1.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("gemini.max_output_tokens cannot be 0")]
    InvalidMaxOutputTokens,

    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.max_calls_per_minute cannot be 0")]
    InvalidCallRate,

    #[error("gemini.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("scamper.max_ideas_per_technique cannot be 0")]
    InvalidMaxIdeas,

    #[error("bind address is not a valid socket address: '{0}'")]
    InvalidBindAddress(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation collaborator settings
    pub gemini: FileGeminiConfig,
    /// Orchestration settings
    pub scamper: FileScamperConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Web API settings
    pub web: FileWebConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// The API key and `web.bind` are not checked here; commands that never
    /// call the collaborator or serve must still start without them.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let gemini = &self.gemini;

        if gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if !(0.0..=1.0).contains(&gemini.temperature) {
            issues.push(ConfigValidationError::InvalidTemperature(gemini.temperature));
        }
        if gemini.max_output_tokens == 0 {
            issues.push(ConfigValidationError::InvalidMaxOutputTokens);
        }
        if gemini.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if gemini.max_calls_per_minute == 0 {
            issues.push(ConfigValidationError::InvalidCallRate);
        }
        if !(gemini.base_url.starts_with("http://") || gemini.base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(gemini.base_url.clone()));
        }
        if gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }

        if self.scamper.max_ideas_per_technique == 0 {
            issues.push(ConfigValidationError::InvalidMaxIdeas);
        }

        issues
    }

    /// Listen address for the web API; `override_bind` wins over `web.bind`.
    pub fn serve_addr(
        &self,
        override_bind: Option<&str>,
    ) -> Result<SocketAddr, ConfigValidationError> {
        let web = match override_bind {
            Some(bind) => FileWebConfig {
                bind: bind.to_string(),
            },
            None => self.web.clone(),
        };
        web.socket_addr()
            .ok_or(ConfigValidationError::InvalidBindAddress(web.bind))
    }

    /// Orchestration parameters for the application layer
    pub fn scamper_config(&self) -> ScamperConfig {
        ScamperConfig::default()
            .with_generation(self.gemini.generation_params())
            .with_max_ideas_per_technique(self.scamper.max_ideas_per_technique)
            .with_execution_mode(self.scamper.execution_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamper_domain::{ExecutionMode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-1.5-pro"
temperature = 0.9
max_output_tokens = 800
api_key_env = "MY_GEMINI_KEY"
timeout_seconds = 10
max_calls_per_minute = 15

[scamper]
max_ideas_per_technique = 4
parallel = false

[output]
format = "summary"
color = false

[web]
bind = "0.0.0.0:8080"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.max_output_tokens, 800);
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_seconds, 10);
        assert_eq!(config.gemini.max_calls_per_minute, 15);
        assert_eq!(config.scamper.max_ideas_per_technique, 4);
        assert!(!config.scamper.parallel);
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let mut config = FileConfig::default();
        config.gemini.model = " ".to_string();
        config.gemini.temperature = 1.5;
        config.gemini.max_output_tokens = 0;
        config.gemini.timeout_seconds = 0;
        config.gemini.base_url = "ftp://example.com".to_string();
        config.scamper.max_ideas_per_technique = 0;

        let issues = config.validate();

        assert_eq!(issues.len(), 6);
        assert!(issues.contains(&ConfigValidationError::EmptyModelName));
        assert!(issues.contains(&ConfigValidationError::InvalidTemperature(1.5)));
        assert!(issues.contains(&ConfigValidationError::InvalidMaxOutputTokens));
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::InvalidMaxIdeas));
    }

    #[test]
    fn test_bad_bind_only_fails_when_serving() {
        let mut config = FileConfig::default();
        config.web.bind = "nowhere".to_string();

        assert!(config.validate().is_empty());
        assert_eq!(
            config.serve_addr(None),
            Err(ConfigValidationError::InvalidBindAddress("nowhere".to_string()))
        );

        let addr = config.serve_addr(Some("0.0.0.0:8080")).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(config.serve_addr(Some("bad")).is_err());
    }

    #[test]
    fn test_negative_temperature_rejected() {
        let mut config = FileConfig::default();
        config.gemini.temperature = -0.1;
        assert_eq!(
            config.validate(),
            vec![ConfigValidationError::InvalidTemperature(-0.1)]
        );
    }

    #[test]
    fn test_scamper_config_conversion() {
        let mut config = FileConfig::default();
        config.scamper.parallel = false;
        config.scamper.max_ideas_per_technique = 2;
        config.gemini.max_output_tokens = 512;

        let scamper = config.scamper_config();
        assert_eq!(scamper.execution_mode, ExecutionMode::Sequential);
        assert_eq!(scamper.max_ideas_per_technique, 2);
        assert_eq!(scamper.generation.max_output_tokens, 512);
    }
}
