//! Infrastructure layer for scamper
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod rate_limit;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileScamperConfig, FileWebConfig,
};
pub use gemini::{GeminiError, GeminiSettings, GeminiTextGenerator};
pub use rate_limit::RateLimitedGenerator;
