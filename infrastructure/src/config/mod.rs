//! Configuration file loading for scamper
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `SCAMPER_` (`SCAMPER_GEMINI__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./scamper.toml` or `./.scamper.toml`
//! 4. Global: `<config_dir>/scamper/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileScamperConfig,
    FileWebConfig,
};
pub use loader::ConfigLoader;
