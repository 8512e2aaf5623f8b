//! Application layer for scamper
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ScamperConfig;
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    text_generator::{GenerationError, GenerationParams, TextGenerator},
};
pub use use_cases::run_scamper::{
    HEALTH_CHECK_CONTEXT, HEALTH_CHECK_PROBLEM, ORCHESTRATOR_NAME, RunScamperUseCase, system_status,
};
pub use use_cases::technique_handler::TechniqueHandler;
