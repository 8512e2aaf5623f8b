//! Domain layer for scamper
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Techniques
//!
//! SCAMPER reframes a problem through seven fixed techniques: Substitute,
//! Combine, Adapt, Modify, Put to other uses, Eliminate and Reverse. Each
//! technique is a row in the [`TechniqueProfile`] table rather than its own
//! type.
//!
//! ## Results
//!
//! A run always yields exactly one [`TechniqueResult`] per technique, in
//! [`Technique::ALL`] order, collected into an [`AggregateResponse`]. Failed
//! handlers are encoded as ordinary results carrying an error message.

pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod technique;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, problem::ProblemInput, string::truncate};
pub use orchestration::{
    mode::ExecutionMode,
    status::{AgentHealth, AgentStatus, Capabilities, HealthReport, SystemStatus},
    value_objects::{AggregateResponse, FAILURE_SENTINEL, TechniqueResult},
};
pub use prompt::{PromptTemplate, SUMMARY_IDEA_LIMIT};
pub use technique::{Technique, parsing::parse_ideas, profile::TechniqueProfile};
