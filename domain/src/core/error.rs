//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Problem statement cannot be empty")]
    EmptyProblem,

    #[error("Problem statement is too short: {actual} characters (minimum {minimum})")]
    ProblemTooShort { actual: usize, minimum: usize },
}
