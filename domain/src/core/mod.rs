//! Core domain concepts shared across all subdomains.
//!
//! - [`problem::ProblemInput`] - a validated problem statement plus optional context
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod problem;
pub mod string;
