//! Problem input value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user-submitted problem with optional context (Value Object)
///
/// Input boundaries (CLI, web) enforce their own minimum length before
/// constructing one; the orchestrator trusts what it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInput {
    problem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

impl ProblemInput {
    /// Create a new problem input.
    ///
    /// Fails if the problem is empty or whitespace. Blank context is
    /// normalized to `None`.
    pub fn new(
        problem: impl Into<String>,
        context: Option<impl Into<String>>,
    ) -> Result<Self, DomainError> {
        let problem = problem.into().trim().to_string();
        if problem.is_empty() {
            return Err(DomainError::EmptyProblem);
        }
        let context = context
            .map(|c| c.into().trim().to_string())
            .filter(|c| !c.is_empty());
        Ok(Self { problem, context })
    }

    /// Create a problem input and require at least `minimum` characters.
    pub fn with_min_length(
        problem: impl Into<String>,
        context: Option<impl Into<String>>,
        minimum: usize,
    ) -> Result<Self, DomainError> {
        let input = Self::new(problem, context)?;
        let actual = input.problem.chars().count();
        if actual < minimum {
            return Err(DomainError::ProblemTooShort { actual, minimum });
        }
        Ok(input)
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl std::fmt::Display for ProblemInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({})", self.problem, context),
            None => write!(f, "{}", self.problem),
        }
    }
}
