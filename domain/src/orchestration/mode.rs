//! Execution mode for the technique fan-out

use serde::{Deserialize, Serialize};

/// How the seven technique handlers are scheduled
///
/// Chosen once from configuration; never switched per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// All handlers run concurrently (default)
    #[default]
    Parallel,
    /// Handlers run one at a time in technique order
    Sequential,
}

impl ExecutionMode {
    pub fn from_parallel_flag(parallel: bool) -> Self {
        if parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExecutionMode::Parallel => "Parallel",
            ExecutionMode::Sequential => "Sequential",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_from_flag() {
        assert!(ExecutionMode::from_parallel_flag(true).is_parallel());
        assert_eq!(
            ExecutionMode::from_parallel_flag(false),
            ExecutionMode::Sequential
        );
    }
}
