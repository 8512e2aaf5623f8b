//! Orchestration value objects - immutable result types for one SCAMPER run.
//!
//! - [`TechniqueResult`] - one handler's ideas and explanation
//! - [`AggregateResponse`] - all seven results plus the executive summary

use crate::technique::Technique;
use crate::technique::profile::TechniqueProfile;
use serde::{Deserialize, Serialize};

/// Substring that marks an idea as a failure report.
///
/// Success counts, summary selection and health checks classify results by
/// this substring, so an idea that merely mentions it is counted as failed.
pub const FAILURE_SENTINEL: &str = "Error";

/// Ideas and explanation produced by one technique handler
///
/// A failure is still ordinary data: the ideas hold a single error message
/// and the explanation a fixed failure note. `error` records whether the
/// handler itself failed and is not serialized; reporting uses
/// [`TechniqueResult::has_failure_sentinel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueResult {
    pub technique: Technique,
    pub ideas: Vec<String>,
    pub explanation: String,
    #[serde(skip)]
    error: Option<String>,
}

impl TechniqueResult {
    /// Creates a successful result.
    pub fn success(
        technique: Technique,
        ideas: Vec<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            technique,
            ideas,
            explanation: explanation.into(),
            error: None,
        }
    }

    /// Creates the sentinel-encoded failure result for `technique`.
    ///
    /// # Arguments
    /// * `technique` - The technique whose handler failed
    /// * `message` - Description of what went wrong
    pub fn failure(technique: Technique, message: impl Into<String>) -> Self {
        let message = message.into();
        let profile = TechniqueProfile::of(technique);
        Self {
            technique,
            ideas: vec![profile.failure_idea(&message)],
            explanation: profile.failure_explanation(),
            error: Some(message),
        }
    }

    /// Returns `true` if the handler failed to produce ideas.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Returns `true` if the handler produced ideas.
    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    /// The underlying failure message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if any idea contains [`FAILURE_SENTINEL`].
    pub fn has_failure_sentinel(&self) -> bool {
        self.ideas.iter().any(|idea| idea.contains(FAILURE_SENTINEL))
    }

    /// First idea, used as the representative line in summaries.
    pub fn first_idea(&self) -> Option<&str> {
        self.ideas.first().map(String::as_str)
    }
}

/// Complete result of one SCAMPER run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// The problem as submitted
    pub original_problem: String,
    /// One result per technique, in technique enumeration order
    pub results: Vec<TechniqueResult>,
    /// Executive summary (synthesized or templated fallback)
    pub summary: String,
}

impl AggregateResponse {
    pub fn new(
        original_problem: impl Into<String>,
        results: Vec<TechniqueResult>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            original_problem: original_problem.into(),
            results,
            summary: summary.into(),
        }
    }

    /// Total number of idea strings across all results.
    pub fn total_ideas(&self) -> usize {
        self.results.iter().map(|r| r.ideas.len()).sum()
    }

    /// Results with no sentinel-bearing idea.
    pub fn successful_results(&self) -> impl Iterator<Item = &TechniqueResult> {
        self.results.iter().filter(|r| !r.has_failure_sentinel())
    }

    /// Results with at least one sentinel-bearing idea.
    pub fn failed_results(&self) -> impl Iterator<Item = &TechniqueResult> {
        self.results.iter().filter(|r| r.has_failure_sentinel())
    }

    /// Result for a given technique.
    pub fn result_for(&self, technique: Technique) -> Option<&TechniqueResult> {
        self.results.iter().find(|r| r.technique == technique)
    }

    /// Average ideas per technique over the full technique set.
    pub fn average_ideas(&self) -> f64 {
        self.total_ideas() as f64 / Technique::ALL.len() as f64
    }
}
