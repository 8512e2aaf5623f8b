//! Orchestration parameters for a SCAMPER run.
//!
//! [`ScamperConfig`] groups the static parameters that control
//! [`RunScamperUseCase`](crate::use_cases::run_scamper::RunScamperUseCase).
//! They are fixed when the use case is built; nothing changes per request.

use crate::ports::text_generator::GenerationParams;
use scamper_domain::ExecutionMode;
use serde::{Deserialize, Serialize};

/// Orchestration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamperConfig {
    /// Sampling parameters forwarded to every generation call.
    pub generation: GenerationParams,
    /// Upper bound on ideas kept per technique.
    pub max_ideas_per_technique: usize,
    /// Fan-out strategy.
    pub execution_mode: ExecutionMode,
}

impl Default for ScamperConfig {
    fn default() -> Self {
        Self {
            generation: GenerationParams::default(),
            max_ideas_per_technique: 3,
            execution_mode: ExecutionMode::Parallel,
        }
    }
}

impl ScamperConfig {
    // ==================== Builder Methods ====================

    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_max_ideas_per_technique(mut self, max: usize) -> Self {
        self.max_ideas_per_technique = max;
        self
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ScamperConfig::default();
        assert_eq!(config.max_ideas_per_technique, 3);
        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert_eq!(config.generation.max_output_tokens, 1000);
        assert!((config.generation.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder() {
        let config = ScamperConfig::default()
            .with_max_ideas_per_technique(5)
            .with_execution_mode(ExecutionMode::Sequential)
            .with_generation(GenerationParams {
                temperature: 0.2,
                max_output_tokens: 256,
            });

        assert_eq!(config.max_ideas_per_technique, 5);
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.generation.max_output_tokens, 256);
    }
}
