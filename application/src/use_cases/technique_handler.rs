//! Technique handler
//!
//! One handler per SCAMPER technique. A handler turns a problem into a
//! [`TechniqueResult`] and never fails: collaborator errors are folded into
//! the result's failure encoding.

use crate::ports::text_generator::{GenerationError, GenerationParams, TextGenerator};
use scamper_domain::{
    ProblemInput, PromptTemplate, Technique, TechniqueProfile, TechniqueResult, parse_ideas,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Generates ideas for a single technique
pub struct TechniqueHandler<G: TextGenerator + 'static> {
    profile: &'static TechniqueProfile,
    generator: Arc<G>,
    params: GenerationParams,
    max_ideas: usize,
}

// Manual impl: `G` itself need not be `Clone`, only the `Arc`.
impl<G: TextGenerator + 'static> Clone for TechniqueHandler<G> {
    fn clone(&self) -> Self {
        Self {
            profile: self.profile,
            generator: Arc::clone(&self.generator),
            params: self.params,
            max_ideas: self.max_ideas,
        }
    }
}

impl<G: TextGenerator + 'static> TechniqueHandler<G> {
    pub fn new(
        profile: &'static TechniqueProfile,
        generator: Arc<G>,
        params: GenerationParams,
        max_ideas: usize,
    ) -> Self {
        Self {
            profile,
            generator,
            params,
            max_ideas,
        }
    }

    pub fn technique(&self) -> Technique {
        self.profile.technique
    }

    pub fn profile(&self) -> &'static TechniqueProfile {
        self.profile
    }

    /// Produce this technique's result for `input`.
    pub async fn generate(&self, input: &ProblemInput) -> TechniqueResult {
        info!("{} generating ideas", self.profile.agent_name);

        match self.generate_ideas(input).await {
            Ok(ideas) => {
                info!("{} produced {} ideas", self.profile.agent_name, ideas.len());
                TechniqueResult::success(
                    self.technique(),
                    ideas,
                    self.profile.explanation(input.problem()),
                )
            }
            Err(e) => {
                warn!("{} failed: {}", self.profile.agent_name, e);
                TechniqueResult::failure(self.technique(), e.to_string())
            }
        }
    }

    async fn generate_ideas(&self, input: &ProblemInput) -> Result<Vec<String>, GenerationError> {
        let prompt = PromptTemplate::technique_prompt(
            self.profile,
            input.problem(),
            input.context(),
            self.max_ideas,
        );
        debug!("{} prompt: {} chars", self.profile.agent_name, prompt.len());

        let text = self.generator.generate(&prompt, &self.params).await?;

        let ideas = parse_ideas(&text, self.max_ideas);
        if ideas.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "empty generated text".to_string(),
            ));
        }
        Ok(ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedGenerator {
        reply: Result<String, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FixedGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GenerationError) -> Self {
            Self {
                reply: Err(error),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn handler(technique: Technique, generator: FixedGenerator) -> TechniqueHandler<FixedGenerator> {
        TechniqueHandler::new(
            TechniqueProfile::of(technique),
            Arc::new(generator),
            GenerationParams::default(),
            3,
        )
    }

    fn input() -> ProblemInput {
        ProblemInput::new("Reducir la fatiga de reuniones", Some("empresa distribuida")).unwrap()
    }

    #[tokio::test]
    async fn test_success_parses_and_caps_ideas() {
        let h = handler(
            Technique::Eliminate,
            FixedGenerator::replying("1. Quitar agenda\n2. Sin cámaras\n3. Menos asistentes\n4. Extra"),
        );

        let result = h.generate(&input()).await;

        assert!(result.is_success());
        assert_eq!(result.technique, Technique::Eliminate);
        assert_eq!(
            result.ideas,
            vec!["Quitar agenda", "Sin cámaras", "Menos asistentes"]
        );
        assert!(result.explanation.contains("Reducir la fatiga de reuniones"));
    }

    #[tokio::test]
    async fn test_prompt_includes_context_and_heading() {
        let h = handler(Technique::Combine, FixedGenerator::replying("- una idea"));
        h.generate(&input()).await;

        let prompts = h.generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("COMBINAR"));
        assert!(prompts[0].contains("Contexto: empresa distribuida"));
    }

    #[tokio::test]
    async fn test_generation_error_becomes_failure_result() {
        let h = handler(
            Technique::Combine,
            FixedGenerator::failing(GenerationError::Timeout),
        );

        let result = h.generate(&input()).await;

        assert!(result.is_failure());
        assert_eq!(result.ideas.len(), 1);
        assert_eq!(
            result.ideas[0],
            "Error en agente de combinación: Request timed out"
        );
        assert_eq!(
            result.explanation,
            "No se pudieron generar ideas de combinación debido a un error técnico."
        );
    }

    #[tokio::test]
    async fn test_blank_text_is_a_failure() {
        let h = handler(Technique::Adapt, FixedGenerator::replying("   \n  "));

        let result = h.generate(&input()).await;

        assert!(result.is_failure());
        assert!(result.ideas[0].starts_with("Error en agente de adaptación"));
    }

    #[tokio::test]
    async fn test_unstructured_text_is_one_idea() {
        let h = handler(
            Technique::Reverse,
            FixedGenerator::replying("Invertir el orden de las reuniones"),
        );

        let result = h.generate(&input()).await;

        assert!(result.is_success());
        assert_eq!(result.ideas, vec!["Invertir el orden de las reuniones"]);
    }
}
