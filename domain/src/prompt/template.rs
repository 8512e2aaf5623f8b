//! Prompt templates for the SCAMPER flow

use crate::technique::profile::TechniqueProfile;

/// Maximum number of technique first-ideas embedded in the summary prompt
pub const SUMMARY_IDEA_LIMIT: usize = 5;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction block for one technique
    pub fn technique_prompt(
        profile: &TechniqueProfile,
        problem: &str,
        context: Option<&str>,
        max_ideas: usize,
    ) -> String {
        let mut prompt = format!(
            "Aplica la técnica SCAMPER de {} al siguiente problema:\nProblema: {}\n",
            profile.heading, problem
        );

        if let Some(context) = context {
            prompt.push_str(&format!("Contexto: {}\n", context));
        }

        prompt.push_str(&format!(
            "\nGenera exactamente {} ideas creativas preguntándote:\n",
            max_ideas
        ));
        for question in &profile.prompt_questions {
            prompt.push_str(&format!("- {}\n", question));
        }

        prompt.push_str("\nFormato de respuesta:\n");
        for i in 1..=max_ideas {
            prompt.push_str(&format!("{}. [Idea específica y concreta]\n", i));
        }

        prompt
    }

    /// Prompt for the executive summary.
    ///
    /// `best_ideas` are `(technique title, first idea)` pairs; only the first
    /// [`SUMMARY_IDEA_LIMIT`] are embedded.
    pub fn summary_prompt(problem: &str, best_ideas: &[(String, String)]) -> String {
        let ideas = best_ideas
            .iter()
            .take(SUMMARY_IDEA_LIMIT)
            .map(|(title, idea)| format!("{}: {}", title, idea))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"Eres un consultor de innovación experto. Analiza las siguientes ideas generadas por un sistema multi-agente SCAMPER y crea un resumen ejecutivo de máximo 4 oraciones.

Problema analizado: {}

Ideas principales por técnica:
{}

El resumen debe:
1. Destacar las direcciones más prometedoras
2. Identificar patrones o temas emergentes
3. Sugerir próximos pasos o recomendaciones
4. Ser conciso pero perspicaz

Resumen ejecutivo:"#,
            problem, ideas
        )
    }

    /// Deterministic summary used when synthesis is unavailable
    pub fn fallback_summary(problem: &str, total_ideas: usize, successful: usize) -> String {
        format!(
            "El análisis multi-agente SCAMPER generó {} ideas utilizando {} técnicas especializadas. \
Las ideas exploran sustituciones estratégicas, combinaciones sinérgicas, adaptaciones cross-industry, \
modificaciones de escala, nuevos usos, simplificaciones y enfoques contraintuitivos para abordar '{}' \
desde múltiples perspectivas innovadoras.",
            total_ideas, successful, problem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::Technique;

    #[test]
    fn test_technique_prompt_with_context() {
        let profile = TechniqueProfile::of(Technique::Substitute);
        let prompt = PromptTemplate::technique_prompt(
            profile,
            "Reduce meeting fatigue",
            Some("distributed tech company"),
            3,
        );
        assert!(prompt.contains("SUSTITUIR"));
        assert!(prompt.contains("Problema: Reduce meeting fatigue"));
        assert!(prompt.contains("Contexto: distributed tech company"));
        assert!(prompt.contains("Genera exactamente 3 ideas"));
        assert!(prompt.contains("3. [Idea específica y concreta]"));
        assert!(!prompt.contains("4. [Idea"));
    }

    #[test]
    fn test_technique_prompt_without_context() {
        let profile = TechniqueProfile::of(Technique::Reverse);
        let prompt = PromptTemplate::technique_prompt(profile, "p", None, 2);
        assert!(!prompt.contains("Contexto:"));
        assert!(prompt.contains("INVERTIR/REORGANIZAR"));
    }

    #[test]
    fn test_summary_prompt_limits_ideas() {
        let ideas: Vec<(String, String)> = (1..=7)
            .map(|i| (format!("T{}", i), format!("idea {}", i)))
            .collect();
        let prompt = PromptTemplate::summary_prompt("the problem", &ideas);
        assert!(prompt.contains("Problema analizado: the problem"));
        assert!(prompt.contains("T5: idea 5"));
        assert!(!prompt.contains("T6: idea 6"));
    }

    #[test]
    fn test_fallback_summary() {
        let summary = PromptTemplate::fallback_summary("the problem", 21, 7);
        assert!(summary.contains("generó 21 ideas"));
        assert!(summary.contains("utilizando 7 técnicas"));
        assert!(summary.contains("'the problem'"));
    }
}
