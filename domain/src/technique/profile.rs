//! Per-technique configuration records.
//!
//! Every handler runs the same control flow; what differs between
//! techniques lives in this table.

use super::Technique;

/// Static description of how one technique is presented and prompted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueProfile {
    pub technique: Technique,
    /// Agent display name (`"Combine Agent"`)
    pub agent_name: &'static str,
    /// One-line specialization description
    pub description: &'static str,
    /// Short capability specialization tag
    pub specialization: &'static str,
    /// Focus-area tags
    pub focus_areas: [&'static str; 5],
    /// Noun used in failure messages (`"combinación"`)
    pub label: &'static str,
    /// Prompt heading verb (`"COMBINAR"`)
    pub heading: &'static str,
    /// Guiding questions embedded in the generation prompt
    pub prompt_questions: [&'static str; 3],
    /// Agent name used inside the explanation (`"Combinación"`)
    pub explanation_agent: &'static str,
    /// Questions listed in the explanation
    pub explanation_questions: [&'static str; 4],
    /// Closing sentence of the explanation
    pub explanation_closing: &'static str,
}

impl TechniqueProfile {
    /// Look up the profile for a technique.
    pub fn of(technique: Technique) -> &'static TechniqueProfile {
        &PROFILES[technique.index()]
    }

    /// All profiles in technique enumeration order.
    pub fn all() -> &'static [TechniqueProfile; 7] {
        &PROFILES
    }

    /// Static rationale for a successful result.
    pub fn explanation(&self, problem: &str) -> String {
        let bullets = self
            .explanation_questions
            .iter()
            .map(|q| format!("• {}", q))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "El Agente de {} analizó '{}' preguntándose:\n\n{}\n\n{}",
            self.explanation_agent, problem, bullets, self.explanation_closing
        )
    }

    /// Sentinel idea for a failed result.
    pub fn failure_idea(&self, message: &str) -> String {
        format!("Error en agente de {}: {}", self.label, message)
    }

    /// Fixed explanation for a failed result.
    pub fn failure_explanation(&self) -> String {
        format!(
            "No se pudieron generar ideas de {} debido a un error técnico.",
            self.label
        )
    }
}

static PROFILES: [TechniqueProfile; 7] = [
    TechniqueProfile {
        technique: Technique::Substitute,
        agent_name: "Substitute Agent",
        description: "Especialista en encontrar elementos que se pueden reemplazar o intercambiar",
        specialization: "Identificación de elementos sustituibles",
        focus_areas: [
            "Materiales alternativos",
            "Procesos de reemplazo",
            "Tecnologías sustitutivas",
            "Enfoques diferentes",
            "Recursos alternativos",
        ],
        label: "sustitución",
        heading: "SUSTITUIR",
        prompt_questions: [
            "¿Qué se puede sustituir?",
            "¿Qué materiales, procesos o elementos se pueden reemplazar?",
            "¿Qué alternativas existen?",
        ],
        explanation_agent: "Sustitución",
        explanation_questions: [
            "¿Qué elementos actuales se pueden reemplazar por alternativas mejores?",
            "¿Qué materiales, procesos o componentes tienen sustitutos disponibles?",
            "¿Qué aspectos tradicionales se pueden intercambiar por enfoques modernos?",
            "¿Qué personas, roles o responsabilidades se pueden redistribuir?",
        ],
        explanation_closing: "Esta técnica busca identificar oportunidades de mejora reemplazando lo existente por algo diferente.",
    },
    TechniqueProfile {
        technique: Technique::Combine,
        agent_name: "Combine Agent",
        description: "Especialista en fusionar ideas, elementos y conceptos para crear sinergias",
        specialization: "Fusión sinérgica de elementos",
        focus_areas: [
            "Unión de funcionalidades",
            "Integración de sistemas",
            "Fusión de recursos",
            "Combinación de ideas",
            "Sinergias creativas",
        ],
        label: "combinación",
        heading: "COMBINAR",
        prompt_questions: [
            "¿Qué se puede combinar o fusionar?",
            "¿Qué ideas, funciones o características se pueden unir?",
            "¿Qué sinergias se pueden crear?",
        ],
        explanation_agent: "Combinación",
        explanation_questions: [
            "¿Qué elementos separados se pueden fusionar para crear valor?",
            "¿Qué funciones diferentes se pueden unir en una sola solución?",
            "¿Qué ideas independientes pueden trabajar juntas sinérgicamente?",
            "¿Qué recursos o capacidades se pueden combinar para mayor eficiencia?",
        ],
        explanation_closing: "Esta técnica busca crear soluciones más poderosas mediante la fusión estratégica de elementos.",
    },
    TechniqueProfile {
        technique: Technique::Adapt,
        agent_name: "Adapt Agent",
        description: "Especialista en adaptar soluciones exitosas de otros contextos",
        specialization: "Adaptación cross-industry y contextual",
        focus_areas: [
            "Transferencia entre industrias",
            "Modernización de métodos clásicos",
            "Adaptación cultural",
            "Aplicación de mejores prácticas",
            "Inspiración cross-funcional",
        ],
        label: "adaptación",
        heading: "ADAPTAR",
        prompt_questions: [
            "¿Qué se puede adaptar de otros contextos?",
            "¿Qué soluciones de otras industrias se pueden aplicar?",
            "¿Qué se puede copiar o modificar de ideas existentes?",
        ],
        explanation_agent: "Adaptación",
        explanation_questions: [
            "¿Qué soluciones exitosas de otras industrias se pueden adaptar?",
            "¿Qué enfoques del pasado se pueden modernizar para este contexto?",
            "¿Qué prácticas de otros campos se pueden aplicar aquí?",
            "¿Qué métodos de culturas o regiones diferentes son transferibles?",
        ],
        explanation_closing: "Esta técnica busca aprovechar el conocimiento existente adaptándolo creativamente.",
    },
    TechniqueProfile {
        technique: Technique::Modify,
        agent_name: "Modify Agent",
        description: "Especialista en modificar, amplificar, reducir e intensificar elementos",
        specialization: "Optimización mediante modificación de escalas",
        focus_areas: [
            "Amplificación estratégica",
            "Reducción eficiente",
            "Intensificación de características",
            "Cambios de velocidad/ritmo",
            "Ajustes de proporción",
        ],
        label: "modificación",
        heading: "MODIFICAR/MAGNIFICAR",
        prompt_questions: [
            "¿Qué se puede modificar, amplificar o exagerar?",
            "¿Qué se puede hacer más grande, pequeño, fuerte, rápido?",
            "¿Qué características se pueden intensificar?",
        ],
        explanation_agent: "Modificación",
        explanation_questions: [
            "¿Qué aspectos se pueden amplificar o hacer más grandes/intensos?",
            "¿Qué elementos se pueden reducir o minimizar para mayor eficiencia?",
            "¿Qué características se pueden hacer más rápidas, lentas, fuertes o suaves?",
            "¿Qué componentes se pueden exagerar o suavizar estratégicamente?",
        ],
        explanation_closing: "Esta técnica busca optimizar mediante cambios de escala, intensidad y proporción.",
    },
    TechniqueProfile {
        technique: Technique::PutToOtherUses,
        agent_name: "Other Uses Agent",
        description: "Especialista en encontrar nuevas aplicaciones y mercados para elementos existentes",
        specialization: "Identificación de aplicaciones alternativas",
        focus_areas: [
            "Nuevos mercados objetivo",
            "Usos no convencionales",
            "Aplicaciones derivadas",
            "Reutilización creativa",
            "Expansión de propósitos",
        ],
        label: "otros usos",
        heading: "OTROS USOS",
        prompt_questions: [
            "¿Para qué más se puede usar?",
            "¿Qué otros mercados o aplicaciones podría tener?",
            "¿Cómo se puede reutilizar de forma diferente?",
        ],
        explanation_agent: "Otros Usos",
        explanation_questions: [
            "¿Para qué otros propósitos se pueden usar los elementos existentes?",
            "¿Qué nuevos mercados o audiencias podrían beneficiarse de esto?",
            "¿Cómo se puede reutilizar de maneras no convencionales?",
            "¿Qué aplicaciones secundarias o derivadas son posibles?",
        ],
        explanation_closing: "Esta técnica busca maximizar el valor encontrando múltiples aplicaciones para los recursos.",
    },
    TechniqueProfile {
        technique: Technique::Eliminate,
        agent_name: "Eliminate Agent",
        description: "Especialista en simplificar, reducir y eliminar elementos innecesarios",
        specialization: "Simplificación y eliminación estratégica",
        focus_areas: [
            "Reducción de complejidad",
            "Eliminación de redundancias",
            "Simplificación de procesos",
            "Remoción de obstáculos",
            "Optimización minimalista",
        ],
        label: "eliminación",
        heading: "ELIMINAR",
        prompt_questions: [
            "¿Qué se puede eliminar, simplificar o reducir?",
            "¿Qué es innecesario o redundante?",
            "¿Cómo se puede hacer más minimalista?",
        ],
        explanation_agent: "Eliminación",
        explanation_questions: [
            "¿Qué elementos son innecesarios y se pueden quitar completamente?",
            "¿Qué procesos redundantes se pueden eliminar para mayor eficiencia?",
            "¿Qué complejidades se pueden simplificar o reducir?",
            "¿Qué obstáculos o fricciones se pueden remover del sistema?",
        ],
        explanation_closing: "Esta técnica busca la elegancia y eficiencia mediante la simplificación estratégica.",
    },
    TechniqueProfile {
        technique: Technique::Reverse,
        agent_name: "Reverse Agent",
        description: "Especialista en invertir, reorganizar y abordar desde perspectivas opuestas",
        specialization: "Pensamiento contrario y reorganización estratégica",
        focus_areas: [
            "Inversión de perspectivas",
            "Reorganización de secuencias",
            "Intercambio de roles",
            "Enfoques contraintuitivos",
            "Restructuración de flujos",
        ],
        label: "inversión",
        heading: "INVERTIR/REORGANIZAR",
        prompt_questions: [
            "¿Qué se puede invertir, reorganizar o hacer al revés?",
            "¿Qué pasaría si cambiamos el orden o la secuencia?",
            "¿Cómo se puede abordar desde el extremo opuesto?",
        ],
        explanation_agent: "Inversión",
        explanation_questions: [
            "¿Qué pasaría si abordamos esto desde el extremo completamente opuesto?",
            "¿Cómo se puede reorganizar la secuencia o el orden de los elementos?",
            "¿Qué sucede si invertimos los roles, responsabilidades o flujos?",
            "¿Qué perspectivas contraintuitivas pueden revelar nuevas soluciones?",
        ],
        explanation_closing: "Esta técnica busca breakthrough insights mediante el pensamiento contrario y la reorganización.",
    },
];
