//! SCAMPER techniques
//!
//! - [`Technique`] - the seven fixed creative-reframing categories
//! - [`profile::TechniqueProfile`] - per-technique data table (prompt
//!   questions, explanation text, capabilities)
//! - [`parsing::parse_ideas`] - idea extraction from generated free text

pub mod parsing;
pub mod profile;

use serde::{Deserialize, Serialize};

/// One of the seven SCAMPER techniques (Value Object)
///
/// The declaration order is the canonical order of every aggregate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    Substitute,
    Combine,
    Adapt,
    Modify,
    PutToOtherUses,
    Eliminate,
    Reverse,
}

impl Technique {
    /// All techniques in enumeration order.
    pub const ALL: [Technique; 7] = [
        Technique::Substitute,
        Technique::Combine,
        Technique::Adapt,
        Technique::Modify,
        Technique::PutToOtherUses,
        Technique::Eliminate,
        Technique::Reverse,
    ];

    /// Wire tag (`"put_to_other_uses"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Substitute => "substitute",
            Technique::Combine => "combine",
            Technique::Adapt => "adapt",
            Technique::Modify => "modify",
            Technique::PutToOtherUses => "put_to_other_uses",
            Technique::Eliminate => "eliminate",
            Technique::Reverse => "reverse",
        }
    }

    /// Title-cased tag used in the summary prompt (`"Put To Other Uses"`)
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Human-facing name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Technique::Substitute => "SUSTITUIR - Reemplazar elementos",
            Technique::Combine => "COMBINAR - Fusionar ideas",
            Technique::Adapt => "ADAPTAR - Aplicar de otros contextos",
            Technique::Modify => "MODIFICAR - Amplificar o reducir",
            Technique::PutToOtherUses => "OTROS USOS - Nuevas aplicaciones",
            Technique::Eliminate => "ELIMINAR - Simplificar",
            Technique::Reverse => "INVERTIR - Reorganizar o hacer al revés",
        }
    }

    /// Position in enumeration order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Technique {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Technique::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown technique: {}", s))
    }
}
