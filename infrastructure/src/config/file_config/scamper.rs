//! Orchestration configuration from TOML (`[scamper]` section)

use scamper_domain::ExecutionMode;
use serde::{Deserialize, Serialize};

/// Raw orchestration configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScamperConfig {
    /// Upper bound on ideas kept per technique
    pub max_ideas_per_technique: usize,
    /// Run technique handlers concurrently
    pub parallel: bool,
}

impl Default for FileScamperConfig {
    fn default() -> Self {
        Self {
            max_ideas_per_technique: 3,
            parallel: true,
        }
    }
}

impl FileScamperConfig {
    pub fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::from_parallel_flag(self.parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_from_toml() {
        let toml_str = r#"
[scamper]
parallel = false
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scamper.execution_mode(), ExecutionMode::Sequential);
        assert_eq!(config.scamper.max_ideas_per_technique, 3);
    }
}
