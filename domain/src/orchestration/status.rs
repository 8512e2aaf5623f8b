//! Descriptive status and health-check records.

use super::mode::ExecutionMode;
use crate::technique::Technique;
use crate::technique::profile::TechniqueProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capability descriptor of one handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub specialization: String,
    pub focus_areas: Vec<String>,
}

/// Status entry for one configured handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub technique: Technique,
    pub agent_name: String,
    /// One-line specialization description
    pub specialization: String,
    pub capabilities: Capabilities,
}

impl From<&TechniqueProfile> for AgentStatus {
    fn from(profile: &TechniqueProfile) -> Self {
        Self {
            technique: profile.technique,
            agent_name: profile.agent_name.to_string(),
            specialization: profile.description.to_string(),
            capabilities: Capabilities {
                specialization: profile.specialization.to_string(),
                focus_areas: profile.focus_areas.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

/// Read-only description of the orchestrator and its handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub orchestrator_name: String,
    pub total_agents: usize,
    pub execution_mode: ExecutionMode,
    pub max_ideas_per_agent: usize,
    pub agents: Vec<AgentStatus>,
}

/// Health of one handler after the self-test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentHealth {
    pub technique: Technique,
    pub agent_name: String,
    pub healthy: bool,
}

/// Outcome of running every handler against the canned input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub checked_at: DateTime<Utc>,
    pub agents: Vec<AgentHealth>,
}

impl HealthReport {
    pub fn new(agents: Vec<AgentHealth>) -> Self {
        Self {
            checked_at: Utc::now(),
            agents,
        }
    }

    pub fn healthy_count(&self) -> usize {
        self.agents.iter().filter(|a| a.healthy).count()
    }

    pub fn total(&self) -> usize {
        self.agents.len()
    }

    pub fn all_healthy(&self) -> bool {
        self.healthy_count() == self.total()
    }

    /// Health flag for an agent by display name.
    pub fn is_healthy(&self, agent_name: &str) -> Option<bool> {
        self.agents
            .iter()
            .find(|a| a.agent_name == agent_name)
            .map(|a| a.healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_status_from_profile() {
        let status = AgentStatus::from(TechniqueProfile::of(Technique::Eliminate));
        assert_eq!(status.agent_name, "Eliminate Agent");
        assert_eq!(status.capabilities.focus_areas.len(), 5);
        assert_eq!(
            status.capabilities.specialization,
            "Simplificación y eliminación estratégica"
        );
    }

    #[test]
    fn test_health_counts() {
        let report = HealthReport::new(vec![
            AgentHealth {
                technique: Technique::Substitute,
                agent_name: "Substitute Agent".into(),
                healthy: true,
            },
            AgentHealth {
                technique: Technique::Combine,
                agent_name: "Combine Agent".into(),
                healthy: false,
            },
        ]);
        assert_eq!(report.healthy_count(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.all_healthy());
        assert_eq!(report.is_healthy("Combine Agent"), Some(false));
        assert_eq!(report.is_healthy("Nobody"), None);
    }
}
