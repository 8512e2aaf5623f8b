//! Run SCAMPER use case
//!
//! Fans a problem out to the seven technique handlers, isolates failures per
//! handler and synthesizes an executive summary from the survivors.

use crate::config::ScamperConfig;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::technique_handler::TechniqueHandler;
use futures::FutureExt;
use scamper_domain::{
    AgentHealth, AgentStatus, AggregateResponse, ExecutionMode, HealthReport, ProblemInput,
    PromptTemplate, SUMMARY_IDEA_LIMIT, SystemStatus, Technique, TechniqueProfile,
    TechniqueResult,
};
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

/// Name reported by [`RunScamperUseCase::status`]
pub const ORCHESTRATOR_NAME: &str = "Orchestrator";

/// Canned problem used by the self-test
pub const HEALTH_CHECK_PROBLEM: &str = "Mejorar la comunicación en equipos remotos";

/// Canned context used by the self-test
pub const HEALTH_CHECK_CONTEXT: &str =
    "Empresa de tecnología con trabajadores distribuidos globalmente";

/// Use case for running a SCAMPER session
pub struct RunScamperUseCase<G: TextGenerator + 'static> {
    generator: Arc<G>,
    handlers: Vec<TechniqueHandler<G>>,
    config: ScamperConfig,
}

impl<G: TextGenerator + 'static> RunScamperUseCase<G> {
    /// Build the orchestrator with one handler per technique.
    ///
    /// All handlers and the summary step share `generator`.
    pub fn new(generator: Arc<G>, config: ScamperConfig) -> Self {
        let handlers = TechniqueProfile::all()
            .iter()
            .map(|profile| {
                TechniqueHandler::new(
                    profile,
                    Arc::clone(&generator),
                    config.generation,
                    config.max_ideas_per_technique,
                )
            })
            .collect();

        Self {
            generator,
            handlers,
            config,
        }
    }

    pub fn config(&self) -> &ScamperConfig {
        &self.config
    }

    /// Process a problem with default (no-op) progress
    pub async fn process(&self, input: &ProblemInput) -> AggregateResponse {
        self.process_with_progress(input, &NoProgress).await
    }

    /// Process a problem with progress callbacks
    ///
    /// Always returns a complete response: one result per technique in
    /// [`Technique::ALL`] order, plus a summary.
    pub async fn process_with_progress(
        &self,
        input: &ProblemInput,
        progress: &dyn ProgressNotifier,
    ) -> AggregateResponse {
        info!(
            "Processing problem with {} techniques ({})",
            self.handlers.len(),
            self.config.execution_mode
        );
        progress.on_fan_out_start(self.handlers.len());

        let results = match self.config.execution_mode {
            ExecutionMode::Parallel => self.fan_out_parallel(input, progress).await,
            ExecutionMode::Sequential => self.fan_out_sequential(input, progress).await,
        };

        progress.on_summary_start();
        let (summary, synthesized) = self.summarize(input.problem(), &results).await;
        progress.on_summary_complete(synthesized);

        AggregateResponse::new(input.problem(), results, summary)
    }

    /// Run every handler concurrently; results are reordered afterwards.
    async fn fan_out_parallel(
        &self,
        input: &ProblemInput,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TechniqueResult> {
        let mut join_set = JoinSet::new();
        let mut owners = HashMap::new();

        for handler in &self.handlers {
            let handler = handler.clone();
            let input = input.clone();
            let technique = handler.technique();

            let abort = join_set.spawn(async move { handler.generate(&input).await });
            owners.insert(abort.id(), technique);
        }

        let mut slots: Vec<Option<TechniqueResult>> = vec![None; Technique::ALL.len()];

        while let Some(joined) = join_set.join_next_with_id().await {
            let (id, outcome): (task::Id, Result<TechniqueResult, String>) = match joined {
                Ok((id, result)) => (id, Ok(result)),
                Err(e) => {
                    let id = e.id();
                    let message = if e.is_panic() {
                        panic_message(e.into_panic())
                    } else {
                        e.to_string()
                    };
                    (id, Err(message))
                }
            };

            let Some(&technique) = owners.get(&id) else {
                warn!("Join result from unknown task {}", id);
                continue;
            };

            let result = outcome.unwrap_or_else(|message| {
                warn!("{} handler aborted: {}", technique, message);
                TechniqueResult::failure(technique, message)
            });

            progress.on_technique_complete(technique, result.is_success());
            slots[technique.index()] = Some(result);
        }

        collect_in_order(slots)
    }

    /// Run handlers one after another in technique order.
    async fn fan_out_sequential(
        &self,
        input: &ProblemInput,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TechniqueResult> {
        let mut results = Vec::with_capacity(self.handlers.len());

        for handler in &self.handlers {
            let result = run_isolated(handler, input).await;
            progress.on_technique_complete(handler.technique(), result.is_success());
            results.push(result);
        }

        results
    }

    /// Executive summary plus whether it was synthesized (vs. the fallback).
    async fn summarize(&self, problem: &str, results: &[TechniqueResult]) -> (String, bool) {
        let total_ideas: usize = results.iter().map(|r| r.ideas.len()).sum();
        let successful = results.iter().filter(|r| !r.has_failure_sentinel()).count();
        let fallback = || PromptTemplate::fallback_summary(problem, total_ideas, successful);

        let best_ideas: Vec<(String, String)> = results
            .iter()
            .filter(|r| !r.has_failure_sentinel())
            .filter_map(|r| {
                r.first_idea()
                    .map(|idea| (r.technique.title(), idea.to_string()))
            })
            .take(SUMMARY_IDEA_LIMIT)
            .collect();

        if best_ideas.is_empty() {
            debug!("No successful techniques, using fallback summary");
            return (fallback(), false);
        }

        let prompt = PromptTemplate::summary_prompt(problem, &best_ideas);
        match self.generator.generate(&prompt, &self.config.generation).await {
            Ok(text) if !text.trim().is_empty() => (text.trim().to_string(), true),
            Ok(_) => {
                warn!("Summary generation returned empty text, using fallback");
                (fallback(), false)
            }
            Err(e) => {
                warn!("Summary generation failed: {}, using fallback", e);
                (fallback(), false)
            }
        }
    }

    /// Describe the orchestrator and its handlers. Makes no collaborator calls.
    pub fn status(&self) -> SystemStatus {
        system_status(&self.config)
    }

    /// Run every handler once against a canned problem.
    ///
    /// Handlers run sequentially; a handler is healthy when it produced
    /// ideas and an explanation and no idea carries the failure sentinel.
    pub async fn health_check(&self) -> HealthReport {
        info!("Running health check on {} agents", self.handlers.len());

        let mut agents = Vec::with_capacity(self.handlers.len());
        let input = match ProblemInput::new(HEALTH_CHECK_PROBLEM, Some(HEALTH_CHECK_CONTEXT)) {
            Ok(input) => input,
            Err(e) => {
                warn!("Health check input rejected: {}", e);
                return HealthReport::new(
                    self.handlers
                        .iter()
                        .map(|h| unhealthy(h.profile()))
                        .collect(),
                );
            }
        };

        for handler in &self.handlers {
            let result = run_isolated(handler, &input).await;
            let healthy = !result.has_failure_sentinel()
                && !result.ideas.is_empty()
                && !result.explanation.is_empty();
            debug!("{} healthy: {}", handler.profile().agent_name, healthy);

            agents.push(AgentHealth {
                technique: handler.technique(),
                agent_name: handler.profile().agent_name.to_string(),
                healthy,
            });
        }

        HealthReport::new(agents)
    }
}

/// Status of an orchestrator built from `config`.
///
/// Available without a generator so callers can describe the system before
/// any credentials exist.
pub fn system_status(config: &ScamperConfig) -> SystemStatus {
    SystemStatus {
        orchestrator_name: ORCHESTRATOR_NAME.to_string(),
        total_agents: TechniqueProfile::all().len(),
        execution_mode: config.execution_mode,
        max_ideas_per_agent: config.max_ideas_per_technique,
        agents: TechniqueProfile::all().iter().map(AgentStatus::from).collect(),
    }
}

/// Run one handler, converting a panic into its failure result.
async fn run_isolated<G: TextGenerator + 'static>(
    handler: &TechniqueHandler<G>,
    input: &ProblemInput,
) -> TechniqueResult {
    match AssertUnwindSafe(handler.generate(input)).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload);
            warn!("{} handler panicked: {}", handler.technique(), message);
            TechniqueResult::failure(handler.technique(), message)
        }
    }
}

fn unhealthy(profile: &TechniqueProfile) -> AgentHealth {
    AgentHealth {
        technique: profile.technique,
        agent_name: profile.agent_name.to_string(),
        healthy: false,
    }
}

/// Order slots by technique; any slot left empty becomes a failure.
fn collect_in_order(slots: Vec<Option<TechniqueResult>>) -> Vec<TechniqueResult> {
    Technique::ALL
        .iter()
        .zip(slots)
        .map(|(&technique, slot)| {
            slot.unwrap_or_else(|| TechniqueResult::failure(technique, "handler produced no result"))
        })
        .collect()
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic".to_string()
    }
}
