//! Console output formatter for SCAMPER results

use colored::Colorize;
use scamper_domain::{AggregateResponse, HealthReport, OutputFormat, SystemStatus, Technique};

/// Formats SCAMPER results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render `response` in the requested format
    pub fn render(response: &AggregateResponse, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(response),
            OutputFormat::Summary => Self::format_summary_only(response),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Format the complete SCAMPER report
    pub fn format(response: &AggregateResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("SCAMPER - Ideas generadas"));
        output.push('\n');

        output.push_str(&format!(
            "\n{}\n   {}\n",
            "PROBLEMA ANALIZADO:".cyan().bold(),
            response.original_problem
        ));

        for (i, result) in response.results.iter().enumerate() {
            let title = format!("{}. {}", i + 1, result.technique.display_name());
            let title = if !result.has_failure_sentinel() {
                title.yellow().bold()
            } else {
                title.red().bold()
            };
            output.push_str(&format!("\n{}\n{}\n", title, "-".repeat(50)));
            output.push_str(&format!("{}\n", result.explanation));
            output.push_str(&format!("\n{}\n", "Ideas generadas:".cyan()));
            for (j, idea) in result.ideas.iter().enumerate() {
                output.push_str(&format!("   {}. {}\n", j + 1, idea));
            }
        }

        output.push_str(&Self::section_header("RESUMEN EJECUTIVO"));
        output.push_str(&format!("{}\n", response.summary));

        output.push_str(&Self::section_header("ESTADÍSTICAS"));
        output.push_str(&Self::statistics(response));

        output.push_str(&Self::footer());

        output
    }

    /// Statistics block: total ideas, successful techniques, average
    pub fn statistics(response: &AggregateResponse) -> String {
        format!(
            "   • Total de ideas generadas: {}\n   • Técnicas aplicadas exitosamente: {}/{}\n   • Promedio de ideas por técnica: {:.1}\n",
            response.total_ideas(),
            response.successful_results().count(),
            Technique::ALL.len(),
            response.average_ideas()
        )
    }

    /// Format as JSON
    pub fn format_json(response: &AggregateResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the executive summary only (concise output)
    pub fn format_summary_only(response: &AggregateResponse) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== SCAMPER - Resumen ejecutivo ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Problema:".bold(), response.original_problem));
        output.push_str(&response.summary);
        output.push('\n');

        let failed: Vec<&str> = response
            .failed_results()
            .map(|r| r.technique.as_str())
            .collect();
        if !failed.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Técnicas con error:".dimmed(),
                failed.join(", ")
            ));
        }

        output
    }

    /// Format the orchestrator status
    pub fn format_status(status: &SystemStatus) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Estado del sistema"));
        output.push('\n');
        output.push_str(&format!(
            "\n{} {}\n{} {}\n{} {}\n{} {}\n",
            "Orquestador:".cyan().bold(),
            status.orchestrator_name,
            "Agentes:".cyan().bold(),
            status.total_agents,
            "Modo:".cyan().bold(),
            status.execution_mode.display_name(),
            "Ideas por agente:".cyan().bold(),
            status.max_ideas_per_agent
        ));

        for agent in &status.agents {
            output.push_str(&format!(
                "\n{}\n  {}\n  {}\n",
                agent.agent_name.yellow().bold(),
                agent.specialization,
                agent.capabilities.focus_areas.join(", ").dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a health-check report
    pub fn format_health(report: &HealthReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Chequeo de salud"));
        for agent in &report.agents {
            let mark = if agent.healthy {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!("  {} {}\n", mark, agent.agent_name));
        }

        let summary = format!(
            "{}/{} agentes saludables",
            report.healthy_count(),
            report.total()
        );
        let summary = if report.all_healthy() {
            summary.green().bold()
        } else {
            summary.yellow().bold()
        };
        output.push_str(&format!("\n{}\n", summary));

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(70);
        format!("{}\n{:^70}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "=".repeat(70))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(70).cyan())
    }
}
