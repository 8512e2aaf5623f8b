//! CLI command definitions

use clap::{Parser, ValueEnum};
use scamper_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for SCAMPER results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with every technique, the summary and statistics
    Full,
    /// Only the executive summary
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for scamper
#[derive(Parser, Debug)]
#[command(name = "scamper")]
#[command(author, version, about = "SCAMPER ideation - seven creative techniques applied to one problem")]
#[command(long_about = r#"
scamper sends a problem to seven technique agents (Substitute, Combine, Adapt,
Modify, Put to other uses, Eliminate, Reverse), collects their ideas and writes
an executive summary. A failing agent never aborts the run.

Configuration files are loaded from (in priority order):
1. SCAMPER_* environment variables (e.g. SCAMPER_GEMINI__MODEL)
2. --config <path>       Explicit config file
3. ./scamper.toml        Project-level config
4. ~/.config/scamper/config.toml   Global config

The Gemini API key is read from GEMINI_API_KEY (a .env file is honored).

Example:
  scamper "Reducir la rotación de personal" --context "Startup de 40 personas"
  scamper --demo -o summary
  scamper --chat
  scamper --serve --bind 0.0.0.0:5000
"#)]
pub struct Cli {
    /// The problem to analyze (not required in chat, demo, serve, status or health mode)
    pub problem: Option<String>,

    /// Optional context for the problem
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Run the built-in demo problem
    #[arg(long, conflicts_with_all = ["chat", "serve"])]
    pub demo: bool,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Start the web API
    #[arg(long)]
    pub serve: bool,

    /// Listen address for --serve (overrides [web].bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Print orchestrator and agent status, then exit
    #[arg(long)]
    pub status: bool,

    /// Run the agent health check, then exit
    #[arg(long)]
    pub health: bool,

    /// Run technique agents one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_problem_with_context() {
        let cli = Cli::try_parse_from([
            "scamper",
            "Reducir reuniones",
            "--context",
            "equipo remoto",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.problem.as_deref(), Some("Reducir reuniones"));
        assert_eq!(cli.context.as_deref(), Some("equipo remoto"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bind_requires_serve() {
        assert!(Cli::try_parse_from(["scamper", "--bind", "0.0.0.0:80"]).is_err());

        let cli = Cli::try_parse_from(["scamper", "--serve", "--bind", "0.0.0.0:80"]).unwrap();
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:80"));
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Summary),
            DomainOutputFormat::Summary
        );
    }
}
