//! CLI entrypoint for scamper
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use scamper_application::{RunScamperUseCase, ScamperConfig, system_status};
use scamper_domain::{ExecutionMode, OutputFormat};
use scamper_infrastructure::{
    ConfigLoader, FileConfig, GeminiSettings, GeminiTextGenerator, RateLimitedGenerator,
};
use scamper_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ProgressReporter, WebServer, cli_input,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEMO_PROBLEM: &str =
    "Quiero aumentar la participación de los empleados en las reuniones de equipo";
const DEMO_CONTEXT: &str = "Empresa de tecnología, equipos remotos, reuniones virtuales semanales";

type Generator = RateLimitedGenerator<GeminiTextGenerator>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional
    let dotenv = dotenvy::dotenv();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting scamper");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", toml::to_string_pretty(&redacted(&config))?);
        return Ok(());
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let mut scamper_config = config.scamper_config();
    if cli.sequential {
        scamper_config = scamper_config.with_execution_mode(ExecutionMode::Sequential);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if cli.status {
        let status = system_status(&scamper_config);
        match format {
            OutputFormat::Json => println!("{}", to_pretty_json(&status)?),
            _ => println!("{}", ConsoleFormatter::format_status(&status)),
        }
        return Ok(());
    }

    // === Dependency Injection ===
    let use_case = Arc::new(build_use_case(&config, scamper_config)?);

    if cli.health {
        let report = use_case.health_check().await;
        match format {
            OutputFormat::Json => println!("{}", to_pretty_json(&report)?),
            _ => println!("{}", ConsoleFormatter::format_health(&report)),
        }
        if !report.all_healthy() {
            bail!(
                "{} of {} agents unhealthy",
                report.total() - report.healthy_count(),
                report.total()
            );
        }
        return Ok(());
    }

    if cli.serve {
        let addr = config.serve_addr(cli.bind.as_deref())?;
        WebServer::new(use_case).start(&addr.to_string()).await?;
        return Ok(());
    }

    if cli.chat {
        let repl = ChatRepl::new(use_case)
            .with_progress(!cli.quiet)
            .with_format(format);

        repl.run().await?;
        return Ok(());
    }

    // Single problem mode - problem is required unless --demo
    let (problem, context) = if cli.demo {
        (DEMO_PROBLEM.to_string(), Some(DEMO_CONTEXT.to_string()))
    } else {
        match cli.problem.clone() {
            Some(p) => (p, cli.context.clone()),
            None => bail!("A problem is required. Use --chat for interactive mode or --demo."),
        }
    };

    let input = match cli_input(&problem, context.as_deref()) {
        Ok(input) => input,
        Err(e) => bail!("{}", e),
    };

    if !cli.quiet && format != OutputFormat::Json {
        println!();
        println!("+======================================================================+");
        println!("|                 SCAMPER - Sistema multi-agente                       |");
        println!("+======================================================================+");
        println!();
        println!("Problema: {}", input.problem());
        if let Some(context) = input.context() {
            println!("Contexto: {}", context);
        }
        println!("Modo: {}", use_case.config().execution_mode.display_name());
        println!();
    }

    let response = if cli.quiet {
        use_case.process(&input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.process_with_progress(&input, &progress).await
    };

    if response.failed_results().count() == response.results.len() {
        warn!("Every technique failed; check the API key and network access");
    }

    println!("{}", ConsoleFormatter::render(&response, format));

    Ok(())
}

/// Wire the Gemini adapter, the rate limiter and the use case.
fn build_use_case(
    config: &FileConfig,
    scamper_config: ScamperConfig,
) -> Result<RunScamperUseCase<Generator>> {
    let settings = GeminiSettings::from_config(&config.gemini)
        .context("Create a .env file with GEMINI_API_KEY=<your key>")?;
    info!("Using Gemini model {}", settings.model);

    let gemini = GeminiTextGenerator::new(settings)?;
    let generator = RateLimitedGenerator::new(gemini, config.gemini.max_calls_per_minute);

    Ok(RunScamperUseCase::new(Arc::new(generator), scamper_config))
}

/// Copy of `config` safe to print.
fn redacted(config: &FileConfig) -> FileConfig {
    let mut config = config.clone();
    if config.gemini.api_key.is_some() {
        config.gemini.api_key = Some("********".to_string());
    }
    config
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
