//! Blight CLI - late-blight risk from field weather
//!
//! This CLI lets agronomists:
//! - Evaluate a forecasting rule (Hutton, Smith, LocalAndes) against hourly weather
//! - Look up field records and spray history
//! - Search the reference literature
//! - Run the full advisory chain for one field

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{assess, evaluate, field, literature};
use config::BlightConfig;
use error::CliResult;

/// Blight CLI application
#[derive(Parser)]
#[command(name = "blight")]
#[command(about = "Late-blight rule engine and field advisor", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "BLIGHT_CONFIG")]
    config: Option<String>,

    /// Output format (json, yaml)
    #[arg(short, long, default_value = "json")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a rule set against a weather file
    #[command(alias = "eval")]
    Evaluate(evaluate::EvaluateArgs),

    /// Show a field record and days since its last spray
    Field(field::FieldArgs),

    /// Search the reference literature
    Literature(literature::LiteratureArgs),

    /// Run the full advisory chain for one field
    Assess(assess::AssessArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Load config
    let config = BlightConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    // Execute command
    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args, &config, cli.output),
        Commands::Field(args) => field::execute(args, &config, cli.output),
        Commands::Literature(args) => literature::execute(args, &config, cli.output),
        Commands::Assess(args) => assess::execute(args, &config, cli.output),
    }
}
