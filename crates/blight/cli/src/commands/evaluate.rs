//! Rule evaluation command

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use blight_engine::evaluate;
use blight_types::EvaluationReport;

use crate::config::BlightConfig;
use crate::error::CliResult;
use crate::output::{print_single, render, OutputFormat};

use super::{rule_book, weather_source};

/// Arguments for `blight evaluate`
#[derive(Args)]
pub struct EvaluateArgs {
    /// Hourly weather records (JSON or YAML)
    #[arg(short, long)]
    pub weather: PathBuf,

    /// Backup weather file, read when the primary cannot be
    #[arg(long)]
    pub backup_weather: Option<PathBuf>,

    /// Rule book (defaults to the configured path)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Rule set to apply (Hutton, Smith, LocalAndes)
    #[arg(short = 's', long)]
    pub rule_set: String,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// The report as written to disk: the engine output plus its summary line.
#[derive(Serialize)]
struct ReportDocument<'a> {
    #[serde(flatten)]
    report: &'a EvaluationReport,
    summary: String,
}

/// Execute the evaluate command
pub fn execute(args: EvaluateArgs, config: &BlightConfig, format: OutputFormat) -> CliResult<()> {
    let book = rule_book(args.rules.as_deref(), config, false)?;
    let source = weather_source(args.weather, args.backup_weather);
    let observations = source.observations()?;

    let report = evaluate(&observations, &book, &args.rule_set)?;
    let summary = report.summary();
    let document = ReportDocument {
        report: &report,
        summary: summary.clone(),
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, render(&document, OutputFormat::Json)?)?;
            info!(path = %path.display(), "report written");
            println!("{summary}");
        }
        None => {
            print_single(&document, format)?;
            eprintln!("{summary}");
        }
    }
    Ok(())
}
