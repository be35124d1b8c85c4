//! Field assessment command

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use blight_advisor::{Advisor, AssessmentRequest, FieldRegistry, LiteratureIndex};

use crate::config::BlightConfig;
use crate::error::CliResult;
use crate::output::{print_single, OutputFormat};

use super::{rule_book, today_or, weather_source};

/// Arguments for `blight assess`
#[derive(Args)]
pub struct AssessArgs {
    /// Field ID
    #[arg(short, long)]
    pub field: String,

    /// Diagnosis label from leaf inspection, e.g. late_blight
    #[arg(short, long)]
    pub diagnosis: String,

    /// Hourly weather records (JSON or YAML)
    #[arg(short, long)]
    pub weather: PathBuf,

    /// Backup weather file, read when the primary cannot be
    #[arg(long)]
    pub backup_weather: Option<PathBuf>,

    /// Rule book (defaults to the configured path, then built-in Hutton)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Rule set to apply
    #[arg(short = 's', long, default_value = "Hutton")]
    pub rule_set: String,

    /// Field records file (defaults to the configured path)
    #[arg(long)]
    pub fields: Option<PathBuf>,

    /// Literature directory (defaults to the configured path)
    #[arg(long)]
    pub literature: Option<PathBuf>,

    /// Reference date for days since spray (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Execute the assess command
pub fn execute(args: AssessArgs, config: &BlightConfig, format: OutputFormat) -> CliResult<()> {
    let fields_path = args.fields.unwrap_or_else(|| config.paths.fields.clone());
    let literature_dir = args
        .literature
        .unwrap_or_else(|| config.paths.literature.clone());

    let advisor = Advisor::new(
        FieldRegistry::load(&fields_path)?,
        LiteratureIndex::load(&literature_dir)?,
        rule_book(args.rules.as_deref(), config, true)?,
    );
    let source = weather_source(args.weather, args.backup_weather);

    let request = AssessmentRequest {
        field_id: args.field,
        diagnosis: args.diagnosis,
        rule_set: args.rule_set,
        today: today_or(args.today),
    };
    let assessment = advisor.assess(&request, source.as_ref())?;
    info!(
        field = %request.field_id,
        urgency = ?assessment.recommendation.urgency,
        "assessment ready"
    );

    print_single(&assessment, format)
}
