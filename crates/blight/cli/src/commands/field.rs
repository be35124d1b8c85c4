//! Field lookup command

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use blight_advisor::{FieldRecord, FieldRegistry};

use crate::config::BlightConfig;
use crate::error::CliResult;
use crate::output::{print_single, OutputFormat};

use super::today_or;

/// Arguments for `blight field`
#[derive(Args)]
pub struct FieldArgs {
    /// Field ID
    pub field_id: String,

    /// Field records file (defaults to the configured path)
    #[arg(long)]
    pub fields: Option<PathBuf>,

    /// Reference date for days since spray (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Serialize)]
struct FieldView<'a> {
    #[serde(flatten)]
    field: &'a FieldRecord,
    days_since_spray: i64,
}

/// Execute the field command
pub fn execute(args: FieldArgs, config: &BlightConfig, format: OutputFormat) -> CliResult<()> {
    let path = args.fields.unwrap_or_else(|| config.paths.fields.clone());
    let registry = FieldRegistry::load(&path)?;
    let field = registry.require(&args.field_id)?;

    print_single(
        &FieldView {
            field,
            days_since_spray: field.days_since_spray(today_or(args.today)),
        },
        format,
    )
}
