//! Literature search command

use std::path::PathBuf;

use clap::Args;

use blight_advisor::LiteratureIndex;

use crate::config::BlightConfig;
use crate::error::CliResult;
use crate::output::{print_single, OutputFormat};

/// Arguments for `blight literature`
#[derive(Args)]
pub struct LiteratureArgs {
    /// Text to look for, matched case-insensitively. Empty lists every paragraph
    pub query: String,

    /// Directory of `.txt` documents (defaults to the configured path)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Execute the literature command
pub fn execute(args: LiteratureArgs, config: &BlightConfig, format: OutputFormat) -> CliResult<()> {
    let dir = args.dir.unwrap_or_else(|| config.paths.literature.clone());
    let index = LiteratureIndex::load(&dir)?;
    print_single(&index.search(&args.query), format)
}
