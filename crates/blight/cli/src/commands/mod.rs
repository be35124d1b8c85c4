//! CLI command implementations

pub mod assess;
pub mod evaluate;
pub mod field;
pub mod literature;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use blight_advisor::{
    default_rule_book, load_rule_book, FailoverSource, FileWeatherSource, WeatherSource,
};
use blight_types::RuleBook;

use crate::config::BlightConfig;
use crate::error::CliResult;

/// Rule book from the flag, else the configured path.
///
/// With `fallback` set and no file at the configured path, the built-in
/// Hutton parameters are used instead.
pub(crate) fn rule_book(
    explicit: Option<&Path>,
    config: &BlightConfig,
    fallback: bool,
) -> CliResult<RuleBook> {
    if let Some(path) = explicit {
        return Ok(load_rule_book(path)?);
    }
    let configured = &config.paths.rules;
    if fallback && !configured.exists() {
        info!(path = %configured.display(), "no rules file, using built-in Hutton parameters");
        return Ok(default_rule_book());
    }
    Ok(load_rule_book(configured)?)
}

/// File weather source, wrapped in a failover when a backup file is given.
pub(crate) fn weather_source(primary: PathBuf, backup: Option<PathBuf>) -> Box<dyn WeatherSource> {
    let primary: Box<dyn WeatherSource> = Box::new(FileWeatherSource::new(primary));
    match backup {
        Some(backup) => Box::new(FailoverSource::new(
            primary,
            Box::new(FileWeatherSource::new(backup)),
        )),
        None => primary,
    }
}

pub(crate) fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}
