//! Weather and rule-book inputs read from disk.
//!
//! The file extension picks the encoding: `.csv`, `.yaml`/`.yml`, anything
//! else JSON. A weather file holds a list of observation records; a rule book
//! maps rule names to their parameters and is never CSV.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use blight_types::{RawObservation, RuleBook};

use crate::error::{AdvisorError, AdvisorResult};
use crate::tabular::{self, Column};

/// Weather CSV columns. The long names are accepted as well.
const WEATHER_COLUMNS: &[Column] = &[
    Column::new("timestamp", &["timestamp"]),
    Column::new("temp_c", &["temp_c", "temperature_c"]),
    Column::new("rh", &["rh", "relative_humidity"]),
];

/// On-disk document encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Csv,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("csv") => DocumentFormat::Csv,
            _ => DocumentFormat::Json,
        }
    }
}

/// Read and decode a JSON or YAML document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> AdvisorResult<T> {
    let display = path.display().to_string();
    let format = DocumentFormat::from_path(path);
    if format == DocumentFormat::Csv {
        return Err(AdvisorError::UnsupportedFormat {
            path: display,
            format: "CSV",
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| AdvisorError::Io {
        path: display.clone(),
        source,
    })?;
    if format == DocumentFormat::Yaml {
        serde_yaml::from_str(&contents).map_err(|source| AdvisorError::Yaml { path: display, source })
    } else {
        serde_json::from_str(&contents).map_err(|source| AdvisorError::Json { path: display, source })
    }
}

/// Load a list of hourly observation records.
///
/// A CSV file must carry `timestamp`, `temp_c` and `rh` columns; any that are
/// absent are named in the error.
pub fn load_observations(path: &Path) -> AdvisorResult<Vec<RawObservation>> {
    let records = match DocumentFormat::from_path(path) {
        DocumentFormat::Csv => read_weather_csv(path)?,
        DocumentFormat::Json | DocumentFormat::Yaml => read_document(path)?,
    };
    debug!(path = %path.display(), records = records.len(), "weather records loaded");
    Ok(records)
}

fn read_weather_csv(path: &Path) -> AdvisorResult<Vec<RawObservation>> {
    let (mut reader, headers) = tabular::open(path)?;
    tabular::require_columns(path, &headers, WEATHER_COLUMNS)?;
    reader
        .deserialize()
        .map(|row| row.map_err(|source| tabular::csv_error(path, source)))
        .collect()
}

/// Load the rules document.
pub fn load_rule_book(path: &Path) -> AdvisorResult<RuleBook> {
    let book: RuleBook = read_document(path)?;
    debug!(
        path = %path.display(),
        sections = book.sections().count(),
        "rule book loaded"
    );
    Ok(book)
}

// ── Weather sources ─────────────────────────────────────────────────────

/// Anything that can hand over a batch of hourly observations.
pub trait WeatherSource {
    fn name(&self) -> &str;

    fn observations(&self) -> AdvisorResult<Vec<RawObservation>>;
}

/// Observations read from a JSON or YAML file on every call.
#[derive(Clone, Debug)]
pub struct FileWeatherSource {
    path: PathBuf,
    name: String,
}

impl FileWeatherSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeatherSource for FileWeatherSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> AdvisorResult<Vec<RawObservation>> {
        load_observations(&self.path)
    }
}

/// A fixed set of observations held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryWeatherSource {
    name: String,
    records: Vec<RawObservation>,
}

impl InMemoryWeatherSource {
    pub fn new(name: impl Into<String>, records: Vec<RawObservation>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl WeatherSource for InMemoryWeatherSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> AdvisorResult<Vec<RawObservation>> {
        Ok(self.records.clone())
    }
}

/// Tries the primary source and falls back to the backup if it fails.
///
/// An empty batch from the primary is a success, not a failure. When both
/// fail, the backup's error is returned.
pub struct FailoverSource {
    name: String,
    primary: Box<dyn WeatherSource>,
    backup: Box<dyn WeatherSource>,
}

impl FailoverSource {
    pub fn new(primary: Box<dyn WeatherSource>, backup: Box<dyn WeatherSource>) -> Self {
        let name = format!("{} (backup: {})", primary.name(), backup.name());
        Self {
            name,
            primary,
            backup,
        }
    }
}

impl WeatherSource for FailoverSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> AdvisorResult<Vec<RawObservation>> {
        match self.primary.observations() {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    primary = self.primary.name(),
                    backup = self.backup.name(),
                    error = %err,
                    "primary weather source failed, trying backup"
                );
                self.backup.observations()
            }
        }
    }
}
