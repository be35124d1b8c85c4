//! Field registry: descriptive attributes for each managed field.
//!
//! The registry is built once by its owner and passed by reference to
//! whatever needs it. There is no process-wide instance.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{AdvisorError, AdvisorResult};
use crate::sources::{read_document, DocumentFormat};
use crate::tabular::{self, Column};

const FIELD_COLUMNS: &[Column] = &[
    Column::new("field_id", &["field_id"]),
    Column::new("potato_variety", &["potato_variety"]),
    Column::new("last_spray_date", &["last_spray_date"]),
];

/// One field's record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub field_id: String,
    pub potato_variety: String,
    /// Last fungicide application, `YYYY-MM-DD`.
    pub last_spray_date: NaiveDate,
    /// Any further columns, kept as-is.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl FieldRecord {
    pub fn new(
        field_id: impl Into<String>,
        potato_variety: impl Into<String>,
        last_spray_date: NaiveDate,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            potato_variety: potato_variety.into(),
            last_spray_date,
            attributes: BTreeMap::new(),
        }
    }

    /// Whole days from the last spray to `today`. Negative if the recorded
    /// spray date is in the future.
    pub fn days_since_spray(&self, today: NaiveDate) -> i64 {
        (today - self.last_spray_date).num_days()
    }
}

/// Lookup of field records by id.
#[derive(Clone, Debug, Default)]
pub struct FieldRegistry {
    fields: BTreeMap<String, FieldRecord>,
}

impl FieldRegistry {
    /// Build from records. When an id repeats, the first record wins.
    pub fn from_records(records: impl IntoIterator<Item = FieldRecord>) -> Self {
        let mut fields = BTreeMap::new();
        for record in records {
            fields.entry(record.field_id.clone()).or_insert(record);
        }
        Self { fields }
    }

    /// Read field records from a CSV table or a JSON/YAML list.
    pub fn load(path: &Path) -> AdvisorResult<Self> {
        let records: Vec<FieldRecord> = match DocumentFormat::from_path(path) {
            DocumentFormat::Csv => read_fields_csv(path)?,
            DocumentFormat::Json | DocumentFormat::Yaml => read_document(path)?,
        };
        let registry = Self::from_records(records);
        debug!(path = %path.display(), fields = registry.len(), "field registry loaded");
        Ok(registry)
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldRecord> {
        self.fields.get(field_id)
    }

    pub fn require(&self, field_id: &str) -> AdvisorResult<&FieldRecord> {
        self.get(field_id)
            .ok_or_else(|| AdvisorError::FieldNotFound(field_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

// Extra CSV columns are kept as strings.
fn read_fields_csv(path: &Path) -> AdvisorResult<Vec<FieldRecord>> {
    let (mut reader, headers) = tabular::open(path)?;
    let required = tabular::require_columns(path, &headers, FIELD_COLUMNS)?;
    let (id_at, variety_at, spray_at) = (required[0], required[1], required[2]);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| tabular::csv_error(path, source))?;
        let cell = |at: usize| row.get(at).unwrap_or_default();

        let sprayed = cell(spray_at);
        let last_spray_date = NaiveDate::parse_from_str(sprayed, "%Y-%m-%d").map_err(|err| {
            AdvisorError::InvalidRecord {
                path: path.display().to_string(),
                line: row.position().map_or(0, |pos| pos.line()),
                reason: format!("last_spray_date '{sprayed}': {err}"),
            }
        })?;

        let mut record = FieldRecord::new(cell(id_at), cell(variety_at), last_spray_date);
        for (at, header) in headers.iter().enumerate() {
            if !required.contains(&at) {
                record
                    .attributes
                    .insert(header.to_string(), Value::String(cell(at).to_string()));
            }
        }
        records.push(record);
    }
    Ok(records)
}
