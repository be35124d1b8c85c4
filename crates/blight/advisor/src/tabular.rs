//! CSV input: opening a file and checking its header row.

use std::fs::File;
use std::path::Path;

use csv::{Reader, StringRecord};

use crate::error::{AdvisorError, AdvisorResult};

/// A required column and the header names it may appear under.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Column {
    pub const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    fn position(&self, headers: &StringRecord) -> Option<usize> {
        headers
            .iter()
            .position(|header| self.aliases.iter().any(|alias| *alias == header))
    }
}

pub(crate) fn csv_error(path: &Path, source: csv::Error) -> AdvisorError {
    AdvisorError::Csv {
        path: path.display().to_string(),
        source,
    }
}

/// Open a CSV file with a header row. Cells and headers are trimmed.
pub(crate) fn open(path: &Path) -> AdvisorResult<(Reader<File>, StringRecord)> {
    let file = File::open(path).map_err(|source| AdvisorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();
    Ok((reader, headers))
}

/// Positions of `columns` in the header row, in the same order.
///
/// Every absent column is named in the error, not only the first.
pub(crate) fn require_columns(
    path: &Path,
    headers: &StringRecord,
    columns: &[Column],
) -> AdvisorResult<Vec<usize>> {
    let positions: Vec<Option<usize>> = columns.iter().map(|c| c.position(headers)).collect();
    let missing: Vec<String> = columns
        .iter()
        .zip(&positions)
        .filter(|(_, position)| position.is_none())
        .map(|(column, _)| column.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AdvisorError::MissingColumns {
            path: path.display().to_string(),
            columns: missing,
        });
    }
    Ok(positions.into_iter().flatten().collect())
}
