//! Decoding `sacct -P` output into rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::{Row, REQUIRED_COLUMNS};
use crate::error::SacctError;
use crate::Result;

/// Decode pipe-delimited accounting text with a header line.
///
/// Fails with [`SacctError::MalformedTable`] when the header is missing or
/// lacks a required column, or when a row has no `JobID`.
pub fn parse_table<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .quoting(false)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SacctError::MalformedTable(
            "no header line in accounting output".to_string(),
        ));
    }
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SacctError::MalformedTable(format!(
                "missing required column '{required}'"
            )));
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: Row = record?;
        if row.job_id.trim().is_empty() {
            return Err(SacctError::MalformedTable(format!(
                "row {} has an empty JobID",
                index + 1
            )));
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), "decoded accounting table");
    Ok(rows)
}

/// Decode accounting text saved to a file.
pub fn read_table_file(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let file = File::open(path.as_ref())?;
    parse_table(file)
}
