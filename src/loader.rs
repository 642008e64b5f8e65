//! CSV sequence loader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SeqBatchError};

/// Load the values of `column` from a CSV file with a header row.
///
/// Values are returned in file order with surrounding whitespace trimmed.
/// Empty cells become empty sequences.
pub fn load_sequences(path: impl AsRef<Path>, column: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SeqBatchError::io(format!("opening sequences: {}", path.display()), e))?;

    read_sequences(file, column, path)
}

/// Read the values of `column` from CSV data.
///
/// `source` only labels errors and log events.
pub fn read_sequences<R: Read>(reader: R, column: &str, source: &Path) -> Result<Vec<String>> {
    let csv_error = |e: csv::Error| SeqBatchError::Csv {
        path: source.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let index = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| SeqBatchError::MissingColumn {
            path: source.to_path_buf(),
            column: column.to_string(),
        })?;

    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        sequences.push(record.get(index).unwrap_or_default().to_string());
    }

    tracing::info!(
        count = sequences.len(),
        column,
        source = %source.display(),
        "loaded sequences"
    );

    Ok(sequences)
}
