//! Delimited file loading and saving.
//!
//! The loader reads the file once, then walks a fixed encoding fallback
//! list. A missing file fails immediately without consulting the list; a
//! decode error or a malformed parse under one encoding silently advances
//! to the next; running out of encodings reports
//! [`PrepError::DecodeExhausted`].

use crate::error::PrepError;
use crate::table::{Column, Table};
use crate::value::Value;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252, WINDOWS_1254};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Encodings tried in order. Windows-1252 covers the latin-1 range;
/// Windows-1254 is its Turkish variant.
const FALLBACK_ENCODINGS: [&Encoding; 3] = [UTF_8, WINDOWS_1252, WINDOWS_1254];

/// Load a delimited file into a table.
///
/// Cell conversion: empty fields and NA tokens become missing, fields that
/// parse as floats become numbers, everything else stays text.
///
/// # Errors
/// [`PrepError::FileNotFound`] when the path does not exist,
/// [`PrepError::Io`] for other read failures, [`PrepError::DecodeExhausted`]
/// when no encoding in the fallback list yields a well-formed file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table, PrepError> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(PrepError::FileNotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    for encoding in FALLBACK_ENCODINGS {
        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            debug!("{}: decode failed as {}", path.display(), encoding.name());
            continue;
        }
        match parse_csv(&text) {
            Ok(table) => {
                debug!(
                    "{}: loaded {} rows x {} columns as {}",
                    path.display(),
                    table.n_rows(),
                    table.n_cols(),
                    encoding.name()
                );
                return Ok(table);
            }
            Err(err) => {
                debug!(
                    "{}: parse failed as {}: {}",
                    path.display(),
                    encoding.name(),
                    err
                );
            }
        }
    }
    Err(PrepError::DecodeExhausted(path.display().to_string()))
}

fn parse_csv(text: &str) -> Result<Table, PrepError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(Value::from_field(field));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Table::new(columns)
}

/// Write the table as a delimited file with a header row.
///
/// `include_index` prepends a numeric row-index column (with an empty
/// header); the default caller behavior is to leave it out. Missing cells
/// serialize as empty fields.
pub fn save_csv(
    table: &Table,
    path: impl AsRef<Path>,
    include_index: bool,
) -> Result<(), PrepError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut header: Vec<String> = Vec::new();
    if include_index {
        header.push(String::new());
    }
    header.extend(table.names().iter().map(|n| n.to_string()));
    writer.write_record(&header)?;

    for row in 0..table.n_rows() {
        let mut record: Vec<String> = Vec::new();
        if include_index {
            record.push(row.to_string());
        }
        for col in table.columns() {
            record.push(
                col.values()[row]
                    .render()
                    .map(|c| c.into_owned())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }
    writer.flush().map_err(PrepError::from)?;
    Ok(())
}
