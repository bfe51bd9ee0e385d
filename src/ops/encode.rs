//! Categorical encoding.
//!
//! Label encoding maps each distinct present value to an integer code in
//! sorted order; one-hot encoding replaces the column with one 0/1 column
//! per distinct value. Both only apply to columns that do not already infer
//! as numeric.

use crate::error::PrepError;
use crate::infer::{infer, InferOptions, InferredType};
use crate::ops::require_column;
use crate::table::{Column, Table};
use crate::value::Value;
use log::warn;
use std::collections::HashMap;

/// Sentinel code assigned to missing cells under label encoding.
pub const LABEL_MISSING_CODE: f64 = -1.0;

/// Encoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// One integer code per distinct value, sorted order; missing cells get
    /// [`LABEL_MISSING_CODE`].
    Label,
    /// One `<column>_<value>` 0/1 column per distinct value, appended at
    /// the end of the table; the original column is removed and missing
    /// rows are all-zero.
    OneHot,
}

/// Encode the named column. Returns the number of distinct values encoded.
/// An already numeric column is a reported no-op: `Ok(0)` and a warning.
///
/// # Errors
/// [`PrepError::ColumnNotFound`]; [`PrepError::InvalidParameter`] when a
/// generated one-hot column name collides with an existing column.
pub fn encode(table: &mut Table, name: &str, mode: EncodeMode) -> Result<usize, PrepError> {
    let column = require_column(table, name)?;
    if infer(column, &InferOptions::default()) == InferredType::Numeric {
        warn!("column '{}' is already numeric, nothing to encode", name);
        return Ok(0);
    }

    let mut distinct: Vec<String> = column
        .value_counts()
        .into_iter()
        .map(|(v, _)| v.render().expect("present value renders").into_owned())
        .collect();
    distinct.sort();

    match mode {
        EncodeMode::Label => {
            let codes: HashMap<&str, f64> = distinct
                .iter()
                .enumerate()
                .map(|(i, v)| (v.as_str(), i as f64))
                .collect();
            let column = table.column_mut(name).expect("column checked above");
            let encoded = column
                .values()
                .iter()
                .map(|v| match v.render() {
                    Some(raw) => Value::Number(codes[raw.as_ref()]),
                    None => Value::Number(LABEL_MISSING_CODE),
                })
                .collect();
            column.replace_values(encoded);
        }
        EncodeMode::OneHot => {
            for value in &distinct {
                let new_name = format!("{}_{}", name, value);
                if new_name != name && table.has_column(&new_name) {
                    return Err(PrepError::InvalidParameter(format!(
                        "one-hot column '{}' already exists",
                        new_name
                    )));
                }
            }
            let removed = table.remove_column(name).expect("column checked above");
            for value in &distinct {
                let cells = removed
                    .values()
                    .iter()
                    .map(|v| {
                        let hit = v.render().map(|raw| raw.as_ref() == value).unwrap_or(false);
                        Value::Number(if hit { 1.0 } else { 0.0 })
                    })
                    .collect();
                table.push_column(Column::new(format!("{}_{}", name, value), cells))?;
            }
        }
    }
    Ok(distinct.len())
}
