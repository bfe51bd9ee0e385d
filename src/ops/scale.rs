//! Numeric column scaling.
//!
//! [`standardize`] rewrites a column as z-scores; [`minmax_scale`] maps it
//! linearly onto a target range. Both require the column to infer as
//! numeric and to have non-degenerate spread, and both leave missing cells
//! missing.

use crate::error::PrepError;
use crate::ops::numeric_values_checked;
use crate::stats;
use crate::table::Table;
use crate::value::Value;

/// Replace the column with `(x - mean) / std`, using the sample standard
/// deviation.
///
/// # Errors
/// [`PrepError::ColumnNotFound`], [`PrepError::TypeMismatch`] for
/// non-numeric columns, [`PrepError::DegenerateColumn`] when the standard
/// deviation is zero or undefined.
pub fn standardize(table: &mut Table, name: &str) -> Result<(), PrepError> {
    let values = numeric_values_checked(table, name)?;
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let mean = stats::mean(&present).expect("numeric column has present values");
    let std = match stats::sample_std(&present) {
        Some(s) if s != 0.0 => s,
        _ => {
            return Err(PrepError::DegenerateColumn {
                column: name.to_string(),
                reason: "standard deviation is 0".to_string(),
            });
        }
    };

    write_back(table, name, &values, |x| (x - mean) / std);
    Ok(())
}

/// Replace the column with `lo + (x - min) / (max - min) * (hi - lo)`.
///
/// # Errors
/// [`PrepError::InvalidParameter`] for an empty target range,
/// [`PrepError::ColumnNotFound`], [`PrepError::TypeMismatch`],
/// [`PrepError::DegenerateColumn`] when all values are equal.
pub fn minmax_scale(table: &mut Table, name: &str, range: (f64, f64)) -> Result<(), PrepError> {
    let (lo, hi) = range;
    if !(lo < hi) {
        return Err(PrepError::InvalidParameter(format!(
            "min-max range must satisfy lo < hi, got ({}, {})",
            lo, hi
        )));
    }

    let values = numeric_values_checked(table, name)?;
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let min = present.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return Err(PrepError::DegenerateColumn {
            column: name.to_string(),
            reason: "all values are equal".to_string(),
        });
    }

    write_back(table, name, &values, |x| {
        (x - min) / (max - min) * (hi - lo) + lo
    });
    Ok(())
}

fn write_back(table: &mut Table, name: &str, values: &[Option<f64>], f: impl Fn(f64) -> f64) {
    let column = table.column_mut(name).expect("column checked above");
    let scaled = values
        .iter()
        .map(|v| match v {
            Some(x) => Value::Number(f(*x)),
            None => Value::Missing,
        })
        .collect();
    column.replace_values(scaled);
}
