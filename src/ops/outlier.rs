//! Z-score outlier handling.
//!
//! Outliers are present values whose z-score magnitude exceeds the caller's
//! threshold, using the same mean / sample-std convention as the profiler.
//! Dropping removes the affected rows from every column at once so the
//! table never goes out of alignment.

use crate::error::PrepError;
use crate::ops::numeric_values_checked;
use crate::stats;
use crate::table::Table;
use crate::value::Value;
use log::warn;

/// What to do with detected outliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlierMethod {
    /// Remove the whole row from the table.
    Drop,
    /// Clamp the value to `mean ± threshold * std`.
    Cap,
    /// Replace the value with the supplied number, or with the column
    /// median (over all present values) when none is given.
    Impute(Option<f64>),
}

/// Detect and handle outliers in the named numeric column. Returns the
/// number of outliers handled. Zero variance or zero outliers is a reported
/// no-op: `Ok(0)` and a warning.
///
/// # Errors
/// [`PrepError::ColumnNotFound`], [`PrepError::TypeMismatch`] for
/// non-numeric columns.
pub fn handle_outliers(
    table: &mut Table,
    name: &str,
    method: &OutlierMethod,
    z_threshold: f64,
) -> Result<usize, PrepError> {
    let values = numeric_values_checked(table, name)?;
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();

    let (mean, std) = match (stats::mean(&present), stats::sample_std(&present)) {
        (Some(m), Some(s)) if s > 0.0 => (m, s),
        _ => {
            warn!(
                "column '{}' has zero variance, no outliers to handle",
                name
            );
            return Ok(0);
        }
    };

    let outliers = stats::zscore_outliers(&values, z_threshold);
    if outliers.is_empty() {
        warn!(
            "column '{}' has no outliers above |z| = {}",
            name, z_threshold
        );
        return Ok(0);
    }
    let count = outliers.len();

    match method {
        OutlierMethod::Drop => {
            let mut keep = vec![true; values.len()];
            for &i in &outliers {
                keep[i] = false;
            }
            table.retain_rows(&keep);
        }
        OutlierMethod::Cap => {
            let upper = mean + z_threshold * std;
            let lower = mean - z_threshold * std;
            let column = table.column_mut(name).expect("column checked above");
            for &i in &outliers {
                let x = values[i].expect("outlier rows are present");
                let clamped = if x > upper { upper } else { lower };
                column.values_mut()[i] = Value::Number(clamped);
            }
        }
        OutlierMethod::Impute(value) => {
            let fill =
                value.unwrap_or_else(|| stats::median(&present).expect("present values exist"));
            let column = table.column_mut(name).expect("column checked above");
            for &i in &outliers {
                column.values_mut()[i] = Value::Number(fill);
            }
        }
    }
    Ok(count)
}
