//! In-place cleaning transforms.
//!
//! Every operation validates its preconditions, then either mutates the
//! table in place or returns a [`PrepError`] without touching it. Ordinary
//! misuse is never fatal; conditions that make an operation pointless (no
//! missing values to fill, no outliers to handle, an already numeric column
//! handed to the encoder) are reported no-ops: the call returns `Ok` with a
//! zero outcome and logs a warning.
//!
//! Numeric gating goes through the inferred type, so a numeric column
//! stored as text is scaled like any other; its cells are parsed and
//! written back as numbers.
//!
//! # Available transforms
//!
//! - [`standardize`] / [`minmax_scale`] — numeric scaling
//! - [`fill_missing`] — missing-value imputation
//! - [`handle_outliers`] — z-score outlier drop / cap / impute
//! - [`encode`] — label and one-hot categorical encoding
//! - [`drop_columns`] — column removal with partial success

pub mod columns;
pub mod encode;
pub mod impute;
pub mod outlier;
pub mod scale;

pub use columns::{drop_columns, DropOutcome};
pub use encode::{encode, EncodeMode, LABEL_MISSING_CODE};
pub use impute::{fill_missing, FillMethod};
pub use outlier::{handle_outliers, OutlierMethod};
pub use scale::{minmax_scale, standardize};

use crate::error::PrepError;
use crate::infer::{infer, InferOptions, InferredType};
use crate::table::{Column, Table};

/// Look up a column or fail with [`PrepError::ColumnNotFound`].
pub(crate) fn require_column<'a>(table: &'a Table, name: &str) -> Result<&'a Column, PrepError> {
    table
        .column(name)
        .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))
}

/// Gate a numeric operation: the column must exist and infer as numeric.
/// Returns the per-row numeric view on success.
pub(crate) fn numeric_values_checked(
    table: &Table,
    name: &str,
) -> Result<Vec<Option<f64>>, PrepError> {
    let column = require_column(table, name)?;
    if infer(column, &InferOptions::default()) != InferredType::Numeric {
        return Err(PrepError::TypeMismatch {
            column: name.to_string(),
            expected: "numeric",
        });
    }
    Ok(column.numeric_values())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_require_column_missing() {
        let table = Table::new(vec![Column::new("a", vec![Value::Number(1.0)])]).unwrap();
        assert!(matches!(
            require_column(&table, "b"),
            Err(PrepError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_numeric_gate_rejects_text() {
        let table = Table::new(vec![Column::new(
            "t",
            vec![
                Value::Text("x".to_string()),
                Value::Text("y".to_string()),
            ],
        )])
        .unwrap();
        assert!(matches!(
            numeric_values_checked(&table, "t"),
            Err(PrepError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_numeric_gate_accepts_numeric_text() {
        let table = Table::new(vec![Column::new(
            "n",
            vec![
                Value::Text("1.5".to_string()),
                Value::Missing,
                Value::Text("2".to_string()),
            ],
        )])
        .unwrap();
        let values = numeric_values_checked(&table, "n").unwrap();
        assert_eq!(values, vec![Some(1.5), None, Some(2.0)]);
    }
}
