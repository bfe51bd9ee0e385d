//! Missing-value imputation.
//!
//! Fills every missing cell of one column with a value derived from the
//! column itself (mean, median, first mode) or supplied by the caller.

use crate::error::PrepError;
use crate::ops::{numeric_values_checked, require_column};
use crate::stats;
use crate::table::Table;
use crate::value::Value;
use log::warn;

/// Strategy for filling missing cells.
#[derive(Debug, Clone, PartialEq)]
pub enum FillMethod {
    /// Mean of the present values; numeric columns only.
    Mean,
    /// Median of the present values; numeric columns only.
    Median,
    /// Most frequent present value, first-seen order on ties; any type.
    Mode,
    /// A caller-supplied value; any type.
    Constant(Value),
}

/// Fill the missing cells of the named column and return how many were
/// filled. A column with nothing missing is a reported no-op: `Ok(0)` and a
/// warning.
///
/// # Errors
/// [`PrepError::ColumnNotFound`]; [`PrepError::TypeMismatch`] for
/// `Mean`/`Median` on non-numeric columns; [`PrepError::InvalidParameter`]
/// for a missing constant or a `Mode` fill with no present values.
pub fn fill_missing(table: &mut Table, name: &str, method: &FillMethod) -> Result<usize, PrepError> {
    let column = require_column(table, name)?;
    if column.missing_count() == 0 {
        warn!("column '{}' has no missing values, nothing to fill", name);
        return Ok(0);
    }

    let fill = match method {
        FillMethod::Mean => {
            let present: Vec<f64> = numeric_values_checked(table, name)?
                .into_iter()
                .flatten()
                .collect();
            Value::Number(stats::mean(&present).expect("numeric column has present values"))
        }
        FillMethod::Median => {
            let present: Vec<f64> = numeric_values_checked(table, name)?
                .into_iter()
                .flatten()
                .collect();
            Value::Number(stats::median(&present).expect("numeric column has present values"))
        }
        FillMethod::Mode => {
            let counts = column.value_counts();
            let mut mode = None;
            let mut best = 0;
            for (v, count) in &counts {
                if *count > best {
                    best = *count;
                    mode = Some(v.clone());
                }
            }
            mode.ok_or_else(|| {
                PrepError::InvalidParameter(format!(
                    "column '{}' has no present values to take a mode from",
                    name
                ))
            })?
        }
        FillMethod::Constant(value) => {
            if value.is_missing() {
                return Err(PrepError::InvalidParameter(
                    "constant fill requires a value".to_string(),
                ));
            }
            value.clone()
        }
    };

    let column = table.column_mut(name).expect("column checked above");
    let mut filled = 0;
    for cell in column.values_mut() {
        if cell.is_missing() {
            *cell = fill.clone();
            filled += 1;
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn one_column(values: Vec<Value>) -> Table {
        Table::new(vec![Column::new("x", values)]).unwrap()
    }

    #[test]
    fn test_fill_mean() {
        let mut table = one_column(vec![num(1.0), Value::Missing, num(3.0)]);
        let filled = fill_missing(&mut table, "x", &FillMethod::Mean).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(table.column("x").unwrap().values()[1], num(2.0));
    }

    #[test]
    fn test_fill_median() {
        let mut table = one_column(vec![num(1.0), num(2.0), num(10.0), Value::Missing]);
        fill_missing(&mut table, "x", &FillMethod::Median).unwrap();
        assert_eq!(table.column("x").unwrap().values()[3], num(2.0));
    }

    #[test]
    fn test_fill_mean_rejects_text_column() {
        let mut table = one_column(vec![text("a"), Value::Missing, text("b")]);
        assert!(matches!(
            fill_missing(&mut table, "x", &FillMethod::Mean),
            Err(PrepError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_fill_mode_works_for_text() {
        let mut table = one_column(vec![
            text("cat"),
            text("dog"),
            text("cat"),
            Value::Missing,
        ]);
        let filled = fill_missing(&mut table, "x", &FillMethod::Mode).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(table.column("x").unwrap().values()[3], text("cat"));
    }

    #[test]
    fn test_fill_mode_tie_takes_first_seen() {
        let mut table = one_column(vec![text("b"), text("a"), text("a"), text("b"), Value::Missing]);
        fill_missing(&mut table, "x", &FillMethod::Mode).unwrap();
        assert_eq!(table.column("x").unwrap().values()[4], text("b"));
    }

    #[test]
    fn test_fill_constant_any_type() {
        let mut table = one_column(vec![text("a"), Value::Missing]);
        fill_missing(&mut table, "x", &FillMethod::Constant(text("unknown"))).unwrap();
        assert_eq!(table.column("x").unwrap().values()[1], text("unknown"));
    }

    #[test]
    fn test_fill_constant_requires_value() {
        let mut table = one_column(vec![text("a"), Value::Missing]);
        assert!(matches!(
            fill_missing(&mut table, "x", &FillMethod::Constant(Value::Missing)),
            Err(PrepError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fill_nothing_missing_is_reported_noop() {
        let mut table = one_column(vec![num(1.0), num(2.0)]);
        let before = table.clone();
        let filled = fill_missing(&mut table, "x", &FillMethod::Mean).unwrap();
        assert_eq!(filled, 0);
        assert_eq!(table, before);
    }

    #[test]
    fn test_fill_missing_column_not_found() {
        let mut table = one_column(vec![num(1.0)]);
        assert!(matches!(
            fill_missing(&mut table, "nope", &FillMethod::Mode),
            Err(PrepError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_fill_mode_all_missing_is_invalid() {
        let mut table = one_column(vec![Value::Missing, Value::Missing]);
        assert!(matches!(
            fill_missing(&mut table, "x", &FillMethod::Mode),
            Err(PrepError::InvalidParameter(_))
        ));
    }
}
