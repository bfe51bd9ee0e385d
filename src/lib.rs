//! # tabprep
//!
//! An in-memory tabular-data preprocessing library: load a delimited file,
//! infer each column's semantic type, report descriptive statistics, and
//! apply the usual cleaning transforms before handing the data to a model.
//!
//! ## Core Design
//!
//! - **Typed cells, inferred columns**: cells are missing, numeric, or raw
//!   text; a column's semantic type (boolean, datetime, numeric,
//!   categorical, text) is inferred on demand by a fixed-priority rule
//!   cascade and gates which transforms apply.
//! - **Owned, exclusively-mutable table**: the caller holds the [`Table`]
//!   (directly or through a [`session::Preprocessor`]); transforms mutate it
//!   in place and whole-row removal stays aligned across every column.
//! - **Recoverable errors**: misuse aborts the single operation with a
//!   [`PrepError`], never the process; pointless calls are reported no-ops.
//! - **Single-threaded**: no locks, no hidden state, no background work.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabprep::infer::{infer, InferOptions, InferredType};
//! use tabprep::ops;
//! use tabprep::table::{Column, Table};
//! use tabprep::value::Value;
//!
//! let mut table = Table::new(vec![
//!     Column::new("age", vec![
//!         Value::Number(22.0),
//!         Value::Missing,
//!         Value::Number(38.0),
//!     ]),
//! ]).unwrap();
//!
//! let age = table.column("age").unwrap();
//! assert_eq!(infer(age, &InferOptions::default()), InferredType::Numeric);
//!
//! ops::fill_missing(&mut table, "age", &ops::FillMethod::Mean).unwrap();
//! ops::standardize(&mut table, "age").unwrap();
//! ```
//!
//! ## Module Structure
//!
//! - `value` — cell values and representation kinds
//! - `table` — the column/table model and its invariants
//! - `infer` — semantic type inference
//! - `profile` — per-column statistics and table summaries
//! - `stats` — shared numeric helpers (mean, median, sample std, z-scores)
//! - `ops` — in-place transforms (scaling, imputation, outliers, encoding)
//! - `split` — seeded train/validation/test partitioning
//! - `io` — delimited-file loading with encoding fallback, and saving
//! - `report` — human-readable rendering of summaries and reports
//! - `session` — the `Preprocessor` driver owning one table at a time

pub mod error;
pub mod infer;
pub mod io;
pub mod ops;
pub mod profile;
pub mod report;
pub mod session;
pub mod split;
pub mod stats;
pub mod table;
pub mod value;

/// Re-export of the types most callers touch.
pub use error::PrepError;
pub use infer::{InferOptions, InferredType};
pub use profile::{ColumnStats, ProfileOptions, TableSummary};
pub use session::Preprocessor;
pub use split::{Split, TablePair};
pub use table::{Column, Table};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{EncodeMode, FillMethod, OutlierMethod};
    use crate::split;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    /// A small end-to-end pass over one table: impute, outlier-check,
    /// scale, encode, split.
    #[test]
    fn test_pipeline_end_to_end() {
        let n = 40;
        let ages: Vec<Value> = (0..n)
            .map(|i| {
                if i == 5 {
                    Value::Missing
                } else {
                    num(20.0 + (i % 10) as f64)
                }
            })
            .collect();
        let cities: Vec<Value> = (0..n)
            .map(|i| text(if i % 2 == 0 { "ank" } else { "ist" }))
            .collect();
        let labels: Vec<Value> = (0..n).map(|i| num((i % 2) as f64)).collect();

        let mut table = Table::new(vec![
            Column::new("age", ages),
            Column::new("city", cities),
            Column::new("label", labels),
        ])
        .unwrap();

        let filled = ops::fill_missing(&mut table, "age", &FillMethod::Median).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(table.column("age").unwrap().missing_count(), 0);

        let handled = ops::handle_outliers(&mut table, "age", &OutlierMethod::Drop, 3.0).unwrap();
        assert_eq!(handled, 0); // nothing extreme in this data

        ops::minmax_scale(&mut table, "age", (0.0, 1.0)).unwrap();
        let k = ops::encode(&mut table, "city", EncodeMode::OneHot).unwrap();
        assert_eq!(k, 2);
        assert_eq!(table.n_cols(), 4);

        match split::split(&table, "label", 0.5, 0.25, Some(42)).unwrap() {
            Split::TrainValTest { train, val, test } => {
                assert_eq!(train.x.n_rows(), 20);
                assert_eq!(val.x.n_rows(), 10);
                assert_eq!(test.x.n_rows(), 10);
                assert_eq!(train.x.n_cols(), 3);
            }
            _ => panic!("expected three-way split"),
        }
    }
}
