//! Preprocessing session driver.
//!
//! [`Preprocessor`] owns at most one table at a time and fronts the whole
//! pipeline: load, inspect, transform, split, save. It exists so a caller
//! can hold one handle across the session; every operation is a thin
//! delegation to the core modules, plus the [`PrepError::NotLoaded`] check.
//!
//! # Example
//! ```no_run
//! use tabprep::session::Preprocessor;
//! use tabprep::ops::FillMethod;
//!
//! let mut prep = Preprocessor::from_path("data.csv")?;
//! println!("{}", prep.check_csv(Default::default())?);
//! prep.fill_missing("age", &FillMethod::Median)?;
//! prep.standardize("age")?;
//! prep.save_csv("clean.csv", false)?;
//! # Ok::<(), tabprep::PrepError>(())
//! ```

use crate::error::PrepError;
use crate::infer::InferOptions;
use crate::io;
use crate::ops;
use crate::profile::{summarize, ProfileOptions, TableSummary};
use crate::report::{column_report, ColumnReport};
use crate::split::{self, Split};
use crate::table::Table;
use std::path::Path;

/// A session owning an optional in-memory table.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    data: Option<Table>,
}

impl Preprocessor {
    /// Empty session; load a file or set a table to start working.
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Session pre-loaded from a delimited file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let mut session = Self::new();
        session.load_csv(path)?;
        Ok(session)
    }

    /// Load a delimited file, replacing any table already in the session.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<(), PrepError> {
        self.data = Some(io::load_csv(path)?);
        Ok(())
    }

    /// Write the current table out as a delimited file.
    pub fn save_csv(&self, path: impl AsRef<Path>, include_index: bool) -> Result<(), PrepError> {
        io::save_csv(self.table()?, path, include_index)
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Borrow the current table.
    pub fn table(&self) -> Result<&Table, PrepError> {
        self.data.as_ref().ok_or(PrepError::NotLoaded)
    }

    /// Mutably borrow the current table.
    pub fn table_mut(&mut self) -> Result<&mut Table, PrepError> {
        self.data.as_mut().ok_or(PrepError::NotLoaded)
    }

    /// Adopt an existing table, replacing any current one.
    pub fn set_table(&mut self, table: Table) {
        self.data = Some(table);
    }

    /// Drop the current table, returning it if there was one.
    pub fn clear(&mut self) -> Option<Table> {
        self.data.take()
    }

    /// Render the first `n` rows (all when `n` is zero).
    pub fn preview(&self, n: usize) -> Result<String, PrepError> {
        Ok(crate::report::preview(self.table()?, n))
    }

    /// Single-column report: inferred type, missing/distinct counts, top
    /// values, and per-type statistics.
    pub fn check_column(
        &self,
        name: &str,
        infer_options: &InferOptions,
        profile_options: &ProfileOptions,
    ) -> Result<ColumnReport, PrepError> {
        let table = self.table()?;
        let column = table
            .column(name)
            .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))?;
        Ok(column_report(column, infer_options, profile_options))
    }

    /// Whole-table overview.
    pub fn check_csv(&self, profile_options: ProfileOptions) -> Result<TableSummary, PrepError> {
        Ok(summarize(self.table()?, &profile_options))
    }

    pub fn standardize(&mut self, name: &str) -> Result<(), PrepError> {
        ops::standardize(self.table_mut()?, name)
    }

    pub fn minmax_scale(&mut self, name: &str, range: (f64, f64)) -> Result<(), PrepError> {
        ops::minmax_scale(self.table_mut()?, name, range)
    }

    pub fn fill_missing(&mut self, name: &str, method: &ops::FillMethod) -> Result<usize, PrepError> {
        ops::fill_missing(self.table_mut()?, name, method)
    }

    pub fn drop_columns(&mut self, names: &[&str]) -> Result<ops::DropOutcome, PrepError> {
        Ok(ops::drop_columns(self.table_mut()?, names))
    }

    pub fn handle_outliers(
        &mut self,
        name: &str,
        method: &ops::OutlierMethod,
        z_threshold: f64,
    ) -> Result<usize, PrepError> {
        ops::handle_outliers(self.table_mut()?, name, method, z_threshold)
    }

    pub fn encode(&mut self, name: &str, mode: ops::EncodeMode) -> Result<usize, PrepError> {
        ops::encode(self.table_mut()?, name, mode)
    }

    /// Split the current table; the table itself stays in the session
    /// untouched.
    pub fn split(
        &self,
        target: &str,
        train_fraction: f64,
        val_fraction: f64,
        seed: Option<u64>,
    ) -> Result<Split, PrepError> {
        split::split(self.table()?, target, train_fraction, val_fraction, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{EncodeMode, FillMethod};
    use crate::table::Column;
    use crate::value::Value;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn loaded_session() -> Preprocessor {
        let mut session = Preprocessor::new();
        session.set_table(
            Table::new(vec![
                Column::new("age", vec![num(20.0), Value::Missing, num(40.0), num(30.0)]),
                Column::new(
                    "city",
                    vec![text("ank"), text("ist"), text("ank"), text("ist")],
                ),
            ])
            .unwrap(),
        );
        session
    }

    #[test]
    fn test_operations_require_a_loaded_table() {
        let mut session = Preprocessor::new();
        assert!(matches!(session.table(), Err(PrepError::NotLoaded)));
        assert!(matches!(
            session.standardize("x"),
            Err(PrepError::NotLoaded)
        ));
        assert!(matches!(session.preview(5), Err(PrepError::NotLoaded)));
        assert!(matches!(
            session.split("y", 0.7, 0.0, None),
            Err(PrepError::NotLoaded)
        ));
        assert!(matches!(
            session.save_csv("nowhere.csv", false),
            Err(PrepError::NotLoaded)
        ));
    }

    #[test]
    fn test_fill_then_standardize() {
        let mut session = loaded_session();
        let filled = session.fill_missing("age", &FillMethod::Mean).unwrap();
        assert_eq!(filled, 1);
        session.standardize("age").unwrap();

        let values: Vec<f64> = session
            .table()
            .unwrap()
            .column("age")
            .unwrap()
            .numeric_values()
            .into_iter()
            .flatten()
            .collect();
        let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_check_column_reports() {
        let session = loaded_session();
        let report = session
            .check_column("city", &InferOptions::default(), &ProfileOptions::default())
            .unwrap();
        assert_eq!(report.name, "city");
        assert_eq!(report.distinct, 2);

        assert!(matches!(
            session.check_column("nope", &InferOptions::default(), &ProfileOptions::default()),
            Err(PrepError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_check_csv_shape() {
        let session = loaded_session();
        let summary = session.check_csv(ProfileOptions::default()).unwrap();
        assert_eq!(summary.n_rows, 4);
        assert_eq!(summary.n_cols, 2);
    }

    #[test]
    fn test_encode_expands_table() {
        let mut session = loaded_session();
        let k = session.encode("city", EncodeMode::OneHot).unwrap();
        assert_eq!(k, 2);
        let names = session.table().unwrap().names().join(",");
        assert_eq!(names, "age,city_ank,city_ist");
    }

    #[test]
    fn test_clear_releases_table() {
        let mut session = loaded_session();
        assert!(session.is_loaded());
        let table = session.clear().unwrap();
        assert_eq!(table.n_rows(), 4);
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_load_save_roundtrip_through_files() {
        let path = std::env::temp_dir().join("tabprep_session_io.csv");
        std::fs::write(&path, "a,b\n1,x\n2,\n").unwrap();

        let mut session = Preprocessor::from_path(&path).unwrap();
        assert_eq!(session.table().unwrap().n_rows(), 2);

        let out = std::env::temp_dir().join("tabprep_session_out.csv");
        session.fill_missing("b", &FillMethod::Mode).unwrap();
        session.save_csv(&out, false).unwrap();

        let reloaded = Preprocessor::from_path(&out).unwrap();
        assert_eq!(
            reloaded.table().unwrap().column("b").unwrap().values()[1],
            text("x")
        );

        std::fs::remove_file(path).ok();
        std::fs::remove_file(out).ok();
    }
}
