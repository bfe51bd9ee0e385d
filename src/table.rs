//! In-memory table model.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s of equal length.
//! Row order carries no meaning until a split shuffles it. Columns are
//! mutated in place by the transform operations; whole-row removal goes
//! through the table so every column stays aligned.

use crate::error::PrepError;
use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    pub(crate) fn replace_values(&mut self, values: Vec<Value>) {
        self.values = values;
    }

    /// Iterator over present (non-missing) cells.
    pub fn present(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| v.is_present())
    }

    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Count occurrences of each distinct present value, in first-seen
    /// order. Distinctness is by canonical text form, so `1` and `1.0`
    /// coincide while `"A"` and `"a"` stay apart.
    pub fn value_counts(&self) -> Vec<(Value, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(Value, usize)> = Vec::new();
        for v in self.present() {
            let key = v.render().expect("present value renders").into_owned();
            match index.get(&key) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(key, counts.len());
                    counts.push((v.clone(), 1));
                }
            }
        }
        counts
    }

    /// Number of distinct present values.
    pub fn distinct_count(&self) -> usize {
        self.value_counts().len()
    }

    /// Per-row numeric view of the column (`None` where missing or
    /// unparseable).
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.as_number()).collect()
    }

    /// Underlying representation kind of the whole column: `Number` when
    /// every present cell is a number (and at least one is present), `Text`
    /// when every present cell is text, `Missing` when nothing is present.
    /// Mixed columns report `None`.
    pub fn repr_kind(&self) -> Option<ValueKind> {
        let mut kind = None;
        for v in self.present() {
            match kind {
                None => kind = Some(v.kind()),
                Some(k) if k == v.kind() => {}
                Some(_) => return None,
            }
        }
        Some(kind.unwrap_or(ValueKind::Missing))
    }
}

/// An ordered collection of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, validating that all columns share one row count and
    /// that column names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self, PrepError> {
        if let Some(first) = columns.first() {
            let rows = first.len();
            for col in &columns {
                if col.len() != rows {
                    return Err(PrepError::InvalidParameter(format!(
                        "column '{}' has {} rows, expected {}",
                        col.name(),
                        col.len(),
                        rows
                    )));
                }
            }
        }
        let mut seen = HashMap::new();
        for col in &columns {
            if seen.insert(col.name().to_string(), ()).is_some() {
                return Err(PrepError::InvalidParameter(format!(
                    "duplicate column name '{}'",
                    col.name()
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Remove and return the named column, if present.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.column_index(name)?;
        Some(self.columns.remove(idx))
    }

    /// Append a column, preserving the table invariants.
    pub fn push_column(&mut self, column: Column) -> Result<(), PrepError> {
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(PrepError::InvalidParameter(format!(
                "column '{}' has {} rows, expected {}",
                column.name(),
                column.len(),
                self.n_rows()
            )));
        }
        if self.has_column(column.name()) {
            return Err(PrepError::InvalidParameter(format!(
                "duplicate column name '{}'",
                column.name()
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Keep only the rows flagged `true`, across every column at once.
    pub(crate) fn retain_rows(&mut self, keep: &[bool]) {
        for col in &mut self.columns {
            let mut it = keep.iter();
            col.values.retain(|_| *it.next().expect("mask covers all rows"));
        }
    }

    /// New table holding the given rows, in the given order.
    pub(crate) fn select_rows(&self, indices: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                Column::new(
                    c.name(),
                    indices.iter().map(|&i| c.values[i].clone()).collect(),
                )
            })
            .collect();
        Table { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new("a", vec![num(1.0), num(2.0), num(3.0)]),
            Column::new("b", vec![text("x"), Value::Missing, text("y")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_shape() {
        let t = sample_table();
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.n_cols(), 2);
        assert_eq!(t.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_table_rejects_ragged_columns() {
        let result = Table::new(vec![
            Column::new("a", vec![num(1.0)]),
            Column::new("b", vec![num(1.0), num(2.0)]),
        ]);
        assert!(matches!(result, Err(PrepError::InvalidParameter(_))));
    }

    #[test]
    fn test_table_rejects_duplicate_names() {
        let result = Table::new(vec![
            Column::new("a", vec![num(1.0)]),
            Column::new("a", vec![num(2.0)]),
        ]);
        assert!(matches!(result, Err(PrepError::InvalidParameter(_))));
    }

    #[test]
    fn test_column_missing_and_present_counts() {
        let t = sample_table();
        let b = t.column("b").unwrap();
        assert_eq!(b.missing_count(), 1);
        assert_eq!(b.present_count(), 2);
    }

    #[test]
    fn test_value_counts_first_seen_order() {
        let col = Column::new(
            "c",
            vec![text("b"), text("a"), text("b"), Value::Missing, text("a")],
        );
        let counts = col.value_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], (text("b"), 2));
        assert_eq!(counts[1], (text("a"), 2));
    }

    #[test]
    fn test_value_counts_merges_number_forms() {
        let col = Column::new("c", vec![num(1.0), text("1"), num(2.0)]);
        assert_eq!(col.distinct_count(), 2);
    }

    #[test]
    fn test_repr_kind() {
        let t = sample_table();
        assert_eq!(t.column("a").unwrap().repr_kind(), Some(ValueKind::Number));
        assert_eq!(t.column("b").unwrap().repr_kind(), Some(ValueKind::Text));

        let mixed = Column::new("m", vec![num(1.0), text("x")]);
        assert_eq!(mixed.repr_kind(), None);

        let empty = Column::new("e", vec![Value::Missing, Value::Missing]);
        assert_eq!(empty.repr_kind(), Some(ValueKind::Missing));
    }

    #[test]
    fn test_retain_rows_keeps_columns_aligned() {
        let mut t = sample_table();
        t.retain_rows(&[true, false, true]);
        assert_eq!(t.n_rows(), 2);
        for col in t.columns() {
            assert_eq!(col.len(), 2);
        }
        assert_eq!(t.column("a").unwrap().values()[1], num(3.0));
    }

    #[test]
    fn test_select_rows_reorders() {
        let t = sample_table();
        let picked = t.select_rows(&[2, 0]);
        assert_eq!(picked.n_rows(), 2);
        assert_eq!(picked.column("a").unwrap().values()[0], num(3.0));
        assert_eq!(picked.column("a").unwrap().values()[1], num(1.0));
    }

    #[test]
    fn test_remove_and_push_column() {
        let mut t = sample_table();
        let b = t.remove_column("b").unwrap();
        assert_eq!(t.n_cols(), 1);
        t.push_column(b).unwrap();
        assert_eq!(t.names(), vec!["a", "b"]);

        let dup = Column::new("a", vec![num(0.0), num(0.0), num(0.0)]);
        assert!(t.push_column(dup).is_err());
        let short = Column::new("c", vec![num(0.0)]);
        assert!(t.push_column(short).is_err());
    }
}
