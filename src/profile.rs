//! Per-column statistics and whole-table summaries.
//!
//! [`profile`] computes a type-appropriate statistics snapshot for one
//! column; [`summarize`] gives the whole-table overview. Both are pure
//! reads: snapshots are computed fresh per request and never cached.

use crate::infer::{parse_datetime_column, InferredType};
use crate::stats;
use crate::table::{Column, Table};
use crate::value::ValueKind;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Configuration for profiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileOptions {
    /// Z-score magnitude above which a numeric value counts as an outlier.
    pub z_threshold: f64,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self { z_threshold: 3.0 }
    }
}

/// Type-dependent statistics snapshot for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnStats {
    Numeric {
        mean: f64,
        median: f64,
        /// Sample standard deviation (ddof = 1); absent with fewer than two
        /// values.
        std: Option<f64>,
        min: f64,
        max: f64,
        outliers: usize,
    },
    Text {
        /// Character-length statistics over present values only.
        len_mean: f64,
        len_min: usize,
        len_max: usize,
    },
    Datetime {
        earliest: NaiveDateTime,
        latest: NaiveDateTime,
        /// Whole elapsed days between earliest and latest.
        span_days: i64,
        /// Most frequent parsed value; first-seen order breaks ties.
        mode: NaiveDateTime,
    },
    Boolean {
        true_count: usize,
        false_count: usize,
        /// Percentages of the total column length, so missing cells lower
        /// both numbers.
        true_pct: f64,
        false_pct: f64,
    },
    Categorical {
        distinct: usize,
        /// Most frequent value; first-seen order breaks ties.
        mode: String,
        /// Up to ten (value, percent-of-present) pairs, most frequent first.
        top: Vec<(String, f64)>,
    },
    /// Diagnostic breakdown by underlying representation kind, for columns
    /// that fit no other arm.
    Mixed {
        missing: usize,
        numbers: usize,
        texts: usize,
    },
}

/// Compute the statistics snapshot appropriate for the inferred type.
///
/// Columns whose content does not actually support the requested arm (for
/// example a hand-labelled numeric column with no parseable values) degrade
/// to the [`ColumnStats::Mixed`] breakdown instead of failing.
pub fn profile(column: &Column, inferred: InferredType, options: &ProfileOptions) -> ColumnStats {
    if column.present_count() == 0 {
        return mixed_breakdown(column);
    }
    match inferred {
        InferredType::Numeric => numeric_stats(column, options),
        InferredType::Text => text_stats(column),
        InferredType::Datetime => datetime_stats(column),
        InferredType::Boolean => boolean_stats(column),
        InferredType::Categorical => categorical_stats(column),
        InferredType::Mixed => mixed_breakdown(column),
    }
}

fn numeric_stats(column: &Column, options: &ProfileOptions) -> ColumnStats {
    let values = column.numeric_values();
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if present.is_empty() {
        return mixed_breakdown(column);
    }
    let mean = stats::mean(&present).expect("non-empty");
    let median = stats::median(&present).expect("non-empty");
    let std = stats::sample_std(&present);
    let min = present.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let outliers = stats::zscore_outliers(&values, options.z_threshold).len();
    ColumnStats::Numeric {
        mean,
        median,
        std,
        min,
        max,
        outliers,
    }
}

fn text_stats(column: &Column) -> ColumnStats {
    let lengths: Vec<usize> = column
        .present()
        .map(|v| v.render().expect("present value renders").chars().count())
        .collect();
    let len_mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    ColumnStats::Text {
        len_mean,
        len_min: *lengths.iter().min().expect("non-empty"),
        len_max: *lengths.iter().max().expect("non-empty"),
    }
}

fn datetime_stats(column: &Column) -> ColumnStats {
    let parsed = match parse_datetime_column(column) {
        Some(parsed) => parsed,
        None => return mixed_breakdown(column),
    };
    let earliest = *parsed.iter().min().expect("non-empty");
    let latest = *parsed.iter().max().expect("non-empty");
    let span_days = (latest - earliest).num_days();

    // Mode with first-seen tie-break: only a strictly higher count
    // displaces the current candidate.
    let mut seen: Vec<(NaiveDateTime, usize)> = Vec::new();
    for dt in &parsed {
        match seen.iter_mut().find(|(v, _)| v == dt) {
            Some((_, count)) => *count += 1,
            None => seen.push((*dt, 1)),
        }
    }
    let mut mode = seen[0].0;
    let mut best = 0;
    for (v, count) in &seen {
        if *count > best {
            best = *count;
            mode = *v;
        }
    }

    ColumnStats::Datetime {
        earliest,
        latest,
        span_days,
        mode,
    }
}

fn boolean_stats(column: &Column) -> ColumnStats {
    let total = column.len();
    let true_count = column
        .present()
        .filter(|v| {
            let token = v.token().expect("present value has a token");
            matches!(token.as_str(), "true" | "1" | "yes")
        })
        .count();
    let false_count = column.present_count() - true_count;
    ColumnStats::Boolean {
        true_count,
        false_count,
        true_pct: 100.0 * true_count as f64 / total as f64,
        false_pct: 100.0 * false_count as f64 / total as f64,
    }
}

fn categorical_stats(column: &Column) -> ColumnStats {
    let counts = column.value_counts();
    let present = column.present_count() as f64;
    // First-seen tie-break: only a strictly higher count displaces the
    // current candidate.
    let mut mode = String::new();
    let mut best = 0;
    for (v, count) in &counts {
        if *count > best {
            best = *count;
            mode = v.render().expect("present value renders").into_owned();
        }
    }

    let distinct = counts.len();
    let mut ranked = counts;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let top = ranked
        .iter()
        .take(10)
        .map(|(v, count)| {
            (
                v.render().expect("present value renders").into_owned(),
                100.0 * *count as f64 / present,
            )
        })
        .collect();

    ColumnStats::Categorical {
        distinct,
        mode,
        top,
    }
}

fn mixed_breakdown(column: &Column) -> ColumnStats {
    let mut missing = 0;
    let mut numbers = 0;
    let mut texts = 0;
    for v in column.values() {
        match v.kind() {
            ValueKind::Missing => missing += 1,
            ValueKind::Number => numbers += 1,
            ValueKind::Text => texts += 1,
        }
    }
    ColumnStats::Mixed {
        missing,
        numbers,
        texts,
    }
}

/// The most frequent raw values of a column, missing cells included as a
/// `<missing>` entry. Most frequent first; ties keep first-seen order.
pub fn top_values(column: &Column, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = column
        .value_counts()
        .into_iter()
        .map(|(v, count)| (v.render().expect("present value renders").into_owned(), count))
        .collect();
    let missing = column.missing_count();
    if missing > 0 {
        entries.push(("<missing>".to_string(), missing));
    }
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// One line of the whole-table overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBrief {
    pub name: String,
    /// Underlying representation label (number / text / mixed / empty), not
    /// the inferred semantic type.
    pub dtype: String,
    pub missing: usize,
    pub missing_pct: f64,
    pub distinct: usize,
    pub distinct_pct: f64,
    /// Z-score outlier count; only reported for number-representation
    /// columns.
    pub outliers: Option<usize>,
}

/// Whole-table overview: shape plus one brief per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnBrief>,
}

/// Summarize every column of the table.
pub fn summarize(table: &Table, options: &ProfileOptions) -> TableSummary {
    let n_rows = table.n_rows();
    let columns = table
        .columns()
        .iter()
        .map(|col| {
            let missing = col.missing_count();
            let distinct = col.distinct_count();
            let (dtype, outliers) = match col.repr_kind() {
                Some(ValueKind::Number) => (
                    "number",
                    Some(stats::zscore_outliers(&col.numeric_values(), options.z_threshold).len()),
                ),
                Some(ValueKind::Text) => ("text", None),
                Some(ValueKind::Missing) => ("empty", None),
                None => ("mixed", None),
            };
            let pct = |count: usize| {
                if n_rows == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / n_rows as f64
                }
            };
            ColumnBrief {
                name: col.name().to_string(),
                dtype: dtype.to_string(),
                missing,
                missing_pct: pct(missing),
                distinct,
                distinct_pct: pct(distinct),
                outliers,
            }
        })
        .collect();
    TableSummary {
        n_rows,
        n_cols: table.n_cols(),
        columns,
    }
}
