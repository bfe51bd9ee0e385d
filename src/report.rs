//! Human-readable report rendering.
//!
//! Everything here is presentation: the data comes from [`crate::infer`]
//! and [`crate::profile`], and the text is meant for a terminal, not for
//! machine parsing.

use crate::infer::{infer, InferOptions, InferredType};
use crate::profile::{profile, summarize, top_values, ColumnStats, ProfileOptions, TableSummary};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the single-column report shows: inference result, missing and
/// distinct counts, the most frequent raw values, and the type-appropriate
/// statistics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    pub inferred: InferredType,
    pub missing: usize,
    pub missing_pct: f64,
    pub distinct: usize,
    pub distinct_pct: f64,
    pub top_values: Vec<(String, usize)>,
    pub stats: ColumnStats,
}

/// Assemble the single-column report.
pub fn column_report(
    column: &Column,
    infer_options: &InferOptions,
    profile_options: &ProfileOptions,
) -> ColumnReport {
    let inferred = infer(column, infer_options);
    let total = column.len();
    let missing = column.missing_count();
    let distinct = column.distinct_count();
    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            100.0 * count as f64 / total as f64
        }
    };
    ColumnReport {
        name: column.name().to_string(),
        inferred,
        missing,
        missing_pct: pct(missing),
        distinct,
        distinct_pct: pct(distinct),
        top_values: top_values(column, 5),
        stats: profile(column, inferred, profile_options),
    }
}

impl fmt::Display for ColumnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Column: {}", self.name)?;
        writeln!(f, "Inferred type: {}", self.inferred.label())?;
        writeln!(f, "Missing: {} ({:.2}%)", self.missing, self.missing_pct)?;
        writeln!(f, "Distinct: {} ({:.2}%)", self.distinct, self.distinct_pct)?;
        writeln!(f, "Top values:")?;
        for (value, count) in &self.top_values {
            writeln!(f, "  {}: {}", value, count)?;
        }
        write!(f, "{}", self.stats)
    }
}

impl fmt::Display for ColumnStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnStats::Numeric {
                mean,
                median,
                std,
                min,
                max,
                outliers,
            } => {
                writeln!(f, "Numeric statistics:")?;
                writeln!(f, "  mean: {:.2}", mean)?;
                writeln!(f, "  median: {:.2}", median)?;
                match std {
                    Some(std) => writeln!(f, "  std: {:.2}", std)?,
                    None => writeln!(f, "  std: undefined")?,
                }
                writeln!(f, "  min: {}", min)?;
                writeln!(f, "  max: {}", max)?;
                write!(f, "  outliers: {}", outliers)
            }
            ColumnStats::Text {
                len_mean,
                len_min,
                len_max,
            } => {
                writeln!(f, "Text statistics:")?;
                writeln!(f, "  mean length: {:.2}", len_mean)?;
                writeln!(f, "  shortest: {}", len_min)?;
                write!(f, "  longest: {}", len_max)
            }
            ColumnStats::Datetime {
                earliest,
                latest,
                span_days,
                mode,
            } => {
                writeln!(f, "Datetime statistics:")?;
                writeln!(f, "  earliest: {}", earliest)?;
                writeln!(f, "  latest: {}", latest)?;
                writeln!(f, "  span (days): {}", span_days)?;
                write!(f, "  most frequent: {}", mode)
            }
            ColumnStats::Boolean {
                true_count,
                false_count,
                true_pct,
                false_pct,
            } => {
                writeln!(f, "Boolean statistics:")?;
                writeln!(f, "  true: {} ({:.1}%)", true_count, true_pct)?;
                write!(f, "  false: {} ({:.1}%)", false_count, false_pct)
            }
            ColumnStats::Categorical {
                distinct,
                mode,
                top,
            } => {
                writeln!(f, "Categorical statistics:")?;
                writeln!(f, "  distinct: {}", distinct)?;
                writeln!(f, "  most frequent: {}", mode)?;
                writeln!(f, "  distribution:")?;
                for (i, (value, pct)) in top.iter().enumerate() {
                    if i + 1 < top.len() {
                        writeln!(f, "    {}: {:.1}%", value, pct)?;
                    } else {
                        write!(f, "    {}: {:.1}%", value, pct)?;
                    }
                }
                Ok(())
            }
            ColumnStats::Mixed {
                missing,
                numbers,
                texts,
            } => {
                writeln!(f, "Mixed column breakdown:")?;
                writeln!(f, "  numbers: {}", numbers)?;
                writeln!(f, "  texts: {}", texts)?;
                write!(f, "  missing: {}", missing)
            }
        }
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Table overview ===")?;
        writeln!(f, "Rows: {}", self.n_rows)?;
        writeln!(f, "Columns: {}", self.n_cols)?;
        for brief in &self.columns {
            writeln!(f)?;
            writeln!(f, "Column: {}", brief.name)?;
            writeln!(f, "  dtype: {}", brief.dtype)?;
            writeln!(
                f,
                "  missing: {} ({:.2}%)",
                brief.missing, brief.missing_pct
            )?;
            writeln!(
                f,
                "  distinct: {} ({:.2}%)",
                brief.distinct, brief.distinct_pct
            )?;
            if let Some(outliers) = brief.outliers {
                writeln!(f, "  outliers: {}", outliers)?;
            }
        }
        Ok(())
    }
}

/// Render the whole-table overview as text.
pub fn table_overview(table: &Table, options: &ProfileOptions) -> String {
    summarize(table, options).to_string()
}

/// Render the first `n` rows (all rows when `n` is zero or exceeds the row
/// count), with columns padded to a common width and missing cells shown as
/// `<missing>`.
pub fn preview(table: &Table, n: usize) -> String {
    let rows = if n == 0 {
        table.n_rows()
    } else {
        n.min(table.n_rows())
    };

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows + 1);
    grid.push(table.names().iter().map(|s| s.to_string()).collect());
    for row in 0..rows {
        grid.push(
            table
                .columns()
                .iter()
                .map(|c| {
                    c.values()[row]
                        .render()
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|| "<missing>".to_string())
                })
                .collect(),
        );
    }

    let mut widths = vec![0usize; table.n_cols()];
    for line in &grid {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &grid {
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
    out
}
