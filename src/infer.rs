//! Column type inference.
//!
//! Decides the semantic type of a column from its present values. The
//! decision is a fixed-priority cascade: each rule either claims the column
//! or passes it to the next one, and the first claim wins. The cascade is
//! re-run on demand and never cached; a column mutated by a transform may
//! infer differently afterwards.
//!
//! # Example
//! ```
//! use tabprep::infer::{infer, InferOptions, InferredType};
//! use tabprep::table::Column;
//! use tabprep::value::Value;
//!
//! let col = Column::new(
//!     "flag",
//!     vec![
//!         Value::Text("Yes".to_string()),
//!         Value::Text("no".to_string()),
//!         Value::Missing,
//!     ],
//! );
//! assert_eq!(infer(&col, &InferOptions::default()), InferredType::Boolean);
//! ```

use crate::table::Column;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Semantic type of a column, computed from its present values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InferredType {
    Boolean,
    Datetime,
    Numeric,
    Categorical,
    Text,
    /// Never produced by the cascade; the profiler's diagnostic bucket for
    /// columns a caller labels by hand.
    Mixed,
}

impl InferredType {
    pub fn label(&self) -> &'static str {
        match self {
            InferredType::Boolean => "boolean",
            InferredType::Datetime => "datetime",
            InferredType::Numeric => "numeric",
            InferredType::Categorical => "categorical",
            InferredType::Text => "text",
            InferredType::Mixed => "mixed",
        }
    }
}

/// Tuning knobs for the categorical-vs-text decision.
///
/// Both thresholds live in `(0, 1]`. `cat_threshold` is the highest
/// distinct-to-total ratio still eligible for categorical; `error_tolerance`
/// is the lowest frequency share any single value may have before the column
/// is considered noisy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferOptions {
    pub cat_threshold: f64,
    pub error_tolerance: f64,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            cat_threshold: 0.4,
            error_tolerance: 0.09,
        }
    }
}

/// Tokens recognized by the boolean rule, after trimming and case-folding.
const BOOLEAN_TOKENS: [&str; 6] = ["true", "false", "0", "1", "yes", "no"];

/// One entry of the datetime format cascade.
struct DatePattern {
    fmt: &'static str,
    has_time: bool,
}

/// The fixed, ordered datetime format cascade. Ambiguous day/month values
/// resolve to whichever pattern parses first; the order is load-bearing and
/// must not be reshuffled.
const DATE_PATTERNS: [DatePattern; 8] = [
    DatePattern { fmt: "%Y-%m-%d", has_time: false },
    DatePattern { fmt: "%Y/%m/%d", has_time: false },
    DatePattern { fmt: "%d-%m-%Y", has_time: false },
    DatePattern { fmt: "%d/%m/%Y", has_time: false },
    DatePattern { fmt: "%m/%d/%Y", has_time: false },
    DatePattern { fmt: "%Y-%m-%d %H:%M:%S", has_time: true },
    DatePattern { fmt: "%d-%m-%Y %H:%M:%S", has_time: true },
    DatePattern { fmt: "%m/%d/%Y %H:%M:%S", has_time: true },
];

/// Infer the semantic type of a column.
///
/// Priority order: empty guard, boolean, datetime, numeric, then the
/// categorical-vs-text ratio logic, with text as the final fallback.
pub fn infer(column: &Column, options: &InferOptions) -> InferredType {
    const RULES: [fn(&Column, &InferOptions) -> Option<InferredType>; 5] = [
        empty_rule,
        boolean_rule,
        datetime_rule,
        numeric_rule,
        categorical_rule,
    ];
    for rule in RULES {
        if let Some(t) = rule(column, options) {
            return t;
        }
    }
    InferredType::Text
}

/// Columns with no present values are text.
fn empty_rule(column: &Column, _: &InferOptions) -> Option<InferredType> {
    if column.present_count() == 0 {
        Some(InferredType::Text)
    } else {
        None
    }
}

/// At most two distinct normalized tokens, all drawn from the boolean
/// vocabulary. A single-token column (all "yes") still qualifies.
fn boolean_rule(column: &Column, _: &InferOptions) -> Option<InferredType> {
    let mut distinct = HashSet::new();
    for v in column.present() {
        let token = v.token().expect("present value has a token");
        if !BOOLEAN_TOKENS.contains(&token.as_str()) {
            return None;
        }
        distinct.insert(token);
        if distinct.len() > 2 {
            return None;
        }
    }
    Some(InferredType::Boolean)
}

/// Some pattern in the cascade parses every present value.
fn datetime_rule(column: &Column, _: &InferOptions) -> Option<InferredType> {
    parse_datetime_column(column).map(|_| InferredType::Datetime)
}

/// Every present value is a number or parses as one.
fn numeric_rule(column: &Column, _: &InferOptions) -> Option<InferredType> {
    if column.present().all(|v| v.as_number().is_some()) {
        Some(InferredType::Numeric)
    } else {
        None
    }
}

/// Distinct-ratio and noise checks. The ratio denominator is the total row
/// count, missing rows included, so sparse columns lean toward text. The
/// boundary is inclusive: a ratio exactly at `cat_threshold` stays
/// categorical-eligible.
fn categorical_rule(column: &Column, options: &InferOptions) -> Option<InferredType> {
    let counts = column.value_counts();
    let ratio = counts.len() as f64 / column.len() as f64;
    if ratio > options.cat_threshold {
        return Some(InferredType::Text);
    }
    let present = column.present_count() as f64;
    for (_, count) in &counts {
        if (*count as f64 / present) < options.error_tolerance {
            return Some(InferredType::Text);
        }
    }
    Some(InferredType::Categorical)
}

/// Parse every present value with the first cascade pattern that accepts
/// them all, in row order. `None` when no pattern fits or nothing is
/// present.
pub fn parse_datetime_column(column: &Column) -> Option<Vec<NaiveDateTime>> {
    if column.present_count() == 0 {
        return None;
    }
    for pattern in &DATE_PATTERNS {
        let parsed: Option<Vec<NaiveDateTime>> = column
            .present()
            .map(|v| {
                let raw = v.render().expect("present value renders");
                parse_pattern(raw.trim(), pattern)
            })
            .collect();
        if let Some(parsed) = parsed {
            return Some(parsed);
        }
    }
    None
}

fn parse_pattern(raw: &str, pattern: &DatePattern) -> Option<NaiveDateTime> {
    if pattern.has_time {
        NaiveDateTime::parse_from_str(raw, pattern.fmt).ok()
    } else {
        NaiveDate::parse_from_str(raw, pattern.fmt)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}
