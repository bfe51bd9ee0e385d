//! Cell values and their underlying representations.
//!
//! A cell is either explicitly missing or a present scalar holding a number
//! or raw text. Missing is a first-class state, distinct from an empty
//! string and from zero.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Tokens the loader treats as a missing cell, after trimming and
/// case-folding. The empty field is always missing.
const MISSING_TOKENS: [&str; 4] = ["na", "n/a", "nan", "null"];

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Explicitly missing cell.
    Missing,
    /// Present numeric scalar.
    Number(f64),
    /// Present raw text.
    Text(String),
}

/// Underlying representation kind of a cell, independent of type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Missing,
    Number,
    Text,
}

impl ValueKind {
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Missing => "missing",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
        }
    }
}

impl Value {
    /// Convert one raw delimited-file field into a cell.
    ///
    /// Empty fields and common NA tokens become [`Value::Missing`]; fields
    /// that parse as a float become [`Value::Number`]; everything else is
    /// kept as raw text.
    pub fn from_field(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        let folded = trimmed.to_lowercase();
        if MISSING_TOKENS.contains(&folded.as_str()) {
            return Value::Missing;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Value::Number(n);
        }
        Value::Text(raw.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Missing => ValueKind::Missing,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Raw text form of a present value; `None` for missing cells.
    ///
    /// Integral numbers render without a fractional part ("1", not "1.0") so
    /// that numeric 0/1 columns tokenize the same way as their text form.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Missing => None,
            Value::Number(n) => Some(Cow::Owned(format_number(*n))),
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Normalized token of a present value: trimmed and case-folded.
    pub fn token(&self) -> Option<String> {
        self.render().map(|s| s.trim().to_lowercase())
    }

    /// Numeric view of a present value: the number itself, or the text
    /// parsed as a float. `None` for missing and unparseable cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Missing => None,
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Canonical text form of a number. Finite integral values print as
/// integers; everything else uses the shortest float representation.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_empty_is_missing() {
        assert_eq!(Value::from_field(""), Value::Missing);
        assert_eq!(Value::from_field("   "), Value::Missing);
    }

    #[test]
    fn test_from_field_na_tokens_are_missing() {
        assert_eq!(Value::from_field("NA"), Value::Missing);
        assert_eq!(Value::from_field("n/a"), Value::Missing);
        assert_eq!(Value::from_field("NaN"), Value::Missing);
        assert_eq!(Value::from_field(" null "), Value::Missing);
    }

    #[test]
    fn test_from_field_number() {
        assert_eq!(Value::from_field("3.5"), Value::Number(3.5));
        assert_eq!(Value::from_field(" -2 "), Value::Number(-2.0));
        assert_eq!(Value::from_field("1e3"), Value::Number(1000.0));
    }

    #[test]
    fn test_from_field_text() {
        assert_eq!(Value::from_field("hello"), Value::Text("hello".to_string()));
        // Date-like text is not a number and stays raw.
        assert_eq!(
            Value::from_field("2023-01-02"),
            Value::Text("2023-01-02".to_string())
        );
    }

    #[test]
    fn test_render_integral_number_has_no_fraction() {
        assert_eq!(Value::Number(1.0).render().unwrap(), "1");
        assert_eq!(Value::Number(-3.0).render().unwrap(), "-3");
        assert_eq!(Value::Number(2.5).render().unwrap(), "2.5");
    }

    #[test]
    fn test_render_missing_is_none() {
        assert!(Value::Missing.render().is_none());
        assert!(Value::Missing.token().is_none());
    }

    #[test]
    fn test_token_normalizes() {
        assert_eq!(Value::Text("  Yes ".to_string()).token().unwrap(), "yes");
        assert_eq!(Value::Number(0.0).token().unwrap(), "0");
    }

    #[test]
    fn test_as_number_parses_text() {
        assert_eq!(Value::Text("4.5".to_string()).as_number(), Some(4.5));
        assert_eq!(Value::Text("abc".to_string()).as_number(), None);
        assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Value::Missing.as_number(), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Value::Missing.kind().label(), "missing");
        assert_eq!(Value::Number(1.0).kind().label(), "number");
        assert_eq!(Value::Text("x".to_string()).kind().label(), "text");
    }
}
