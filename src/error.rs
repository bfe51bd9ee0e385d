//! Error types for table operations.

use std::fmt;

/// Error type for loading, profiling, and transform operations.
///
/// Every variant is a recoverable, local condition: the failing operation
/// aborts without mutating the table and the caller decides whether to halt
/// the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepError {
    /// No table has been loaded into the session.
    NotLoaded,
    /// The named column does not exist in the table.
    ColumnNotFound(String),
    /// The operation requires a column type the column does not have.
    TypeMismatch {
        column: String,
        expected: &'static str,
    },
    /// Zero variance or zero range prevents the requested scaling.
    DegenerateColumn { column: String, reason: String },
    /// Invalid argument value (unknown method, bad range, fraction sum > 1).
    InvalidParameter(String),
    /// The input file does not exist.
    FileNotFound(String),
    /// Every encoding in the fallback list failed to decode the file.
    DecodeExhausted(String),
    /// I/O error during file operations.
    Io(String),
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepError::NotLoaded => {
                write!(f, "No data loaded")
            }
            PrepError::ColumnNotFound(name) => {
                write!(f, "Column not found: '{}'", name)
            }
            PrepError::TypeMismatch { column, expected } => {
                write!(f, "Column '{}' is not {}", column, expected)
            }
            PrepError::DegenerateColumn { column, reason } => {
                write!(f, "Column '{}' is degenerate: {}", column, reason)
            }
            PrepError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            PrepError::FileNotFound(path) => {
                write!(f, "File not found: {}", path)
            }
            PrepError::DecodeExhausted(path) => {
                write!(f, "Could not decode {} with any supported encoding", path)
            }
            PrepError::Io(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PrepError {}

impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        PrepError::Io(err.to_string())
    }
}

impl From<csv::Error> for PrepError {
    fn from(err: csv::Error) -> Self {
        PrepError::Io(err.to_string())
    }
}
