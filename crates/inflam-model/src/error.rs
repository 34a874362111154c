//! Error types for the inflammation table model.

use thiserror::Error;

/// Broad classification of a failure.
///
/// Every error in the workspace maps onto one of these so callers can
/// decide how to report a failure without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-rectangular table, or tables that disagree on day count.
    Shape,
    /// Input that is not numeric at all.
    Type,
    /// Numeric input outside the accepted domain, or missing data.
    Value,
}

/// Errors raised while building a table.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A row has a different number of days than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell could not be read as a number.
    #[error("non-numeric input '{value}' at row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    /// A cell holds an infinite value.
    #[error("non-finite value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Ragged { .. } => ErrorKind::Shape,
            Self::NonNumeric { .. } => ErrorKind::Type,
            Self::NonFinite { .. } => ErrorKind::Value,
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
