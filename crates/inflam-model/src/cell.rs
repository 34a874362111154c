//! Cell values and text parsing.

use crate::error::{ModelError, Result};

/// A single observation. `None` marks a missing value.
pub type Cell = Option<f64>;

/// Parse one textual cell into an observation.
///
/// - Empty text and `nan` (any case) are missing values
/// - Surrounding whitespace is ignored
/// - Anything else must parse as a finite `f64`
///
/// `row` and `column` are only used to locate the failure in the error.
pub fn parse_cell(text: &str, row: usize, column: usize) -> Result<Cell> {
    let trimmed = text.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| ModelError::NonNumeric {
        row,
        column,
        value: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ModelError::NonFinite { row, column });
    }

    Ok(Some(value))
}
