//! The patient-by-day inflammation table.

use crate::cell::{Cell, parse_cell};
use crate::error::{ModelError, Result};

/// Rectangular grid of observations: rows are patients, columns are days.
///
/// A `Table` can only be built through its validating constructors, so every
/// value of this type is rectangular and holds finite numbers or missing
/// cells. Tables are never mutated once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
    columns: usize,
}

impl Table {
    /// Build a table from rows of optional observations.
    ///
    /// Fails if the rows differ in length or a present value is not finite.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ModelError::Ragged {
                    row: row_index,
                    expected: columns,
                    found: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|cell| cell.is_some_and(|v| !v.is_finite()))
            {
                return Err(ModelError::NonFinite {
                    row: row_index,
                    column,
                });
            }
        }

        Ok(Self { rows, columns })
    }

    /// Build a table from raw floats, treating NaN as a missing value.
    pub fn from_values(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|v| if v.is_nan() { None } else { Some(v) })
                        .collect()
                })
                .collect(),
        )
    }

    /// Build a table from textual cells (see [`parse_cell`]).
    pub fn parse<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(column, text)| parse_cell(text.as_ref(), row, column))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// Number of patients.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of days.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// True when the table has no patients.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// All observations for one day, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `day >= self.column_count()` and the table has rows.
    pub fn column(&self, day: usize) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().map(move |row| row[day])
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }
}
