//! Per-patient normalisation.

use inflam_model::{Cell, Table};

use crate::error::{Result, StatsError};

/// Normalise every patient's record against that patient's own peak.
///
/// Each row is divided by its largest present observation, so the output
/// lies in `[0, 1]` and has the same shape as the input.
///
/// - Any negative observation anywhere rejects the whole table
/// - Missing observations are ignored when finding the peak and become 0
/// - Rows whose peak is 0, or that have no present values, are scaled by 1
pub fn patient_normalise(table: &Table) -> Result<Table> {
    if let Some((row, column, value)) = first_negative(table) {
        return Err(StatsError::NegativeValue { row, column, value });
    }

    let rows = table
        .rows()
        .map(|row| {
            let scale = row_scale(row);
            row.iter()
                .map(|cell| {
                    let normalised = cell.map_or(0.0, |v| v / scale);
                    Some(normalised.max(0.0))
                })
                .collect()
        })
        .collect();

    Ok(Table::new(rows)?)
}

fn first_negative(table: &Table) -> Option<(usize, usize, f64)> {
    table.rows().enumerate().find_map(|(row, cells)| {
        cells.iter().enumerate().find_map(|(column, cell)| match cell {
            Some(v) if *v < 0.0 => Some((row, column, *v)),
            _ => None,
        })
    })
}

/// Peak of the present values, floored to 1.0 when not positive.
fn row_scale(row: &[Cell]) -> f64 {
    row.iter()
        .flatten()
        .copied()
        .reduce(f64::max)
        .filter(|peak| *peak > 0.0)
        .unwrap_or(1.0)
}
