//! Column-wise reducers over one inflammation table.
//!
//! Each reducer folds every day (column) across all patients (rows) and
//! returns one value per day. A day holding a missing observation reduces
//! to `NaN`; missing values are not skipped.

use inflam_model::Table;
use serde::Serialize;

use crate::error::{Result, StatsError};

/// Applies `reduce` to the present values of each column.
fn reduce_columns<F>(table: &Table, reduce: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if table.is_empty() {
        return Err(StatsError::EmptyTable);
    }

    let mut values = Vec::with_capacity(table.row_count());
    let daily = (0..table.column_count())
        .map(|day| {
            values.clear();
            for cell in table.column(day) {
                match cell {
                    Some(v) => values.push(v),
                    None => return f64::NAN,
                }
            }
            reduce(&values)
        })
        .collect();

    Ok(daily)
}

/// Arithmetic mean that stays finite for finite inputs near `f64::MAX`.
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

fn population_std_dev(values: &[f64]) -> f64 {
    let centre = mean(values);
    let variance = values.iter().map(|v| (v - centre).powi(2)).sum::<f64>() / values.len() as f64;
    if variance.is_finite() {
        return variance.sqrt();
    }
    // Squared deviations overflowed; rescale by the largest magnitude.
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();
    let centre = mean(&scaled);
    let variance = scaled.iter().map(|v| (v - centre).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt() * scale
}

/// Daily arithmetic mean across patients.
pub fn daily_mean(table: &Table) -> Result<Vec<f64>> {
    reduce_columns(table, mean)
}

/// Daily maximum across patients.
pub fn daily_max(table: &Table) -> Result<Vec<f64>> {
    reduce_columns(table, |values| {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Daily minimum across patients.
pub fn daily_min(table: &Table) -> Result<Vec<f64>> {
    reduce_columns(table, |values| {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Daily population standard deviation across patients.
///
/// Divides by the number of patients, not patients minus one, so a single
/// patient always has a deviation of zero.
pub fn daily_std_dev(table: &Table) -> Result<Vec<f64>> {
    reduce_columns(table, population_std_dev)
}

/// All four daily statistics of one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub patients: usize,
    pub days: usize,
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
    pub std_dev: Vec<f64>,
}

/// Compute mean, max, min and standard deviation per day in one call.
pub fn daily_summary(table: &Table) -> Result<DailySummary> {
    let summary = DailySummary {
        patients: table.row_count(),
        days: table.column_count(),
        mean: daily_mean(table)?,
        max: daily_max(table)?,
        min: daily_min(table)?,
        std_dev: daily_std_dev(table)?,
    };
    tracing::debug!(
        patients = summary.patients,
        days = summary.days,
        "Computed daily summary"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<f64>>) -> Table {
        Table::from_values(rows).unwrap()
    }

    #[test]
    fn test_daily_mean_zeros() {
        let input = table(vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert_eq!(daily_mean(&input).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_integers() {
        let input = table(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(daily_mean(&input).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_daily_max() {
        let cases = [
            (vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]], vec![3.0, 3.0]),
            (vec![vec![10.0, 1.0], vec![2.0, 20.0], vec![3.0, 3.0]], vec![10.0, 20.0]),
        ];
        for (input, expected) in cases {
            assert_eq!(daily_max(&table(input)).unwrap(), expected);
        }
    }

    #[test]
    fn test_daily_min() {
        let cases = [
            (vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]], vec![1.0, 1.0]),
            (vec![vec![-1.0, 1.0], vec![2.0, 0.0], vec![3.0, 3.0]], vec![-1.0, 0.0]),
        ];
        for (input, expected) in cases {
            assert_eq!(daily_min(&table(input)).unwrap(), expected);
        }
    }

    #[test]
    fn test_daily_std_dev_population() {
        let input = table(vec![vec![1.0, 0.0], vec![3.0, 0.0]]);
        assert_eq!(daily_std_dev(&input).unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_single_patient_std_dev_is_zero() {
        let input = table(vec![vec![4.0, 7.0, 1.0]]);
        assert_eq!(daily_std_dev(&input).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_table_fails() {
        let input = Table::default();
        assert!(matches!(daily_mean(&input), Err(StatsError::EmptyTable)));
        assert!(matches!(daily_max(&input), Err(StatsError::EmptyTable)));
        assert!(matches!(daily_min(&input), Err(StatsError::EmptyTable)));
        assert!(matches!(daily_std_dev(&input), Err(StatsError::EmptyTable)));
    }

    #[test]
    fn test_missing_value_propagates() {
        let input = table(vec![vec![1.0, f64::NAN], vec![3.0, 4.0]]);
        let mean = daily_mean(&input).unwrap();
        assert_eq!(mean[0], 2.0);
        assert!(mean[1].is_nan());
        assert!(daily_max(&input).unwrap()[1].is_nan());
    }

    #[test]
    fn test_daily_summary() {
        let input = table(vec![vec![1.0, 2.0], vec![3.0, 6.0]]);
        let summary = daily_summary(&input).unwrap();
        assert_eq!(summary.patients, 2);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.mean, vec![2.0, 4.0]);
        assert_eq!(summary.max, vec![3.0, 6.0]);
        assert_eq!(summary.min, vec![1.0, 2.0]);
        assert_eq!(summary.std_dev, vec![1.0, 2.0]);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let input = table(vec![vec![1e308], vec![1e308]]);
        assert_eq!(daily_mean(&input).unwrap(), vec![1e308]);
        assert_eq!(daily_std_dev(&input).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_large_opposite_values_std_dev_is_finite() {
        let input = table(vec![vec![1e308], vec![-1e308]]);
        assert_eq!(daily_mean(&input).unwrap(), vec![0.0]);
        assert_eq!(daily_std_dev(&input).unwrap(), vec![1e308]);
    }
}
