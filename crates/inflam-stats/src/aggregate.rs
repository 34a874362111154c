//! Cross-dataset aggregation.

use inflam_model::Table;

use crate::error::{Result, StatsError};
use crate::reduce::{daily_mean, daily_std_dev};
use crate::source::DataSource;

/// Standard deviation, per day, of the daily means of several datasets.
///
/// Each table is first reduced to its daily mean. The mean vectors are
/// stacked in input order (row `i` is dataset `i`) and the population
/// standard deviation is taken down each day. The result describes how much
/// the datasets disagree about the average patient, not how much individual
/// patients vary.
///
/// A single dataset yields all zeros. All datasets must cover the same number
/// of days.
pub fn compute_standard_deviation_by_day(tables: &[Table]) -> Result<Vec<f64>> {
    if tables.is_empty() {
        return Err(StatsError::NoDatasets);
    }

    let mut means: Vec<Vec<f64>> = Vec::with_capacity(tables.len());
    for (dataset, table) in tables.iter().enumerate() {
        let mean = daily_mean(table)?;
        if let Some(expected) = means.first().map(Vec::len)
            && mean.len() != expected
        {
            return Err(StatsError::ShapeMismatch {
                dataset,
                expected,
                found: mean.len(),
            });
        }
        tracing::debug!(dataset, patients = table.row_count(), "Reduced dataset to daily mean");
        means.push(mean);
    }

    let stacked = Table::from_values(means)?;
    daily_std_dev(&stacked)
}

/// Load every table from `source` and aggregate them by day.
pub fn analyse_data<S>(source: &S) -> Result<Vec<f64>>
where
    S: DataSource + ?Sized,
{
    let tables = source.load()?;
    let daily = compute_standard_deviation_by_day(&tables)?;
    tracing::info!(
        datasets = tables.len(),
        days = daily.len(),
        "Computed standard deviation by day"
    );
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use inflam_model::ErrorKind;

    fn table(rows: Vec<Vec<f64>>) -> Table {
        Table::from_values(rows).unwrap()
    }

    #[test]
    fn test_two_single_patient_datasets() {
        let tables = vec![
            table(vec![vec![0.0, 2.0, 0.0]]),
            table(vec![vec![0.0, 1.0, 0.0]]),
        ];
        let result = compute_standard_deviation_by_day(&tables).unwrap();
        assert_eq!(result, vec![0.0, 0.25f64.sqrt(), 0.0]);
    }

    #[test]
    fn test_single_dataset_is_zero() {
        let tables = vec![table(vec![vec![1.0, 5.0], vec![3.0, 9.0]])];
        assert_eq!(
            compute_standard_deviation_by_day(&tables).unwrap(),
            vec![0.0, 0.0]
        );
    }

    #[test]
    fn test_uses_means_not_patients() {
        // Both datasets have mean [2, 2] despite very different patients.
        let tables = vec![
            table(vec![vec![0.0, 4.0], vec![4.0, 0.0]]),
            table(vec![vec![2.0, 2.0]]),
        ];
        assert_eq!(
            compute_standard_deviation_by_day(&tables).unwrap(),
            vec![0.0, 0.0]
        );
    }

    #[test]
    fn test_no_datasets() {
        assert!(matches!(
            compute_standard_deviation_by_day(&[]),
            Err(StatsError::NoDatasets)
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let tables = vec![
            table(vec![vec![0.0, 1.0, 2.0]]),
            table(vec![vec![0.0, 1.0, 2.0]]),
            table(vec![vec![0.0, 1.0]]),
        ];
        let err = compute_standard_deviation_by_day(&tables).unwrap_err();
        assert!(matches!(
            err,
            StatsError::ShapeMismatch {
                dataset: 2,
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_empty_dataset_fails() {
        let tables = vec![table(vec![vec![1.0]]), Table::default()];
        assert!(matches!(
            compute_standard_deviation_by_day(&tables),
            Err(StatsError::EmptyTable)
        ));
    }

    #[test]
    fn test_large_single_dataset_is_zero() {
        let tables = vec![table(vec![vec![1e308], vec![1e308]])];
        assert_eq!(compute_standard_deviation_by_day(&tables).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_analyse_data() {
        let source = InMemorySource::new(vec![
            table(vec![vec![0.0, 2.0, 0.0]]),
            table(vec![vec![0.0, 1.0, 0.0]]),
        ]);
        assert_eq!(analyse_data(&source).unwrap(), vec![0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_analyse_data_empty_source() {
        let source = InMemorySource::new(Vec::new());
        assert!(matches!(analyse_data(&source), Err(StatsError::NoData)));
    }
}
