//! Property tests for the daily reducers, aggregation and normalisation.

use inflam_model::Table;
use inflam_stats::{
    compute_standard_deviation_by_day, daily_max, daily_mean, daily_min, daily_std_dev,
    patient_normalise,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

/// Rectangular tables of 1..8 patients by 1..12 days.
fn table_strategy(values: std::ops::Range<f64>) -> impl Strategy<Value = Table> {
    (1usize..8, 1usize..12).prop_flat_map(move |(rows, days)| {
        prop::collection::vec(prop::collection::vec(values.clone(), days), rows)
            .prop_map(|rows| Table::from_values(rows).unwrap())
    })
}

/// Like `table_strategy` but with roughly one cell in five missing.
fn sparse_table_strategy() -> impl Strategy<Value = Table> {
    (1usize..8, 1usize..12).prop_flat_map(|(rows, days)| {
        prop::collection::vec(
            prop::collection::vec(prop::option::weighted(0.8, 0.0f64..50.0), days),
            rows,
        )
        .prop_map(|rows| Table::new(rows).unwrap())
    })
}

proptest! {
    #[test]
    fn min_mean_max_are_ordered(table in table_strategy(-100.0..100.0)) {
        let min = daily_min(&table).unwrap();
        let mean = daily_mean(&table).unwrap();
        let max = daily_max(&table).unwrap();
        prop_assert_eq!(mean.len(), table.column_count());
        for day in 0..table.column_count() {
            prop_assert!(min[day] <= mean[day] + TOLERANCE);
            prop_assert!(mean[day] <= max[day] + TOLERANCE);
        }
    }

    #[test]
    fn std_dev_is_non_negative(table in table_strategy(-100.0..100.0)) {
        for value in daily_std_dev(&table).unwrap() {
            prop_assert!(value >= 0.0);
        }
    }

    #[test]
    fn normalised_values_are_in_unit_range(table in sparse_table_strategy()) {
        let normalised = patient_normalise(&table).unwrap();
        prop_assert_eq!(normalised.row_count(), table.row_count());
        prop_assert_eq!(normalised.column_count(), table.column_count());
        for row in normalised.rows() {
            for cell in row {
                let value = cell.unwrap();
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn single_dataset_has_zero_spread(table in table_strategy(0.0..100.0)) {
        let days = table.column_count();
        let result = compute_standard_deviation_by_day(&[table]).unwrap();
        prop_assert_eq!(result, vec![0.0; days]);
    }

    #[test]
    fn negative_value_always_rejected(
        table in sparse_table_strategy(),
        row in any::<prop::sample::Index>(),
        column in any::<prop::sample::Index>(),
    ) {
        let mut rows = table.into_rows();
        let r = row.index(rows.len());
        let c = column.index(rows[r].len());
        rows[r][c] = Some(-1.0);
        let poisoned = Table::new(rows).unwrap();
        prop_assert!(patient_normalise(&poisoned).is_err());
    }
}

#[test]
fn all_zero_table_reduces_to_zero() {
    let table = Table::from_values(vec![vec![0.0; 4]; 3]).unwrap();
    let zeros = vec![0.0; 4];
    assert_eq!(daily_mean(&table).unwrap(), zeros);
    assert_eq!(daily_std_dev(&table).unwrap(), zeros);
    assert_eq!(daily_max(&table).unwrap(), zeros);
    assert_eq!(daily_min(&table).unwrap(), zeros);
}
