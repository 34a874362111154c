//! Error types for inflammation statistics.

use inflam_model::{ErrorKind, ModelError};
use thiserror::Error;

/// Errors that can occur while reducing, aggregating or normalising tables.
#[derive(Debug, Error)]
pub enum StatsError {
    // === Value Errors ===
    /// A reducer was given a table without patients.
    #[error("empty table has no daily statistics")]
    EmptyTable,

    /// The aggregator was given no tables at all.
    #[error("no datasets provided")]
    NoDatasets,

    /// A data source produced zero tables.
    #[error("no data found")]
    NoData,

    /// Normalisation input contains a negative observation.
    #[error(
        "inflammation values should not be negative (found {value} at row {row}, column {column})"
    )]
    NegativeValue { row: usize, column: usize, value: f64 },

    // === Shape Errors ===
    /// A dataset covers a different number of days than the first one.
    #[error("dataset {dataset} has {found} days, expected {expected}")]
    ShapeMismatch {
        dataset: usize,
        expected: usize,
        found: usize,
    },

    // === Wrapped Errors ===
    /// A table could not be built.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A data source failed to load its tables.
    #[error("data source failed: {source}")]
    Source {
        kind: ErrorKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTable | Self::NoDatasets | Self::NoData | Self::NegativeValue { .. } => {
                ErrorKind::Value
            }
            Self::ShapeMismatch { .. } => ErrorKind::Shape,
            Self::Model(err) => err.kind(),
            Self::Source { kind, .. } => *kind,
        }
    }
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
