//! Statistics over inflammation tables.
//!
//! This crate is the analytical core of the workspace:
//!
//! - **Reducers**: daily mean, max, min and population standard deviation
//!   over the patients of one table
//! - **Aggregation**: standard deviation, per day, of the daily means of
//!   several datasets
//! - **Normalisation**: per-patient rescaling by the patient's own peak
//! - **Data sources**: the [`DataSource`] trait through which tables are
//!   supplied, plus an in-memory implementation
//!
//! # Example
//!
//! ```
//! use inflam_model::Table;
//! use inflam_stats::{InMemorySource, analyse_data};
//!
//! let source = InMemorySource::new(vec![
//!     Table::from_values(vec![vec![0.0, 2.0, 0.0]])?,
//!     Table::from_values(vec![vec![0.0, 1.0, 0.0]])?,
//! ]);
//! let spread = analyse_data(&source)?;
//! assert_eq!(spread, vec![0.0, 0.5, 0.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod aggregate;
mod error;
mod normalize;
mod reduce;
mod source;

pub use aggregate::{analyse_data, compute_standard_deviation_by_day};
pub use error::{Result, StatsError};
pub use normalize::patient_normalise;
pub use reduce::{DailySummary, daily_max, daily_mean, daily_min, daily_std_dev, daily_summary};
pub use source::{DataSource, InMemorySource};

pub use inflam_model::ErrorKind;
