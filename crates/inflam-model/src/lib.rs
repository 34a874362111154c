//! Inflammation data model.
//!
//! An inflammation table holds one row per patient and one column per day.
//! Day columns line up across tables, so day 0 of one dataset refers to the
//! same offset as day 0 of any other dataset in the collection.
//!
//! Missing observations are explicit (`None`) rather than NaN sentinels.

pub mod cell;
pub mod error;
pub mod table;

pub use cell::{Cell, parse_cell};
pub use error::{ErrorKind, ModelError, Result};
pub use table::Table;
