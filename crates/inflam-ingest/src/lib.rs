//! Inflammation data ingestion.
//!
//! This crate discovers inflammation data files in a directory and loads
//! them into [`Table`](inflam_model::Table)s.
//!
//! # Features
//!
//! - **CSV Loading**: headerless, comma-separated, one row per patient
//! - **JSON Loading**: an array of `{ "observations": [...] }` patient records
//! - **Discovery**: find `inflammation*.csv` / `inflammation*.json` files
//! - **Data Sources**: [`CsvDataSource`] and [`JsonDataSource`] implement
//!   [`DataSource`](inflam_stats::DataSource) over a directory
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use inflam_ingest::CsvDataSource;
//! use inflam_stats::analyse_data;
//!
//! let source = CsvDataSource::new(Path::new("data"));
//! let spread = analyse_data(&source)?;
//! ```

mod csv_file;
mod discovery;
mod error;
mod json_file;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Loading ===
pub use csv_file::{load_csv, write_csv};
pub use json_file::load_json;

// === File Discovery ===
pub use discovery::{DATA_FILE_PREFIX, DataFormat, list_data_files};

// === Data Sources ===
pub use source::{CsvDataSource, JsonDataSource, load_directory, load_file};
