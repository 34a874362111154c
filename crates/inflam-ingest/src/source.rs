//! Directory-backed data sources.

use std::path::{Path, PathBuf};

use inflam_model::Table;
use inflam_stats::DataSource;

use crate::csv_file::load_csv;
use crate::discovery::{DataFormat, list_data_files};
use crate::error::{IngestError, Result};
use crate::json_file::load_json;

/// Load a single data file, choosing the reader from its extension.
pub fn load_file(path: &Path) -> Result<Table> {
    match DataFormat::from_path(path) {
        Some(DataFormat::Csv) => load_csv(path),
        Some(DataFormat::Json) => load_json(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load every matching data file of `format` in `dir`, ordered by file name.
///
/// Fails when no file matches; an empty directory is not an empty dataset.
pub fn load_directory(dir: &Path, format: DataFormat) -> Result<Vec<Table>> {
    let files = list_data_files(dir, format)?;
    if files.is_empty() {
        return Err(IngestError::NoMatchingFiles {
            pattern: format.pattern(),
            path: dir.to_path_buf(),
        });
    }

    let tables = files
        .iter()
        .map(|path| match format {
            DataFormat::Csv => load_csv(path),
            DataFormat::Json => load_json(path),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        dir = %dir.display(),
        datasets = tables.len(),
        "Loaded inflammation datasets"
    );

    Ok(tables)
}

/// All `inflammation*.csv` files in a directory.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    data_dir: PathBuf,
}

impl CsvDataSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DataSource for CsvDataSource {
    fn load(&self) -> inflam_stats::Result<Vec<Table>> {
        Ok(load_directory(&self.data_dir, DataFormat::Csv)?)
    }
}

/// All `inflammation*.json` files in a directory.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    data_dir: PathBuf,
}

impl JsonDataSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DataSource for JsonDataSource {
    fn load(&self) -> inflam_stats::Result<Vec<Table>> {
        Ok(load_directory(&self.data_dir, DataFormat::Json)?)
    }
}
