//! Error types for inflammation data ingestion.

use std::path::{Path, PathBuf};

use inflam_model::{ErrorKind, ModelError};
use inflam_stats::StatsError;
use thiserror::Error;

/// Errors that can occur during data ingestion operations.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Data file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or write a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is neither CSV nor JSON.
    #[error("unsupported data file type: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to write CSV output.
    #[error("failed to write CSV: {source}")]
    CsvWrite {
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON, or JSON that does not hold patient records.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but is not a valid inflammation table.
    #[error("invalid table in {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// The file has no patient rows.
    #[error("data file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Discovery Errors ===
    /// No file in the directory matches the expected name pattern.
    #[error("no inflammation data files matching {pattern} found in {path}")]
    NoMatchingFiles { pattern: String, path: PathBuf },
}

impl IngestError {
    /// Map an I/O failure on `path`, separating missing files from other errors.
    pub(crate) fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Table { source, .. } => source.kind(),
            Self::CsvParse { .. } | Self::JsonParse { .. } | Self::UnsupportedFormat { .. } => {
                ErrorKind::Type
            }
            Self::DirectoryNotFound { .. }
            | Self::FileNotFound { .. }
            | Self::DirectoryRead { .. }
            | Self::FileRead { .. }
            | Self::CsvWrite { .. }
            | Self::EmptyFile { .. }
            | Self::NoMatchingFiles { .. } => ErrorKind::Value,
        }
    }
}

impl From<IngestError> for StatsError {
    fn from(err: IngestError) -> Self {
        Self::Source {
            kind: err.kind(),
            source: Box::new(err),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/inflammation-01.csv"),
        };
        assert_eq!(
            err.to_string(),
            "data file not found: /path/to/inflammation-01.csv"
        );
    }

    #[test]
    fn test_error_into_stats_error() {
        let err = IngestError::Table {
            path: PathBuf::from("inflammation-01.csv"),
            source: ModelError::Ragged {
                row: 3,
                expected: 40,
                found: 39,
            },
        };
        let stats: StatsError = err.into();
        assert!(matches!(stats, StatsError::Source { .. }));
        assert_eq!(stats.kind(), ErrorKind::Shape);
    }
}
