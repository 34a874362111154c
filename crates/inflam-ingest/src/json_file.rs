//! JSON reading.
//!
//! An inflammation JSON file is an array of patient records, each holding
//! that patient's daily observations. `null` marks a missing observation:
//!
//! ```json
//! [
//!   { "observations": [0, 1, 3, null] },
//!   { "observations": [0, 2, 2, 1] }
//! ]
//! ```

use std::path::Path;

use inflam_model::{Cell, Table};
use serde::Deserialize;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct PatientRecord {
    observations: Vec<Cell>,
}

/// Load one inflammation JSON file into a table.
pub fn load_json(path: &Path) -> Result<Table> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;

    let records: Vec<PatientRecord> =
        serde_json::from_str(&contents).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let rows = records.into_iter().map(|r| r.observations).collect();
    let table = Table::new(rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        patients = table.row_count(),
        days = table.column_count(),
        "Loaded JSON table"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflam_model::ErrorKind;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("inflammation-01.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"[{"observations": [0, 1, null]}, {"observations": [2.5, 3, 4]}]"#,
        );

        let table = load_json(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0).unwrap(), &[Some(0.0), Some(1.0), None]);
        assert_eq!(table.get(1, 0), Some(Some(2.5)));
    }

    #[test]
    fn test_load_json_non_numeric() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, r#"[{"observations": ["Hello", "there"]}]"#);

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, IngestError::JsonParse { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_load_json_ragged() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"[{"observations": [0, 1]}, {"observations": [0]}]"#,
        );

        assert_eq!(load_json(&path).unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_load_json_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "[]");

        assert!(matches!(load_json(&path), Err(IngestError::EmptyFile { .. })));
    }
}
