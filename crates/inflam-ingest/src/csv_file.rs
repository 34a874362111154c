//! CSV reading and writing.
//!
//! Inflammation CSV files have no header row: each line is one patient and
//! each comma-separated field one day. Empty fields and `nan` are missing
//! observations.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use inflam_model::{Cell, Table, parse_cell};

use crate::error::{IngestError, Result};

/// Load one inflammation CSV file into a table.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    // Ragged rows are reported by the table model, not the CSV reader.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(column, text)| parse_cell(text, row, column))
            .collect::<inflam_model::Result<Vec<_>>>()
            .map_err(|source| IngestError::Table {
                path: path.to_path_buf(),
                source,
            })?;
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let table = Table::new(rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        patients = table.row_count(),
        days = table.column_count(),
        "Loaded CSV table"
    );

    Ok(table)
}

/// Write a table as headerless CSV. Missing cells are written as empty fields.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for row in table.rows() {
        csv_writer
            .write_record(row.iter().map(format_cell))
            .map_err(|source| IngestError::CsvWrite { source })?;
    }

    csv_writer
        .flush()
        .map_err(|e| IngestError::CsvWrite { source: e.into() })
}

fn format_cell(cell: &Cell) -> String {
    cell.map(|v| v.to_string()).unwrap_or_default()
}
