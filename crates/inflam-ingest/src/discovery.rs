//! File discovery for inflammation data directories.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File name prefix shared by every inflammation data file.
pub const DATA_FILE_PREFIX: &str = "inflammation";

/// On-disk format of an inflammation data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// Glob-style description of the files this format matches.
    pub fn pattern(self) -> String {
        format!("{DATA_FILE_PREFIX}*.{}", self.extension())
    }
}

/// Lists the inflammation data files of one format in a directory.
///
/// A file matches when its name starts with [`DATA_FILE_PREFIX`] and its
/// extension matches `format`. Returns files sorted by filename.
pub fn list_data_files(dir: &Path, format: DataFormat) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut skipped = 0usize;

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let has_prefix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(DATA_FILE_PREFIX));

        if has_prefix && DataFormat::from_path(&path) == Some(format) {
            files.push(path);
        } else {
            skipped += 1;
        }
    }

    if files.is_empty() && skipped > 0 {
        tracing::warn!(
            dir = %dir.display(),
            pattern = %format.pattern(),
            skipped,
            "Directory holds no matching inflammation data files"
        );
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        dir = %dir.display(),
        pattern = %format.pattern(),
        count = files.len(),
        "Discovered data files"
    );

    Ok(files)
}
