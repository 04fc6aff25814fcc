//! Booking table persistence.
//!
//! Every append loads the whole table, adds one row, and writes the whole
//! table back. The new table is written to a freshly created, uniquely named
//! temp file next to the real one, synced, then renamed over it. A crash or a
//! full disk mid-write leaves the previous table intact instead of truncated,
//! and no two writers ever share a temp file.
//!
//! There is no locking. Two submissions racing through load → rename both
//! succeed and the table stays well-formed, but the later rename drops the
//! earlier row.

use super::{BookingRecord, COLUMNS};
use crate::config::SiteConfig;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Booking table {path} has columns {found:?}, expected {expected:?}")]
    Schema {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// The booking table at a fixed location.
#[derive(Debug, Clone)]
pub struct BookingStore {
    path: PathBuf,
}

impl BookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location under a content root.
    pub fn from_config(source: &Path, config: &SiteConfig) -> Self {
        Self::new(config.bookings_path(source))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row in submission order.
    ///
    /// A missing or zero-length file is an empty table. A header that does not
    /// match the booking columns, or a row that does not parse, is an error.
    pub fn load(&self) -> Result<Vec<BookingRecord>, BookingError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if !headers.iter().eq(COLUMNS) {
            return Err(BookingError::Schema {
                path: self.path.clone(),
                expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
                found: headers.iter().map(String::from).collect(),
            });
        }
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<BookingRecord>, _>>()?;
        Ok(rows)
    }

    /// Add one record after all existing rows.
    ///
    /// Returns the number of rows now in the table. On error the existing
    /// table is left as it was.
    pub fn append(&self, record: &BookingRecord) -> Result<usize, BookingError> {
        let mut rows = self.load()?;
        rows.push(record.clone());
        self.replace(&rows)?;
        tracing::info!(
            path = %self.path.display(),
            rows = rows.len(),
            name = %record.name,
            "booking appended"
        );
        Ok(rows.len())
    }

    /// Write `rows` to a new temp file and rename it over the table.
    fn replace(&self, rows: &[BookingRecord]) -> Result<(), BookingError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "bookings.csv".to_string());
        // Removed on drop unless persisted.
        let tmp = tempfile::Builder::new()
            .prefix(&format!(".{name}."))
            .suffix(".tmp")
            .tempfile_in(dir)?;
        write_rows(tmp.as_file(), rows)?;
        tmp.persist(&self.path)
            .map_err(|e| BookingError::Io(e.error))?;
        Ok(())
    }
}

fn write_rows(file: &File, rows: &[BookingRecord]) -> Result<(), BookingError> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for row in rows {
        writer.serialize(row)?;
    }
    let buffered = writer
        .into_inner()
        .map_err(|e| BookingError::Io(e.into_error()))?;
    let file = buffered
        .into_inner()
        .map_err(|e| BookingError::Io(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}
