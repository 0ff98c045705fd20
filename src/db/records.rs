use super::json_file::{read_json, write_json};
use crate::error::StorageError;
use crate::types::StudentRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Student records kept as one JSON array, in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. A missing file is an empty roster.
    pub fn load(&self) -> Result<Vec<StudentRecord>, StorageError> {
        let records: Vec<StudentRecord> = read_json(&self.path)?.unwrap_or_default();
        debug!(path = %self.path.display(), count = records.len(), "loaded student records");
        Ok(records)
    }

    /// Overwrite the file with the full sequence.
    pub fn save(&self, records: &[StudentRecord]) -> Result<(), StorageError> {
        write_json(&self.path, records)?;
        debug!(path = %self.path.display(), count = records.len(), "saved student records");
        Ok(())
    }

    /// Create an empty records file if none exists yet.
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        info!(path = %self.path.display(), "records file not found; creating empty roster");
        self.save(&[])
    }
}
