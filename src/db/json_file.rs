//! Whole-document JSON persistence shared by both stores.

use crate::error::StorageError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read and decode `path`. A missing file yields `None`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Replace `path` with the encoded value.
///
/// The document goes to a uniquely named temp file in the same directory
/// which is then renamed into place, so readers see either the old or the
/// new document and a failed write leaves the previous content intact.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let encoded = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(write_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(&encoded).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
