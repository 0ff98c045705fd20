use super::json_file::{read_json, write_json};
use crate::error::StorageError;
use crate::service::password::hash_password;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub const BOOTSTRAP_ADMIN: &str = "admin";

/// Username -> salted password hash.
pub type Credentials = BTreeMap<String, String>;

/// Login accounts kept as one JSON object.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Credentials, StorageError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, credentials: &Credentials) -> Result<(), StorageError> {
        write_json(&self.path, credentials)
    }

    /// Make sure the `admin` account exists, creating it with
    /// `default_password` if absent. Returns whether it was created.
    pub fn ensure_bootstrap_admin(&self, default_password: &str) -> Result<bool, StorageError> {
        let mut credentials = self.load()?;
        if credentials.contains_key(BOOTSTRAP_ADMIN) {
            return Ok(false);
        }
        credentials.insert(BOOTSTRAP_ADMIN.to_string(), hash_password(default_password));
        self.save(&credentials)?;
        info!(path = %self.path.display(), "created bootstrap admin account");
        Ok(true)
    }
}
