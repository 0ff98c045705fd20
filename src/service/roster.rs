use crate::db::{CredentialStore, RecordStore};
use crate::error::{RosterError, ValidationError};
use crate::service::password::{hash_password, verify_password};
use crate::service::validator::validate;
use crate::types::{DashboardStats, Department, StudentRecord};
use tracing::{info, warn};

/// Orchestrates logins and roster edits over the two file-backed stores.
///
/// Holds no cached data: every call reloads what it needs and mutations
/// rewrite the whole file. Concurrent writers are not coordinated, so the
/// last save wins.
#[derive(Debug, Clone)]
pub struct RosterService {
    records: RecordStore,
    credentials: CredentialStore,
}

impl RosterService {
    pub fn new(records: RecordStore, credentials: CredentialStore) -> Self {
        Self {
            records,
            credentials,
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Startup initialization: seed the admin account and an empty roster.
    pub fn bootstrap(&self, admin_password: &str) -> Result<(), RosterError> {
        self.credentials.ensure_bootstrap_admin(admin_password)?;
        self.records.ensure_exists()?;
        Ok(())
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, RosterError> {
        let credentials = self.credentials.load()?;
        let ok = credentials
            .get(username)
            .is_some_and(|hash| verify_password(password, hash));
        if !ok {
            warn!(username, "login rejected");
        }
        Ok(ok)
    }

    pub fn register(&self, username: &str, password: &str) -> Result<(), RosterError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::EmptyCredentials.into());
        }
        let mut credentials = self.credentials.load()?;
        if credentials.contains_key(username) {
            return Err(RosterError::AlreadyExists(username.to_string()));
        }
        credentials.insert(username.to_string(), hash_password(password));
        self.credentials.save(&credentials)?;
        info!(username, "registered user");
        Ok(())
    }

    pub fn list_records(&self) -> Result<Vec<StudentRecord>, RosterError> {
        Ok(self.records.load()?)
    }

    pub fn get_record(&self, id: &str) -> Result<StudentRecord, RosterError> {
        self.records
            .load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    pub fn add_record(
        &self,
        id: &str,
        name: &str,
        section: &str,
        gpa: &str,
        department: &str,
    ) -> Result<StudentRecord, RosterError> {
        let record = validate(id, name, section, gpa, department)?;

        let mut records = self.records.load()?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(RosterError::DuplicateId(record.id));
        }
        records.push(record.clone());
        self.records.save(&records)?;

        info!(id = %record.id, department = %record.department, "added student");
        Ok(record)
    }

    /// Replace the mutable fields of an existing student. The id is only
    /// checked for format; it is the lookup key and is never rewritten.
    pub fn edit_record(
        &self,
        id: &str,
        name: &str,
        section: &str,
        gpa: &str,
        department: &str,
    ) -> Result<StudentRecord, RosterError> {
        let changes = validate(id, name, section, gpa, department)?;

        let mut records = self.records.load()?;
        let Some(existing) = records.iter_mut().find(|r| r.id == id) else {
            return Err(RosterError::NotFound(id.to_string()));
        };
        existing.apply_changes(changes);
        let updated = existing.clone();
        self.records.save(&records)?;

        info!(id, "updated student");
        Ok(updated)
    }

    /// Remove the student with `id`. Returns whether one was removed; a
    /// missing id is not an error.
    pub fn delete_record(&self, id: &str) -> Result<bool, RosterError> {
        let mut records = self.records.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.records.save(&records)?;

        info!(id, removed, "deleted student");
        Ok(removed)
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats, RosterError> {
        let records = self.records.load()?;
        Ok(DashboardStats::from_records(&records))
    }

    pub fn departments(&self) -> &'static [Department] {
        &Department::ALL
    }
}
