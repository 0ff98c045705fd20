//! File-backed storage.
//!
//! Layout:
//! - `json_file.rs`: whole-document JSON read and temp-then-rename write
//! - `records.rs`: the student roster (JSON array)
//! - `users.rs`: login accounts (JSON object of username -> hash)

pub mod json_file;
pub mod records;
pub mod users;

pub use records::RecordStore;
pub use users::{BOOTSTRAP_ADMIN, CredentialStore, Credentials};
