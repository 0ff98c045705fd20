use crate::error::ValidationError;
use crate::types::{Department, StudentRecord};
use regex::Regex;
use std::sync::LazyLock;

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Check raw form fields and build the record they describe.
///
/// Rules run in field order and the first failure is returned. Uniqueness
/// of `id` is the caller's concern.
pub fn validate(
    id: &str,
    name: &str,
    section: &str,
    gpa: &str,
    department: &str,
) -> Result<StudentRecord, ValidationError> {
    if !is_valid_id(id) {
        return Err(ValidationError::Id);
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::Name);
    }
    if !SECTION_RE.is_match(section) {
        return Err(ValidationError::Section);
    }
    let gpa = parse_gpa(gpa).ok_or(ValidationError::Gpa)?;
    let department: Department = department
        .parse()
        .map_err(|_| ValidationError::Department)?;

    Ok(StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        section: section.to_string(),
        gpa,
        department,
    })
}

pub fn is_valid_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

fn parse_gpa(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|gpa| (GPA_MIN..=GPA_MAX).contains(gpa))
}
