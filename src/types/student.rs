use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of departments a student may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Teknik Informatika")]
    InformaticsEngineering,
    #[serde(rename = "Manajemen")]
    Management,
    #[serde(rename = "Hukum")]
    Law,
    #[serde(rename = "Sastra Inggris")]
    EnglishLiterature,
    #[serde(rename = "PJOK")]
    PhysicalEducation,
    #[serde(rename = "PGSD")]
    ElementaryTeacherEducation,
    #[serde(rename = "Ilmu Komunikasi")]
    Communication,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::InformaticsEngineering,
        Department::Management,
        Department::Law,
        Department::EnglishLiterature,
        Department::PhysicalEducation,
        Department::ElementaryTeacherEducation,
        Department::Communication,
    ];

    /// Name as it appears in forms and in the records file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InformaticsEngineering => "Teknik Informatika",
            Self::Management => "Manajemen",
            Self::Law => "Hukum",
            Self::EnglishLiterature => "Sastra Inggris",
            Self::PhysicalEducation => "PJOK",
            Self::ElementaryTeacherEducation => "PGSD",
            Self::Communication => "Ilmu Komunikasi",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDepartment;

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(UnknownDepartment)
    }
}

/// One persisted student. `id` is the 12-digit key and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub section: String,
    pub gpa: f64,
    pub department: Department,
}

impl StudentRecord {
    /// Overwrite every field except `id`.
    pub fn apply_changes(&mut self, changes: StudentRecord) {
        self.name = changes.name;
        self.section = changes.section;
        self.gpa = changes.gpa;
        self.department = changes.department;
    }
}

/// Raw form fields for creating a student, exactly as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub section: String,
    pub gpa: String,
    pub department: String,
}

/// Raw form fields for editing; the id comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentEditForm {
    pub name: String,
    pub section: String,
    pub gpa: String,
    pub department: String,
}
