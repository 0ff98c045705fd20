pub mod dashboard;
pub mod student;

pub use dashboard::DashboardStats;
pub use student::{Department, StudentEditForm, StudentForm, StudentRecord};
