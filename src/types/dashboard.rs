use super::student::{Department, StudentRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Mean GPA rounded to two decimals; 0 for an empty roster.
    pub average_gpa: f64,
    /// Always keyed by every department, in declaration order.
    pub per_department: BTreeMap<Department, usize>,
}

impl DashboardStats {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut per_department: BTreeMap<Department, usize> =
            Department::ALL.into_iter().map(|d| (d, 0)).collect();
        for record in records {
            *per_department.entry(record.department).or_default() += 1;
        }

        let total = records.len();
        let average_gpa = if total == 0 {
            0.0
        } else {
            let sum: f64 = records.iter().map(|r| r.gpa).sum();
            round2(sum / total as f64)
        };

        Self {
            total,
            average_gpa,
            per_department,
        }
    }

    pub fn count_for(&self, department: Department) -> usize {
        self.per_department.get(&department).copied().unwrap_or(0)
    }
}

/// Round to two decimals, ties to even on the exact decimal value.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
