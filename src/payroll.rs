//! Salary aggregation over department members.
//!
//! All totals are computed here. [`Department`] methods and
//! [`calculate_total_salary_with_bonus`] forward to these functions.

use serde::{Deserialize, Serialize};

use crate::models::{Amount, Department, Member};

/// Sum of base salaries. An empty slice sums to 0; sums saturate at the `Amount` bounds.
pub fn total_salary(members: &[Member]) -> Amount {
    members
        .iter()
        .map(Member::salary)
        .fold(0, Amount::saturating_add)
}

/// Sum of base salaries plus bonuses for the manager variant.
pub fn total_salary_with_bonus(members: &[Member]) -> Amount {
    members
        .iter()
        .map(Member::compensation)
        .fold(0, Amount::saturating_add)
}

/// Free-function form of [`Department::total_salary_with_bonus`].
pub fn calculate_total_salary_with_bonus(department: &Department) -> Amount {
    total_salary_with_bonus(department.members())
}

/// Computed totals for one department, used for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub managers: usize,
    pub total_salary: Amount,
    pub total_salary_with_bonus: Amount,
}

impl DepartmentSummary {
    pub fn of(department: &Department) -> Self {
        Self {
            department: department.name().to_string(),
            headcount: department.len(),
            managers: department.managers().count(),
            total_salary: department.total_salary(),
            total_salary_with_bonus: department.total_salary_with_bonus(),
        }
    }

    /// Bonus paid on top of base salaries.
    pub fn bonus_total(&self) -> Amount {
        self.total_salary_with_bonus.saturating_sub(self.total_salary)
    }
}
