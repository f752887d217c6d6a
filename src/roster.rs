//! Rosters: the set of departments a report is produced for.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Amount, Department, ManagerRecord, Member, PersonRecord};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Roster failed validation: {}", format_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

/// A problem found by [`Roster::validate`].
///
/// The models accept all of these; they are only reported when a caller asks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("department with an empty name")]
    EmptyDepartmentName,

    #[error("member with an empty name in department {department:?}")]
    EmptyName { department: String },

    #[error("{name} has a negative salary ({salary})")]
    NegativeSalary { name: String, salary: Amount },

    #[error("{name} has a negative bonus ({bonus})")]
    NegativeBonus { name: String, bonus: Amount },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An ordered list of departments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub departments: Vec<Department>,
}

impl Roster {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    /// The two-department company used by the `orgpay` demo.
    pub fn demo() -> Self {
        let mut it = Department::new("IT");
        let mut hr = Department::new("HR");

        it.add_member(PersonRecord::new("John Doe", 50000, "Developer", "IT"));
        it.add_member(PersonRecord::new("Jane Smith", 60000, "Designer", "IT"));
        it.add_member(ManagerRecord::new(
            "Michael Scott",
            80000,
            "Manager",
            "IT",
            10000,
        ));

        hr.add_member(PersonRecord::new("Sarah Connor", 70000, "Recruiter", "HR"));
        hr.add_member(ManagerRecord::new(
            "Miranda Priestly",
            90000,
            "Manager",
            "HR",
            8000,
        ));

        Self::new(vec![it, hr])
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let roster: Self = serde_json::from_str(json)?;
        tracing::debug!(departments = roster.departments.len(), "parsed roster");
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        tracing::debug!(path = %path.display(), "loading roster");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name() == name)
    }

    /// Collect every validation issue in the roster, in roster order.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for department in &self.departments {
            if department.name().trim().is_empty() {
                issues.push(ValidationIssue::EmptyDepartmentName);
            }
            for member in department.members() {
                member_issues(department, member, &mut issues);
            }
        }
        issues
    }

    /// Fail with [`RosterError::Invalid`] if [`Roster::issues`] finds anything.
    pub fn validate(&self) -> Result<(), RosterError> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        for issue in &issues {
            tracing::warn!("{}", issue);
        }
        Err(RosterError::Invalid(issues))
    }
}

fn member_issues(department: &Department, member: &Member, issues: &mut Vec<ValidationIssue>) {
    let person = member.person();
    if person.name().trim().is_empty() {
        issues.push(ValidationIssue::EmptyName {
            department: department.name().to_string(),
        });
    }
    if person.salary() < 0 {
        issues.push(ValidationIssue::NegativeSalary {
            name: person.name().to_string(),
            salary: person.salary(),
        });
    }
    if let Some(bonus) = member.bonus().filter(|b| *b < 0) {
        issues.push(ValidationIssue::NegativeBonus {
            name: person.name().to_string(),
            bonus,
        });
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::render_roster_tree(self))
    }
}
