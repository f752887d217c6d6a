//! Text rendering for departments and rosters.

use crate::models::{Department, Member, MemberKind};
use crate::payroll::DepartmentSummary;
use crate::roster::{Roster, RosterError};

const PERSON: char = '○';
const MANAGER: char = '●';

/// Get the symbol shown in front of a member.
fn kind_symbol(kind: MemberKind) -> char {
    match kind {
        MemberKind::Person => PERSON,
        MemberKind::Manager => MANAGER,
    }
}

/// The kinds of report `orgpay` can print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Two total lines per department.
    #[default]
    Summary,
    /// [`DepartmentSummary`] list as pretty JSON.
    Json,
    /// Departments with their members, see [`render_roster_tree`].
    Tree,
}

/// Produce the full report for a roster.
///
/// With `strict`, the roster is validated first and nothing is rendered if
/// any issue is found.
pub fn render(roster: &Roster, format: Format, strict: bool) -> Result<String, RosterError> {
    if strict {
        roster.validate()?;
    }

    let output = match format {
        Format::Summary => render_summary(roster),
        Format::Json => {
            let summaries: Vec<DepartmentSummary> = roster
                .departments
                .iter()
                .map(DepartmentSummary::of)
                .collect();
            let mut json = serde_json::to_string_pretty(&summaries)?;
            json.push('\n');
            json
        }
        Format::Tree => render_roster_tree(roster),
    };
    Ok(output)
}

/// The two total lines for a department.
///
/// ```text
/// Total salary for IT department: $190000
/// Total salary with bonus for IT department: $200000
/// ```
pub fn summary_lines(department: &Department) -> [String; 2] {
    [
        format!(
            "Total salary for {} department: ${}",
            department.name(),
            department.total_salary()
        ),
        format!(
            "Total salary with bonus for {} department: ${}",
            department.name(),
            department.total_salary_with_bonus()
        ),
    ]
}

/// Summary lines for every department, one per line, in roster order.
pub fn render_summary(roster: &Roster) -> String {
    let mut output = String::new();
    for department in &roster.departments {
        for line in summary_lines(department) {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}

/// Render a roster as an ASCII tree of departments and their members.
///
/// Example output:
/// ```text
/// HR
/// ├── ○ Sarah Connor, Recruiter, $70000
/// └── ● Miranda Priestly, Manager, $90000, Bonus: $8000
/// ```
pub fn render_roster_tree(roster: &Roster) -> String {
    let mut output = String::new();
    for department in &roster.departments {
        render_department(&mut output, department);
    }
    output
}

fn render_department(output: &mut String, department: &Department) {
    output.push_str(department.name());
    output.push('\n');

    let members = department.members();
    for (i, member) in members.iter().enumerate() {
        render_member(output, member, i == members.len() - 1);
    }
}

fn render_member(output: &mut String, member: &Member, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    output.push(kind_symbol(member.kind()));
    output.push(' ');
    output.push_str(&member.details());
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ManagerRecord, PersonRecord};

    #[test]
    fn test_empty_department() {
        let roster = Roster::new(vec![Department::new("Legal")]);
        assert_eq!(render_roster_tree(&roster), "Legal\n");
    }

    #[test]
    fn test_members_in_insertion_order() {
        let mut hr = Department::new("HR");
        hr.add_member(PersonRecord::new("Sarah Connor", 70000, "Recruiter", "HR"));
        hr.add_member(ManagerRecord::new(
            "Miranda Priestly",
            90000,
            "Manager",
            "HR",
            8000,
        ));

        let output = render_roster_tree(&Roster::new(vec![hr]));
        assert_eq!(
            output,
            "HR\n├── ○ Sarah Connor, Recruiter, $70000\n└── ● Miranda Priestly, Manager, $90000, Bonus: $8000\n"
        );
    }

    #[test]
    fn test_roster_display_is_tree() {
        let roster = Roster::demo();
        assert_eq!(roster.to_string(), render_roster_tree(&roster));
        assert!(roster.to_string().starts_with("IT\n├── ○ John Doe, Developer, $50000\n"));
    }

    #[test]
    fn test_demo_summary() {
        let output = render_summary(&Roster::demo());
        let expected = "Total salary for IT department: $190000\n\
                        Total salary with bonus for IT department: $200000\n\
                        Total salary for HR department: $160000\n\
                        Total salary with bonus for HR department: $168000\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_summary_of_empty_department() {
        let [total, with_bonus] = summary_lines(&Department::new("Ops"));
        assert_eq!(total, "Total salary for Ops department: $0");
        assert_eq!(with_bonus, "Total salary with bonus for Ops department: $0");
    }
}
