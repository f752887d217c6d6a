use serde::{Deserialize, Serialize};

use super::{Amount, Member};
use crate::payroll;

/// A named group of members.
///
/// Members are kept in insertion order, which only affects the order they are
/// listed in. Totals do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    name: String,
    #[serde(default)]
    members: Vec<Member>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member. Duplicates are allowed.
    pub fn add_member(&mut self, member: impl Into<Member>) {
        let member = member.into();
        tracing::debug!(
            department = %self.name,
            member = %member.name(),
            kind = member.kind().as_str(),
            "adding member"
        );
        self.members.push(member);
    }

    /// Mutable access to a member by position, for the record setters.
    pub fn member_mut(&mut self, index: usize) -> Option<&mut Member> {
        self.members.get_mut(index)
    }

    pub fn managers(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_manager())
    }

    /// Sum of base salaries. Bonuses are not included.
    pub fn total_salary(&self) -> Amount {
        payroll::total_salary(&self.members)
    }

    /// Sum of base salaries plus every manager's bonus.
    pub fn total_salary_with_bonus(&self) -> Amount {
        payroll::total_salary_with_bonus(&self.members)
    }
}

impl Extend<Member> for Department {
    fn extend<I: IntoIterator<Item = Member>>(&mut self, iter: I) {
        for member in iter {
            self.add_member(member);
        }
    }
}
