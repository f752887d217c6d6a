use serde::{Deserialize, Serialize};

/// Monetary amount in whole currency units.
///
/// Signed so that out-of-range input is carried through unchanged rather than
/// rejected at construction; see [`crate::roster::Roster::validate`].
/// Sums saturate at the `i64` bounds instead of overflowing.
pub type Amount = i64;

/// An employee's identity and compensation data.
///
/// `department` is descriptive only. It is not a link to the [`super::Department`]
/// that owns the record and is never checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    salary: Amount,
    position: String,
    department: String,
}

impl PersonRecord {
    pub fn new(
        name: impl Into<String>,
        salary: Amount,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            salary,
            position: position.into(),
            department: department.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> Amount {
        self.salary
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_salary(&mut self, salary: Amount) {
        self.salary = salary;
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// `"<name>, <position>, $<salary>"`
    pub fn details(&self) -> String {
        format!("{}, {}, ${}", self.name, self.position, self.salary)
    }
}

/// A person record that also receives a bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerRecord {
    #[serde(flatten)]
    person: PersonRecord,
    bonus: Amount,
}

impl ManagerRecord {
    pub fn new(
        name: impl Into<String>,
        salary: Amount,
        position: impl Into<String>,
        department: impl Into<String>,
        bonus: Amount,
    ) -> Self {
        Self {
            person: PersonRecord::new(name, salary, position, department),
            bonus,
        }
    }

    /// The base person fields of this manager.
    pub fn person(&self) -> &PersonRecord {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut PersonRecord {
        &mut self.person
    }

    pub fn bonus(&self) -> Amount {
        self.bonus
    }

    pub fn set_bonus(&mut self, bonus: Amount) {
        self.bonus = bonus;
    }

    /// `"<name>, <position>, $<salary>, Bonus: $<bonus>"`
    pub fn details(&self) -> String {
        format!("{}, Bonus: ${}", self.person.details(), self.bonus)
    }
}

/// A department member: either a plain person or a manager.
///
/// Serialized with a `kind` tag, so a roster file reads
/// `{"kind": "manager", "name": ..., "bonus": 10000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Person(PersonRecord),
    Manager(ManagerRecord),
}

impl Member {
    /// Base person fields, shared by both variants.
    pub fn person(&self) -> &PersonRecord {
        match self {
            Self::Person(person) => person,
            Self::Manager(manager) => manager.person(),
        }
    }

    pub fn person_mut(&mut self) -> &mut PersonRecord {
        match self {
            Self::Person(person) => person,
            Self::Manager(manager) => manager.person_mut(),
        }
    }

    pub fn name(&self) -> &str {
        self.person().name()
    }

    pub fn salary(&self) -> Amount {
        self.person().salary()
    }

    /// The manager's bonus, or `None` for a plain person.
    pub fn bonus(&self) -> Option<Amount> {
        match self {
            Self::Person(_) => None,
            Self::Manager(manager) => Some(manager.bonus()),
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager(_))
    }

    /// Salary plus bonus, where the variant carries one.
    pub fn compensation(&self) -> Amount {
        match self {
            Self::Person(person) => person.salary(),
            Self::Manager(manager) => manager.person().salary().saturating_add(manager.bonus()),
        }
    }

    pub fn details(&self) -> String {
        match self {
            Self::Person(person) => person.details(),
            Self::Manager(manager) => manager.details(),
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Person(_) => MemberKind::Person,
            Self::Manager(_) => MemberKind::Manager,
        }
    }
}

impl From<PersonRecord> for Member {
    fn from(person: PersonRecord) -> Self {
        Self::Person(person)
    }
}

impl From<ManagerRecord> for Member {
    fn from(manager: ManagerRecord) -> Self {
        Self::Manager(manager)
    }
}

/// The variant of a [`Member`], without its data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Person,
    Manager,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Manager => "manager",
        }
    }
}
