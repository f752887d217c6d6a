//! Domain models for the organization.
//!
//! - [`PersonRecord`]: an employee's name, salary, position and department label.
//! - [`ManagerRecord`]: a person record with a bonus.
//! - [`Member`]: either of the above, as held by a department.
//! - [`Department`]: a named, ordered collection of members with salary totals.

mod department;
mod member;

pub use department::*;
pub use member::*;
