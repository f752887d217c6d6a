//! Departments, employees and managers, with salary totals.

pub mod models;
pub mod payroll;
pub mod report;
pub mod roster;
