//! Core data models for the payroll tracker.
//!
//! This module contains the employee record and the roster that owns the
//! records for the duration of a session.

mod employee;
mod roster;

pub use employee::{Employee, EmployeeKind, EmploymentType};
pub use roster::Roster;
