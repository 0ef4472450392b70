//! Interactive payroll tracker.
//!
//! This crate registers full-time, part-time and contractual employees,
//! validates their details as they are entered, and prints a payroll report
//! with each employee's computed salary.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod models;
pub mod report;
pub mod session;
pub mod telemetry;
pub mod validation;
