//! Employee model and related types.
//!
//! This module defines the [`Employee`] record and the [`EmployeeKind`]
//! variants that decide how each employee's salary is computed and shown.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::validation::{is_valid_id, is_valid_name};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    /// Paid a fixed monthly salary.
    FullTime,
    /// Paid an hourly wage for the hours worked.
    PartTime,
    /// Paid a fixed amount per completed project.
    Contractual,
}

impl EmploymentType {
    /// Returns a stable snake_case label, used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contractual => "contractual",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The per-variant payload of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeKind {
    /// Full-time employee; the base rate is the monthly salary.
    FullTime,
    /// Part-time employee; the base rate is the hourly wage.
    PartTime {
        /// Hours worked in the period.
        hours_worked: Decimal,
    },
    /// Contractual employee; the base rate is the payment per project.
    Contractual {
        /// Projects completed in the period.
        projects_completed: Decimal,
    },
}

impl EmployeeKind {
    /// Returns the discriminant of this kind.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            EmployeeKind::FullTime => EmploymentType::FullTime,
            EmployeeKind::PartTime { .. } => EmploymentType::PartTime,
            EmployeeKind::Contractual { .. } => EmploymentType::Contractual,
        }
    }

    /// Returns the multiplier applied to the base rate, with its field name.
    fn multiplier(&self) -> Option<(&'static str, Decimal)> {
        match *self {
            EmployeeKind::FullTime => None,
            EmployeeKind::PartTime { hours_worked } => Some(("hours_worked", hours_worked)),
            EmployeeKind::Contractual { projects_completed } => {
                Some(("projects_completed", projects_completed))
            }
        }
    }
}

/// An employee registered with the payroll tracker.
///
/// Records are validated on construction and immutable afterwards.
///
/// # Examples
///
/// ```
/// use payroll_tracker::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::part_time("12", "Sam Park", Decimal::from(50), Decimal::from(10))?;
/// assert_eq!(employee.compute_salary(), Decimal::from(500));
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: String,
    name: String,
    base_rate: Decimal,
    kind: EmployeeKind,
}

impl Employee {
    /// Creates an employee after checking every field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` naming the first offending field when:
    /// - `id` is not a non-empty string of digits
    /// - `name` is not letters and spaces, or is blank
    /// - `base_rate` or the kind's multiplier is not strictly positive
    /// - the resulting salary overflows or rounds down to zero
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_rate: Decimal,
        kind: EmployeeKind,
    ) -> PayrollResult<Self> {
        let id = id.into();
        let name = name.into();

        if !is_valid_id(&id) {
            return Err(invalid("id", "must be a non-empty string of digits"));
        }
        if !is_valid_name(&name) || name.trim_start().is_empty() {
            return Err(invalid("name", "must contain only letters and spaces"));
        }
        if base_rate <= Decimal::ZERO {
            return Err(invalid("base_rate", "must be greater than 0"));
        }
        if let Some((field, multiplier)) = kind.multiplier() {
            if multiplier <= Decimal::ZERO {
                return Err(invalid(field, "must be greater than 0"));
            }
            match base_rate.checked_mul(multiplier) {
                Some(salary) if salary > Decimal::ZERO => {}
                _ => return Err(invalid("salary", "is out of range")),
            }
        }

        Ok(Self {
            id,
            name,
            base_rate,
            kind,
        })
    }

    /// Creates a full-time employee paid `salary` per month.
    pub fn full_time(
        id: impl Into<String>,
        name: impl Into<String>,
        salary: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(id, name, salary, EmployeeKind::FullTime)
    }

    /// Creates a part-time employee paid `hourly_wage` for `hours_worked`.
    pub fn part_time(
        id: impl Into<String>,
        name: impl Into<String>,
        hourly_wage: Decimal,
        hours_worked: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(id, name, hourly_wage, EmployeeKind::PartTime { hours_worked })
    }

    /// Creates a contractual employee paid `per_project` for each completed project.
    pub fn contractual(
        id: impl Into<String>,
        name: impl Into<String>,
        per_project: Decimal,
        projects_completed: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            id,
            name,
            per_project,
            EmployeeKind::Contractual { projects_completed },
        )
    }

    /// Returns the employee ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base rate: monthly salary, hourly wage or per-project payment.
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Returns the variant payload.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns the employment type of this employee.
    pub fn employment_type(&self) -> EmploymentType {
        self.kind.employment_type()
    }

    /// Computes the employee's salary for the period.
    ///
    /// Full-time employees earn their base rate; the other kinds earn the
    /// base rate times their multiplier.
    pub fn compute_salary(&self) -> Decimal {
        match self.kind.multiplier() {
            None => self.base_rate,
            // Construction rejected any product that would overflow.
            Some((_, multiplier)) => self.base_rate * multiplier,
        }
    }

    /// Renders the employee's details as a report block.
    ///
    /// The block always ends with a blank separator line.
    pub fn render_details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee: {} (ID: {})", self.name, self.id)?;
        let base = self.base_rate.normalize();
        match self.kind {
            EmployeeKind::FullTime => {
                writeln!(f, "Fixed Monthly Salary: ${}", base)?;
            }
            EmployeeKind::PartTime { hours_worked } => {
                writeln!(f, "Hourly Wage: ${}", base)?;
                writeln!(f, "Hours Worked: {}", hours_worked.normalize())?;
                writeln!(f, "Total Salary: ${}", self.compute_salary().normalize())?;
            }
            EmployeeKind::Contractual { projects_completed } => {
                writeln!(f, "Contract Payment Per Project: ${}", base)?;
                writeln!(f, "Projects Completed: {}", projects_completed.normalize())?;
                writeln!(f, "Total Salary: ${}", self.compute_salary().normalize())?;
            }
        }
        writeln!(f)
    }
}

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}
