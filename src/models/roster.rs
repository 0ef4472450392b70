//! The in-memory collection of registered employees.

use crate::error::{PayrollError, PayrollResult};
use crate::validation::is_duplicate_id;

use super::Employee;

/// Employees registered during a session, in insertion order.
///
/// IDs are unique across the roster; [`Roster::add`] enforces this.
///
/// # Example
///
/// ```
/// use payroll_tracker::models::{Employee, Roster};
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::full_time("1", "Ann Lee", Decimal::from(3000))?)?;
/// assert!(roster.add(Employee::full_time("1", "Bo Chan", Decimal::from(10))?).is_err());
/// assert_eq!(roster.len(), 1);
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployee` if an employee with the same ID is
    /// already registered; the roster is left unchanged.
    pub fn add(&mut self, employee: Employee) -> PayrollResult<()> {
        if is_duplicate_id(self, employee.id()) {
            return Err(PayrollError::DuplicateEmployee {
                id: employee.id().to_string(),
            });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Returns true if an employee with `id` is registered.
    pub fn contains_id(&self, id: &str) -> bool {
        is_duplicate_id(self, id)
    }

    /// Looks up an employee by ID.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Iterates over employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
