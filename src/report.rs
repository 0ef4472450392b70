//! Payroll report rendering.
//!
//! The report is a plain dump of every employee's details in insertion
//! order, with no sorting, filtering or totals.

use crate::models::Roster;

/// Printed instead of the report when the roster is empty.
pub const EMPTY_REPORT_NOTICE: &str = "No employees registered yet.\n";

/// Printed before the first employee block.
pub const REPORT_HEADER: &str = "\n------ Employee Payroll Report ------\n\n";

/// Renders the payroll report for `roster`.
///
/// # Examples
///
/// ```
/// use payroll_tracker::models::{Employee, Roster};
/// use payroll_tracker::report::render_report;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// assert_eq!(render_report(&roster), "No employees registered yet.\n");
///
/// roster.add(Employee::full_time("1", "Ann Lee", Decimal::from(3000))?)?;
/// assert!(render_report(&roster).contains("Fixed Monthly Salary: $3000"));
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
pub fn render_report(roster: &Roster) -> String {
    if roster.is_empty() {
        return EMPTY_REPORT_NOTICE.to_string();
    }

    let mut report = String::from(REPORT_HEADER);
    for employee in roster {
        report.push_str(&employee.render_details());
    }
    report
}
