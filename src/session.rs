//! The interactive payroll session.
//!
//! A [`Session`] owns the console and the roster and dispatches menu
//! choices until the user exits or the input closes.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{InputRejection, PayrollError, PayrollResult};
use crate::input::{Console, ReadMode, collect_amount, collect_id, collect_name};
use crate::menu::{MENU_PROMPT, MenuChoice};
use crate::models::{Employee, EmploymentType, Roster};
use crate::report::render_report;
use crate::validation::parse_positive_amount;

/// Prompt for a full-time employee's monthly salary.
pub const SALARY_PROMPT: &str = "Enter Salary (Numbers only): ";
/// Prompt for a part-time employee's hourly wage.
pub const HOURLY_WAGE_PROMPT: &str = "Enter Hourly Wage (Numbers only): ";
/// Prompt for a contractual employee's payment per project.
pub const PER_PROJECT_PROMPT: &str = "Enter Salary per Project (Numbers only): ";
/// Prompt for a part-time employee's hours.
pub const HOURS_PROMPT: &str = "Enter Number of Hours Worked: ";
/// Prompt for a contractual employee's completed projects.
pub const PROJECTS_PROMPT: &str = "Enter Number of Projects Completed: ";

/// Printed after an employee is registered.
pub const ADDED_MESSAGE: &str = "Employee added successfully!";
/// Printed when the user chooses to exit.
pub const EXIT_MESSAGE: &str = "Program exited successfully.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user selected exit from the menu.
    Exited,
    /// The input stream closed; any partially entered employee was dropped.
    InputClosed,
}

/// An interactive payroll session.
///
/// # Example
///
/// ```
/// use payroll_tracker::session::{Session, SessionEnd};
/// use std::io::Cursor;
///
/// let mut session = Session::new(Cursor::new("1\n1\nAnn Lee\n3000\n5\n"), Vec::new());
/// assert_eq!(session.run()?, SessionEnd::Exited);
/// assert_eq!(session.roster().len(), 1);
/// # Ok::<(), payroll_tracker::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty roster.
    pub fn new(input: R, output: W) -> Self {
        Self::with_roster(Console::new(input, output), Roster::new())
    }

    /// Creates a session over an existing console and roster.
    pub fn with_roster(console: Console<R, W>, roster: Roster) -> Self {
        Self { console, roster }
    }

    /// Returns the employees registered so far.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the console output written so far.
    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Consumes the session, returning its roster.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the console are returned; input violations are
    /// handled at the prompt and end of input ends the session normally.
    pub fn run(&mut self) -> PayrollResult<SessionEnd> {
        info!("Payroll session started");
        match self.dispatch() {
            Ok(()) => {
                info!(employees = self.roster.len(), "Payroll session exited");
                Ok(SessionEnd::Exited)
            }
            Err(PayrollError::EndOfInput) => {
                warn!(
                    employees = self.roster.len(),
                    "Input closed, ending payroll session"
                );
                Ok(SessionEnd::InputClosed)
            }
            Err(err) => Err(err),
        }
    }

    /// Shows the menu and handles choices until the user exits.
    fn dispatch(&mut self) -> PayrollResult<()> {
        loop {
            let choice = self
                .console
                .collect_validated(MENU_PROMPT, ReadMode::Token, |s| s.parse::<MenuChoice>())?;

            match choice {
                MenuChoice::Add(employment_type) => self.add_employee(employment_type)?,
                MenuChoice::ShowReport => self.show_report()?,
                MenuChoice::Exit => {
                    self.console.write_line(EXIT_MESSAGE)?;
                    return Ok(());
                }
            }
        }
    }

    /// Collects the fields for a new employee and adds it to the roster.
    ///
    /// The ID is collected first, so a duplicate is rejected before any
    /// other field is asked for.
    pub fn add_employee(&mut self, employment_type: EmploymentType) -> PayrollResult<()> {
        let id = collect_id(&mut self.console, &self.roster)?;
        let name = collect_name(&mut self.console)?;

        let employee = match employment_type {
            EmploymentType::FullTime => {
                let salary = collect_amount(&mut self.console, SALARY_PROMPT)?;
                Employee::full_time(id, name, salary)?
            }
            EmploymentType::PartTime => {
                let wage = collect_amount(&mut self.console, HOURLY_WAGE_PROMPT)?;
                self.collect_multiplier(HOURS_PROMPT, |hours| {
                    Employee::part_time(id.as_str(), name.as_str(), wage, hours)
                })?
            }
            EmploymentType::Contractual => {
                let per_project = collect_amount(&mut self.console, PER_PROJECT_PROMPT)?;
                self.collect_multiplier(PROJECTS_PROMPT, |projects| {
                    Employee::contractual(id.as_str(), name.as_str(), per_project, projects)
                })?
            }
        };

        info!(
            employee_id = %employee.id(),
            employment_type = %employee.employment_type(),
            salary = %employee.compute_salary(),
            "Employee added"
        );
        self.roster.add(employee)?;
        self.console.write_line(ADDED_MESSAGE)?;
        Ok(())
    }

    /// Writes the payroll report to the console.
    pub fn show_report(&mut self) -> PayrollResult<()> {
        info!(employees = self.roster.len(), "Rendering payroll report");
        let report = render_report(&self.roster);
        self.console.write_text(&report)
    }

    /// Collects the hours or project count and builds the employee from it.
    ///
    /// A multiplier that makes the salary unrepresentable is rejected and
    /// asked for again.
    fn collect_multiplier<F>(&mut self, prompt: &str, mut build: F) -> PayrollResult<Employee>
    where
        F: FnMut(Decimal) -> PayrollResult<Employee>,
    {
        self.console
            .collect_validated(prompt, ReadMode::Token, |token| {
                let multiplier = parse_positive_amount(token)?;
                build(multiplier).map_err(|_| InputRejection::SalaryOutOfRange)
            })
    }
}
