//! Error types for the payroll tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`InputRejection`] covers the recoverable input violations a user sees at
//! the prompt; [`PayrollError`] covers everything else.

use thiserror::Error;

/// A recoverable violation of an input rule.
///
/// The `Display` text of each variant is the exact message printed to the
/// user before the prompt is re-issued.
///
/// # Example
///
/// ```
/// use payroll_tracker::error::InputRejection;
///
/// assert_eq!(InputRejection::DuplicateId.to_string(), "Duplicate ID!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// The employee ID contained something other than digits.
    #[error("Error: Employee ID should contain only numbers and no spaces.")]
    MalformedId,

    /// The employee ID is already taken by a registered employee.
    #[error("Duplicate ID!")]
    DuplicateId,

    /// The name contained something other than letters and spaces.
    #[error("Invalid input! Name should contain only letters and spaces.")]
    MalformedName,

    /// The numeric token was not a plain decimal number.
    #[error("Invalid input! Enter a positive number without letters or spaces.")]
    MalformedNumber,

    /// The number parsed but was zero.
    #[error("Value must be greater than 0.")]
    NotPositive,

    /// The menu selection was not one of `1` to `5`.
    #[error("Invalid choice! Please enter a number between 1 and 5.")]
    InvalidChoice,

    /// The salary computed from the entered amounts cannot be represented.
    #[error("Total salary is out of range.")]
    SalaryOutOfRange,
}

/// The main error type for the payroll tracker.
///
/// # Example
///
/// ```
/// use payroll_tracker::error::PayrollError;
///
/// let error = PayrollError::DuplicateEmployee {
///     id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee with ID '42' already exists");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee with the same ID is already on the roster.
    #[error("Employee with ID '{id}' already exists")]
    DuplicateEmployee {
        /// The conflicting ID.
        id: String,
    },

    /// The input stream closed while a value was still expected.
    #[error("Input closed before a value was entered")]
    EndOfInput,

    /// The logging subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
