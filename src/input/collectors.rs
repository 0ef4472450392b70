//! Retry-until-valid collectors for employee fields.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::error::{InputRejection, PayrollResult};
use crate::models::Roster;
use crate::validation::{is_duplicate_id, is_valid_id, is_valid_name, parse_positive_amount};

use super::{Console, ReadMode};

/// Prompt for the employee ID.
pub const ID_PROMPT: &str = "Enter Employee ID (Numbers only, no spaces): ";

/// Prompt for the employee name.
pub const NAME_PROMPT: &str = "Enter Employee Name: ";

/// Collects an employee ID that is well-formed and not yet on `roster`.
///
/// Format violations are reported before duplicates.
pub fn collect_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    roster: &Roster,
) -> PayrollResult<String> {
    console.collect_validated(ID_PROMPT, ReadMode::Token, |id| {
        if !is_valid_id(id) {
            Err(InputRejection::MalformedId)
        } else if is_duplicate_id(roster, id) {
            Err(InputRejection::DuplicateId)
        } else {
            Ok(id.to_string())
        }
    })
}

/// Collects a name made of letters and spaces.
///
/// The line is read as-is apart from leading whitespace, so a blank line
/// is rejected rather than skipped.
pub fn collect_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> PayrollResult<String> {
    console.collect_validated(NAME_PROMPT, ReadMode::Line, |name| {
        if is_valid_name(name) {
            Ok(name.to_string())
        } else {
            Err(InputRejection::MalformedName)
        }
    })
}

/// Collects a strictly positive amount using `prompt`.
pub fn collect_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> PayrollResult<Decimal> {
    console.collect_validated(prompt, ReadMode::Token, parse_positive_amount)
}
