//! ID and name validation.

use crate::models::Roster;

/// Returns true if `s` is a non-empty string of ASCII digits.
///
/// # Examples
///
/// ```
/// use payroll_tracker::validation::is_valid_id;
///
/// assert!(is_valid_id("1042"));
/// assert!(!is_valid_id("10 42"));
/// assert!(!is_valid_id(""));
/// ```
pub fn is_valid_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `s` is a non-empty string of ASCII letters and spaces.
///
/// # Examples
///
/// ```
/// use payroll_tracker::validation::is_valid_name;
///
/// assert!(is_valid_name("Ann Lee"));
/// assert!(!is_valid_name("R2 D2"));
/// ```
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Returns true if any employee on the roster already uses `id`.
///
/// IDs are compared as exact strings, so `"7"` and `"007"` are distinct.
pub fn is_duplicate_id(roster: &Roster, id: &str) -> bool {
    roster.iter().any(|employee| employee.id() == id)
}
