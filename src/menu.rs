//! Main menu parsing.

use std::str::FromStr;

use crate::error::InputRejection;
use crate::models::EmploymentType;

/// The menu shown before every selection, ending with the choice prompt.
pub const MENU_PROMPT: &str = "\n------ Menu ------\n\
                               1 - Add Full-time Employee\n\
                               2 - Add Part-time Employee\n\
                               3 - Add Contractual Employee\n\
                               4 - Display Payroll Report\n\
                               5 - Exit\n\
                               Enter choice: ";

/// An action selected from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new employee of the given type (choices `1` to `3`).
    Add(EmploymentType),
    /// Print the payroll report (choice `4`).
    ShowReport,
    /// End the session (choice `5`).
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputRejection;

    /// Parses a single-character menu selection.
    ///
    /// Anything other than exactly one of `1` to `5` is an `InvalidChoice`,
    /// including out-of-range digits and padded input such as `"1 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add(EmploymentType::FullTime)),
            "2" => Ok(MenuChoice::Add(EmploymentType::PartTime)),
            "3" => Ok(MenuChoice::Add(EmploymentType::Contractual)),
            "4" => Ok(MenuChoice::ShowReport),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(InputRejection::InvalidChoice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_choice() {
        assert_eq!(
            "1".parse::<MenuChoice>(),
            Ok(MenuChoice::Add(EmploymentType::FullTime))
        );
        assert_eq!(
            "2".parse::<MenuChoice>(),
            Ok(MenuChoice::Add(EmploymentType::PartTime))
        );
        assert_eq!(
            "3".parse::<MenuChoice>(),
            Ok(MenuChoice::Add(EmploymentType::Contractual))
        );
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::ShowReport));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_out_of_range_digits_are_rejected() {
        for input in ["0", "6", "9"] {
            assert_eq!(
                input.parse::<MenuChoice>(),
                Err(InputRejection::InvalidChoice)
            );
        }
    }

    #[test]
    fn test_multi_character_input_is_rejected() {
        for input in ["12", "1 ", "01", "one", ""] {
            assert_eq!(
                input.parse::<MenuChoice>(),
                Err(InputRejection::InvalidChoice),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_menu_lists_all_choices() {
        assert!(MENU_PROMPT.starts_with("\n------ Menu ------\n1 - Add Full-time Employee\n"));
        assert!(MENU_PROMPT.ends_with("5 - Exit\nEnter choice: "));
    }
}
