//! Numeric token validation.
//!
//! Amounts are plain unsigned decimal literals: ASCII digits with at most
//! one decimal point. Signs, exponents, separators and whitespace are all
//! rejected, as are literals too large or too finely divided to fit in a
//! [`Decimal`].

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::InputRejection;

/// Parses a numeric token into a [`Decimal`].
///
/// The token must be non-empty, consist only of ASCII digits and `.`,
/// contain at most one `.` and at least one digit, and be representable
/// as a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_tracker::error::InputRejection;
/// use payroll_tracker::validation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("12.5"), Ok(Decimal::new(125, 1)));
/// assert_eq!(parse_amount("1.2.3"), Err(InputRejection::MalformedNumber));
/// ```
pub fn parse_amount(token: &str) -> Result<Decimal, InputRejection> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(InputRejection::MalformedNumber);
    }

    // "." and "1.2.3" pass the character check above but are not numbers.
    let points = token.chars().filter(|&c| c == '.').count();
    if points > 1 || !token.chars().any(|c| c.is_ascii_digit()) {
        return Err(InputRejection::MalformedNumber);
    }

    let value = Decimal::from_str(token).map_err(|_| InputRejection::MalformedNumber)?;

    // Fractions finer than Decimal's scale round silently; a nonzero literal
    // that came out as zero is unrepresentable, not zero.
    if value.is_zero() && token.chars().any(|c| matches!(c, '1'..='9')) {
        return Err(InputRejection::MalformedNumber);
    }
    Ok(value)
}

/// Parses a numeric token and requires the value to be strictly positive.
///
/// # Examples
///
/// ```
/// use payroll_tracker::error::InputRejection;
/// use payroll_tracker::validation::parse_positive_amount;
///
/// assert!(parse_positive_amount("40").is_ok());
/// assert_eq!(parse_positive_amount("0"), Err(InputRejection::NotPositive));
/// ```
pub fn parse_positive_amount(token: &str) -> Result<Decimal, InputRejection> {
    let value = parse_amount(token)?;
    if value <= Decimal::ZERO {
        return Err(InputRejection::NotPositive);
    }
    Ok(value)
}

/// Returns true if `token` is a well-formed, representable decimal literal.
pub fn is_valid_number_token(token: &str) -> bool {
    parse_amount(token).is_ok()
}
