//! Input validation for employee fields.
//!
//! Every predicate here is total over all input strings: it never panics
//! and never allocates an error for the caller to handle. The `parse_*`
//! functions additionally report which rule a token broke.

mod amount;
mod identity;

pub use amount::{is_valid_number_token, parse_amount, parse_positive_amount};
pub use identity::{is_duplicate_id, is_valid_id, is_valid_name};
