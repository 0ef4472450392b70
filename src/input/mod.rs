//! Interactive input collection.
//!
//! A [`Console`] pairs a line source with an output sink. Collectors are
//! built on [`Console::collect_validated`], which keeps prompting until a
//! validator accepts the input.

mod collectors;
mod console;

pub use collectors::{ID_PROMPT, NAME_PROMPT, collect_amount, collect_id, collect_name};
pub use console::{Console, ReadMode};
