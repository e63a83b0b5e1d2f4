//! Recurrence date generation.
//!
//! Expands a rule of the form {anchor date, frequency, interval, end date}
//! into the ordered calendar dates it denotes. Months of varying length and
//! leap years are resolved through [`ShortMonth`]; the anchor's day and month
//! are always re-applied from the anchor itself, so a clamped occurrence never
//! shifts later ones.
//!
//! ```
//! use cadence_core::types::RepeatType;
//! use cadence_recur::{RecurError, RuleInput, generate_strings};
//!
//! fn main() -> Result<(), RecurError> {
//!     let dates = generate_strings(&RuleInput::new("2025-01-01", RepeatType::Weekly, 2, "2025-02-26"))?;
//!     assert_eq!(dates[1], "2025-01-15");
//!     assert_eq!(dates.last().map(String::as_str), Some("2025-02-26"));
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod error;
pub mod expand;
pub mod rule;

pub use date::CalendarDate;
pub use error::{RecurError, RecurResult};
pub use expand::{Occurrences, generate, generate_strings};
pub use rule::{RecurrenceRule, RuleInput, ShortMonth};
