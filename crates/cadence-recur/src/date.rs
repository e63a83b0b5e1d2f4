//! Gregorian calendar date with a canonical `YYYY-MM-DD` text form.

use std::fmt;

use cadence_core::constants::{DATE_FORMAT, DATE_TEXT_LEN};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RecurError, RecurResult};

/// A valid Gregorian calendar date.
///
/// Serialized as `YYYY-MM-DD` regardless of locale. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its components, or `None` if no such day exists.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// ## Summary
    /// Parses a canonical `YYYY-MM-DD` date.
    ///
    /// Only zero-padded four-digit years and two-digit months/days are
    /// accepted; `2025-1-5` and `2025-02-30` are both rejected.
    ///
    /// ## Errors
    /// Returns `InvalidDateFormat` if the text is not a real calendar date in canonical form.
    pub fn parse(text: &str) -> RecurResult<Self> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == DATE_TEXT_LEN
            && bytes.iter().enumerate().all(|(pos, byte)| match pos {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            });
        if !well_formed {
            return Err(RecurError::InvalidDateFormat(text.to_string()));
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|err| {
                tracing::trace!(input = %text, error = %err, "Rejected calendar date");
                RecurError::InvalidDateFormat(text.to_string())
            })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1..=12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1..=31.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Number of days in this date's month, leap Februaries included.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        u32::from(self.0.num_days_in_month())
    }

    /// Adds whole days, or `None` past the representable range.
    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = RecurError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
