//! Recurrence rules and their external (JSON) input form.

use cadence_core::types::{Frequency, RepeatType};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{RecurError, RecurResult};

/// What to do when a target month or year lacks the anchor's day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortMonth {
    /// Monthly anchors on the 29th or 30th fall back to the month's last day;
    /// anchors on the 31st only fire in 31-day months. Yearly Feb 29 anchors
    /// only fire in leap years.
    #[default]
    Auto,
    /// Skip every period that lacks the anchor day.
    Skip,
    /// Always fall back to the period's last day.
    Clamp,
}

impl ShortMonth {
    /// Returns `true` when a missing `anchor_day` resolves to the last day of the period.
    #[must_use]
    pub const fn clamps(self, frequency: Frequency, anchor_day: u32) -> bool {
        match self {
            Self::Auto => matches!(frequency, Frequency::Monthly) && anchor_day < 31,
            Self::Skip => false,
            Self::Clamp => true,
        }
    }
}

/// A validated, immutable recurrence rule with an inclusive end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    anchor: CalendarDate,
    frequency: Frequency,
    interval: u32,
    end: CalendarDate,
    short_month: ShortMonth,
}

impl RecurrenceRule {
    /// ## Summary
    /// Builds a rule starting at `anchor` and repeating every `interval`
    /// periods up to and including `end`.
    ///
    /// An `anchor` after `end` is allowed and expands to nothing.
    ///
    /// ## Errors
    /// Returns `InvalidInterval` if `interval` is zero.
    pub fn new(
        anchor: CalendarDate,
        frequency: Frequency,
        interval: u32,
        end: CalendarDate,
    ) -> RecurResult<Self> {
        if interval == 0 {
            return Err(RecurError::InvalidInterval(interval));
        }
        Ok(Self {
            anchor,
            frequency,
            interval,
            end,
            short_month: ShortMonth::Auto,
        })
    }

    #[must_use]
    pub const fn with_short_month(self, short_month: ShortMonth) -> Self {
        Self {
            short_month,
            ..self
        }
    }

    #[must_use]
    pub const fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    #[must_use]
    pub const fn short_month(&self) -> ShortMonth {
        self.short_month
    }
}

/// Rule as supplied by callers: `{ date, repeatType, interval, endDate }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleInput {
    pub date: String,
    pub repeat_type: RepeatType,
    pub interval: u32,
    pub end_date: String,
}

impl RuleInput {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        repeat_type: RepeatType,
        interval: u32,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            repeat_type,
            interval,
            end_date: end_date.into(),
        }
    }

    /// ## Summary
    /// Validates the input and converts it into a [`RecurrenceRule`].
    ///
    /// Dates are checked first, so a malformed date is reported even when
    /// other fields are also invalid.
    ///
    /// ## Errors
    /// - `InvalidDateFormat` if `date` or `endDate` is not a canonical calendar date
    /// - `NotRecurring` if `repeatType` is `none`
    /// - `InvalidInterval` if `interval` is zero
    pub fn to_rule(&self) -> RecurResult<RecurrenceRule> {
        let anchor = CalendarDate::parse(&self.date)?;
        let end = CalendarDate::parse(&self.end_date)?;
        let frequency = self
            .repeat_type
            .frequency()
            .ok_or(RecurError::NotRecurring)?;
        RecurrenceRule::new(anchor, frequency, self.interval, end)
    }
}

impl TryFrom<&RuleInput> for RecurrenceRule {
    type Error = RecurError;

    fn try_from(input: &RuleInput) -> Result<Self, Self::Error> {
        input.to_rule()
    }
}
