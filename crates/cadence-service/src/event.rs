//! Event record shape shared with the event store.

use cadence_core::types::RepeatType;
use cadence_recur::CalendarDate;
use serde::{Deserialize, Serialize};

/// Repeat settings carried by every event record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
}

impl RepeatInfo {
    #[must_use]
    pub const fn new(repeat_type: RepeatType, interval: u32, end_date: Option<CalendarDate>) -> Self {
        Self {
            repeat_type,
            interval,
            end_date,
        }
    }

    /// Settings of a standalone event: `{ none, 1, no end date }`.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(RepeatType::None, 1, None)
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.repeat_type.is_recurring()
    }
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self::none()
    }
}

/// One calendar event.
///
/// Fields other than `id`, `date`, `repeat` and `series_id` are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: CalendarDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before the start at which a reminder is due.
    #[serde(default)]
    pub notification_time: u32,
    /// Explicit series identity, shared by every record expanded from one rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<uuid::Uuid>,
}

impl EventRecord {
    /// Creates a standalone all-fields-empty event on `date`.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: CalendarDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::none(),
            notification_time: 0,
            series_id: None,
        }
    }

    #[must_use]
    pub fn with_times(self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_repeat(self, repeat: RepeatInfo) -> Self {
        Self { repeat, ..self }
    }
}
