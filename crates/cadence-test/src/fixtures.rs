//! Shared event records for integration tests.

use cadence_core::types::RepeatType;
use cadence_recur::CalendarDate;
use cadence_service::{EventRecord, RepeatInfo};

/// ## Summary
/// Parses a `YYYY-MM-DD` literal.
///
/// ## Panics
/// Panics if `text` is not a valid calendar date.
#[must_use]
#[expect(clippy::expect_used)]
pub fn date(text: &str) -> CalendarDate {
    CalendarDate::parse(text).expect("test date literal should be valid")
}

/// ## Summary
/// A recurring event with the fields the calendar UI fills in.
#[must_use]
pub fn recurring_event(
    id: &str,
    on: &str,
    repeat_type: RepeatType,
    interval: u32,
    end: &str,
) -> EventRecord {
    let mut record = EventRecord::new(id, "반복 일정", date(on))
        .with_times("09:00", "10:00")
        .with_repeat(RepeatInfo::new(repeat_type, interval, Some(date(end))));
    record.description = "반복 일정 설명".to_string();
    record.location = "회의실".to_string();
    record.category = "업무".to_string();
    record.notification_time = 10;
    record
}

/// ## Summary
/// A standalone event with no repeat settings.
#[must_use]
pub fn single_event(id: &str, on: &str) -> EventRecord {
    EventRecord::new(id, "단일 일정", date(on)).with_times("14:00", "15:00")
}

/// Dates of `records`, in order, as text.
#[must_use]
pub fn dates_of(records: &[EventRecord]) -> Vec<String> {
    records.iter().map(|record| record.date.to_string()).collect()
}
