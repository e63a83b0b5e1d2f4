use cadence_core::types::RepeatType;

use crate::event::{EventRecord, RepeatInfo};

/// Same record turned standalone: repeat reset to `{ none, 1, no end }`, series id cleared.
#[must_use]
pub fn convert_to_single(record: &EventRecord) -> EventRecord {
    update_repeat(record, RepeatInfo::none())
}

/// Same record set to repeat every `interval` periods of `repeat_type`, with no end date.
#[must_use]
pub fn convert_to_repeating(
    record: &EventRecord,
    repeat_type: RepeatType,
    interval: u32,
) -> EventRecord {
    update_repeat(record, RepeatInfo::new(repeat_type, interval, None))
}

/// Same record with its repeat settings replaced.
///
/// A record that stops repeating leaves its series, so its series id is cleared.
#[must_use]
pub fn update_repeat(record: &EventRecord, repeat: RepeatInfo) -> EventRecord {
    let series_id = record.series_id.filter(|_| repeat.is_recurring());
    EventRecord {
        repeat,
        series_id,
        ..record.clone()
    }
}
