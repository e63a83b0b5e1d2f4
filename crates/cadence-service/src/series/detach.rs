use cadence_core::constants::SINGLE_EDIT_INFIX;
use cadence_recur::CalendarDate;

use crate::event::{EventRecord, RepeatInfo};

/// Id of the standalone record detached from `original_id` on `date`,
/// e.g. `1-single-edit-2025-01-06`.
#[must_use]
pub fn detached_id(original_id: &str, date: CalendarDate) -> String {
    format!("{original_id}{SINGLE_EDIT_INFIX}{date}")
}

/// ## Summary
/// Detaches the occurrence on `target_date` into a standalone record.
///
/// The copy keeps every descriptive field of `original`, moves to
/// `target_date`, drops its repeat settings and series id, and receives an id
/// derived from the original id and the date. `original` is left untouched,
/// so the rest of the series keeps its rule.
#[must_use]
pub fn detach_occurrence(original: &EventRecord, target_date: CalendarDate) -> EventRecord {
    let id = detached_id(&original.id, target_date);
    tracing::debug!(source = %original.id, detached = %id, "Detaching occurrence");
    EventRecord {
        id,
        date: target_date,
        repeat: RepeatInfo::none(),
        series_id: None,
        ..original.clone()
    }
}

/// ## Summary
/// Removes the first record whose id is `target_id`.
///
/// An unknown id is not an error: the result then holds the same records in
/// the same order.
#[must_use]
pub fn delete_occurrence(records: &[EventRecord], target_id: &str) -> Vec<EventRecord> {
    let mut remaining = records.to_vec();
    match remaining.iter().position(|record| record.id == target_id) {
        Some(index) => {
            remaining.remove(index);
            tracing::debug!(id = %target_id, "Deleted occurrence");
        }
        None => tracing::debug!(id = %target_id, "No occurrence with this id, nothing deleted"),
    }
    remaining
}
