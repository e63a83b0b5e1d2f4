use std::collections::BTreeMap;

use cadence_core::types::RepeatType;
use uuid::Uuid;

use crate::event::EventRecord;

/// Returns `true` when the record is one instance of a recurring series.
#[must_use]
pub const fn is_recurring(record: &EventRecord) -> bool {
    record.repeat.is_recurring()
}

/// Recurring records, in their original order.
#[must_use]
pub fn filter_recurring(records: &[EventRecord]) -> Vec<EventRecord> {
    records
        .iter()
        .filter(|record| is_recurring(record))
        .cloned()
        .collect()
}

/// Records carrying the explicit series id, in their original order.
#[must_use]
pub fn series_members(records: &[EventRecord], series_id: Uuid) -> Vec<EventRecord> {
    records
        .iter()
        .filter(|record| record.series_id == Some(series_id))
        .cloned()
        .collect()
}

/// Records partitioned by repeat type.
///
/// Every record lands in exactly one bucket and keeps its relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatGroups {
    buckets: [Vec<EventRecord>; RepeatType::ALL.len()],
}

impl RepeatGroups {
    #[must_use]
    pub fn get(&self, repeat_type: RepeatType) -> &[EventRecord] {
        &self.buckets[repeat_type.index()]
    }

    /// Buckets in [`RepeatType::ALL`] order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (RepeatType, &[EventRecord])> {
        RepeatType::ALL
            .into_iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    /// Total number of records across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<RepeatType, Vec<EventRecord>> {
        RepeatType::ALL.into_iter().zip(self.buckets).collect()
    }
}

/// Partitions records by `repeat.type`, preserving order within each group.
#[must_use]
pub fn group_by_type(records: &[EventRecord]) -> RepeatGroups {
    let mut groups = RepeatGroups::default();
    for record in records {
        groups.buckets[record.repeat.repeat_type.index()].push(record.clone());
    }
    tracing::trace!(
        total = groups.len(),
        recurring = groups.len() - groups.get(RepeatType::None).len(),
        "Grouped records by repeat type"
    );
    groups
}
