use cadence_core::constants::ID_SEPARATOR;
use cadence_recur::{CalendarDate, RecurError, RecurrenceRule};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::event::EventRecord;

/// Namespace for series ids derived from a base event id.
const SERIES_NAMESPACE: Uuid = Uuid::from_u128(0x4a1c_9e52_0b7d_4f36_8c21_d5e0_7a93_f18b);

/// Deterministic series id for records expanded from the event `base_id`.
#[must_use]
pub fn series_id_for(base_id: &str) -> Uuid {
    Uuid::new_v5(&SERIES_NAMESPACE, base_id.as_bytes())
}

/// ## Summary
/// Creates one record per date, all copies of `base` sharing its repeat settings.
///
/// Records are numbered from 1 (`{base.id}-1`, `{base.id}-2`, ...) and carry
/// the base's series id, or one derived from the base id when it has none.
#[must_use]
pub fn materialize_series(base: &EventRecord, dates: &[CalendarDate]) -> Vec<EventRecord> {
    let series_id = base.series_id.unwrap_or_else(|| series_id_for(&base.id));
    dates
        .iter()
        .zip(1_usize..)
        .map(|(date, number)| EventRecord {
            id: format!("{}{ID_SEPARATOR}{number}", base.id),
            date: *date,
            series_id: Some(series_id),
            ..base.clone()
        })
        .collect()
}

/// ## Summary
/// Builds the recurrence rule described by `base`'s own repeat settings,
/// anchored on its date.
///
/// ## Errors
/// - `NotRecurring` if the base does not repeat
/// - `MissingEndDate` if the base repeats without an end date
/// - `InvalidInterval` if the interval is zero
pub fn event_rule(base: &EventRecord) -> ServiceResult<RecurrenceRule> {
    let frequency = base
        .repeat
        .repeat_type
        .frequency()
        .ok_or(RecurError::NotRecurring)?;
    let end = base
        .repeat
        .end_date
        .ok_or_else(|| ServiceError::MissingEndDate(base.id.clone()))?;

    Ok(RecurrenceRule::new(base.date, frequency, base.repeat.interval, end)?)
}

/// ## Summary
/// Expands `base` by its own repeat settings, starting on its date.
///
/// ## Errors
/// Same as [`event_rule`].
pub fn expand_event(base: &EventRecord) -> ServiceResult<Vec<EventRecord>> {
    let records = materialize_series(base, &event_rule(base)?.expand());
    tracing::debug!(base = %base.id, count = records.len(), "Materialized series");
    Ok(records)
}
