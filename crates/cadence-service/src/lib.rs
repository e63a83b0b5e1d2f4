//! Event records and the operations that act on a materialized series.
//!
//! A series is the set of records expanded from one recurrence rule. The
//! functions here never mutate their inputs: detaching, deleting and
//! converting all return new values.

pub mod display;
pub mod error;
pub mod event;
pub mod series;

pub use display::{
    EnglishLabels, KoreanLabels, RepeatDisplay, RepeatLabels, describe_repeat,
    describe_repeat_for, describe_repeat_with,
};
pub use error::{ServiceError, ServiceResult};
pub use event::{EventRecord, RepeatInfo};
pub use series::{
    RepeatGroups, convert_to_repeating, convert_to_single, delete_occurrence, detach_occurrence,
    detached_id, event_rule, expand_event, filter_recurring, group_by_type, is_recurring,
    materialize_series, series_id_for, series_members, update_repeat,
};
