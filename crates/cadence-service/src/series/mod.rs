//! Operations over a materialized series of event records.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `membership` | Recurring checks, filtering and grouping by repeat type |
//! | `detach` | Detaching or deleting a single occurrence |
//! | `convert` | Changing a record's repeat settings |
//! | `materialize` | Turning a rule's dates into records |

mod convert;
mod detach;
mod materialize;
mod membership;

pub use convert::{convert_to_repeating, convert_to_single, update_repeat};
pub use detach::{delete_occurrence, detach_occurrence, detached_id};
pub use materialize::{event_rule, expand_event, materialize_series, series_id_for};
pub use membership::{RepeatGroups, filter_recurring, group_by_type, is_recurring, series_members};
