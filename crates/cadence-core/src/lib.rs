//! Shared vocabulary for the cadence workspace.
//!
//! Holds the repeat/frequency enums used by both the recurrence generator and
//! the series operations, the core error type, and configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
