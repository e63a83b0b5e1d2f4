//! `cadence` command-line front end.
//!
//! Reads rules and event records as arguments or JSON files, runs them through
//! the recurrence generator and series operations, and prints the result to
//! stdout. Logs go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
