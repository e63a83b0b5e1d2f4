//! Integration tests for the recurrence generator and series operations.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p cadence-test
//! ```
//!
//! `RUST_LOG=debug` shows the expansion logs of a failing test.

mod generation;
mod series_ops;
mod store_format;
