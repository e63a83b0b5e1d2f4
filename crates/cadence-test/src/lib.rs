//! Cadence integration test support.
//!
//! Re-exports the workspace crates under one path so the tests in `tests/`
//! read as `cadence_test::component::...`.

pub mod component {
    pub use cadence_core::{config, constants, error as core_error, types};
    pub use cadence_recur::*;
    pub use cadence_service::{display, event, series};
}

pub mod fixtures;
