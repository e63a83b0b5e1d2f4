use thiserror::Error;

/// Recurrence rule parsing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurError {
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Invalid interval: {0} (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Repeat type 'none' does not describe a recurrence")]
    NotRecurring,
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
