use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] cadence_service::ServiceError),

    #[error(transparent)]
    RecurError(#[from] cadence_recur::RecurError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule expands to more than the configured maximum of {max} occurrences")]
    TooManyOccurrences { max: usize },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
