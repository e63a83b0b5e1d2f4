use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    RecurError(#[from] cadence_recur::RecurError),

    #[error("Event '{0}' repeats but has no end date")]
    MissingEndDate(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
