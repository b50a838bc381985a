use thiserror::Error;

use crate::store::StoreError;

/// Failure taxonomy for library operations.
///
/// Every operation validates and fails fast before mutating anything, so no
/// variant implies a partially applied change. `Persistence` is the one
/// exception to "no state change on error": the in-memory mutation stands
/// even though the disk write failed.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl OpError {
    pub fn code(&self) -> &'static str {
        match self {
            OpError::Validation(_) => "VALIDATION",
            OpError::NotFound(_) => "NOT_FOUND",
            OpError::Conflict(_) => "CONFLICT",
            OpError::Unavailable(_) => "UNAVAILABLE",
            OpError::Persistence(_) => "PERSISTENCE",
        }
    }
}

pub type Result<T> = std::result::Result<T, OpError>;
