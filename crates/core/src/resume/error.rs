//! Resume error types.

use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// Resume operation errors.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// Resume not found.
    #[error("resume not found: {0}")]
    NotFound(Uuid),

    /// Invalid or missing input.
    #[error("invalid upload: {0}")]
    Validation(String),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ResumeError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound(id)
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}
