//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;

use crate::domain::PostId;

/// A rejected submission. Exactly one field is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid content")]
    InvalidContent,

    #[error("Invalid email")]
    InvalidEmail,
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName => "name",
            Self::InvalidContent => "content",
            Self::InvalidEmail => "email",
        }
    }
}

/// Timeline errors - the four outcomes a caller must be able to tell apart.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Rate limit exceeded, try again in {} seconds", retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    #[error("Timeline post with id {0} not found")]
    NotFound(PostId),

    #[error("Storage failure: {0}")]
    Storage(RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
