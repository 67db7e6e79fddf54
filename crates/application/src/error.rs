//! Application error types

use thiserror::Error;
use topiclab_domain::DomainError;

/// Application-level errors.
///
/// Template resolution itself never fails; these cover the surrounding
/// operations such as loading settings.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
