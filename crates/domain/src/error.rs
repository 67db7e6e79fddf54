//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time offset modifier such as `-1h` is malformed.
    #[error("invalid offset modifier: {0}")]
    InvalidOffset(String),

    /// A numeric range modifier such as `1-10` is malformed.
    #[error("invalid range modifier: {0}")]
    InvalidRange(String),

    /// A variable name does not match `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("invalid variable name: {0}")]
    InvalidVariableName(String),

    /// Resolver settings are inconsistent.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
