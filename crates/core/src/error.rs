//! Domain error model.

use thiserror::Error;

use crate::item::MAX_NAME_LEN;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, per-action failures (validation,
/// resolution, persistence surfaced verbatim). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A proposed action failed structural validation.
    #[error("malformed action: {0}")]
    MalformedAction(String),

    /// An item name exceeded the storage limit.
    #[error("item name too long: {length} characters (limit is {limit})")]
    NameTooLong { length: usize, limit: usize },

    /// The target of an update/delete could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// An underlying persistence failure, surfaced verbatim.
    #[error("store failure: {0}")]
    StoreFailure(String),
}

impl DomainError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedAction(msg.into())
    }

    pub fn name_too_long(length: usize) -> Self {
        Self::NameTooLong {
            length,
            limit: MAX_NAME_LEN,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::StoreFailure(msg.into())
    }
}
