//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (malformed
/// input, unknown item codes, missing entries). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed `code:qty` item).
    #[error("{0}")]
    Validation(String),

    /// The parent of an association is not present in the inventory table.
    #[error("Parent item code '{0}' does not exist in inventory data.")]
    UnknownParent(String),

    /// A child of an association is not present in the inventory table.
    #[error("Child item code '{0}' does not exist.")]
    UnknownChild(String),

    /// A requested resource was not found.
    #[error("Not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Stable machine-readable kind, used by the HTTP layer.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::UnknownParent(_) => "unknown_parent",
            DomainError::UnknownChild(_) => "unknown_child",
            DomainError::NotFound => "not_found",
        }
    }
}
