//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A key path must contain at least one segment.
    #[error("empty key path")]
    EmptyKeyPath,

    /// A key path segment is empty or otherwise unusable.
    #[error("invalid key path segment: {0:?}")]
    InvalidKeyPathSegment(String),

    /// A document identifier is invalid or empty.
    #[error("invalid document id: {0}")]
    InvalidDocumentId(String),

    /// A patch payload addressed at a document's data field must be a mapping.
    #[error("patch is not a mapping: {0}")]
    PatchNotAMapping(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
