//! Document updater port
//!
//! Defines the interface for writing a nested patch back into an
//! environment document.

use async_trait::async_trait;
use stencil_domain::{ContextValue, DocumentId};

/// Errors that can occur while submitting a document update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    /// No document with the given id exists.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The patch payload was rejected.
    #[error("invalid patch: {0}")]
    InvalidPatch(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Writes patches into environment documents.
#[async_trait]
pub trait DocumentUpdater: Send + Sync {
    /// Replaces the addressed document's entire data field with `patch`.
    ///
    /// This is a whole-field replacement, not a deep merge: sibling keys not
    /// present in the patch are destroyed. Callers relying on other entries
    /// surviving an update will lose them.
    ///
    /// # Errors
    /// Returns `UpdateError::NotFound` for an unknown document and
    /// `UpdateError::InvalidPatch` if the patch is not a mapping.
    async fn replace_data(&self, id: &DocumentId, patch: ContextValue) -> Result<(), UpdateError>;
}
