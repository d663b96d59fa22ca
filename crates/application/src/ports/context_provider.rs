//! Context provider port
//!
//! Defines the interface for fetching the enumerated render context: the
//! named entries a template may reference.

use async_trait::async_trait;
use stencil_domain::ContextValue;

/// A single named entry available for substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntry {
    /// Reference name, e.g. `_.host`.
    pub name: String,

    /// Current value of the entry.
    pub value: ContextValue,
}

impl ContextEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The enumerated render context at a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    /// Available entries, in provider order; consumers sort for display.
    pub keys: Vec<ContextEntry>,
}

/// Errors that can occur while fetching the render context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The context source is currently unavailable.
    #[error("context unavailable: {0}")]
    Unavailable(String),
}

/// Fetches the current render context.
///
/// The context may change between calls due to external state; callers
/// re-fetch on every refresh cycle rather than caching.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Returns the current set of substitution entries.
    ///
    /// # Errors
    /// Returns `ContextError` if the source cannot be read.
    async fn context(&self) -> Result<RenderContext, ContextError>;
}
