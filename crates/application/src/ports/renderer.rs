//! Template renderer port
//!
//! Defines the interface for rendering a template string against whatever
//! context the adapter currently holds.

use async_trait::async_trait;

/// Errors that can occur while rendering a template.
///
/// Every variant carries a human-readable description suitable for direct
/// display in a preview's error field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The template text is not well formed.
    #[error("malformed template at byte {offset}: {detail}")]
    Malformed {
        /// Byte offset of the offending marker.
        offset: usize,
        /// What went wrong.
        detail: String,
    },

    /// A marker references a name the context does not contain.
    #[error("unknown variable: {name}")]
    UnknownReference {
        /// The unresolved reference name.
        name: String,
    },

    /// The renderer could not obtain its context.
    #[error("render context unavailable: {0}")]
    ContextUnavailable(String),
}

/// Renders template strings asynchronously.
///
/// A template with no substitution markers must render to itself.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    /// Renders the template against the current context.
    ///
    /// # Errors
    /// Returns `RenderError` when the template is malformed or references an
    /// unknown name.
    async fn render(&self, template: &str) -> Result<String, RenderError>;
}
