//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the preview engine and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod context_provider;
mod document_updater;
mod renderer;

pub use context_provider::{ContextEntry, ContextError, ContextProvider, RenderContext};
pub use document_updater::{DocumentUpdater, UpdateError};
pub use renderer::{RenderError, TemplateRenderer};
