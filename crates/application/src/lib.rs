//! Stencil Application - Preview engine, ports, and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The live template preview session
//! - Use case orchestration for variable updates

pub mod ports;
pub mod preview;
pub mod use_cases;

pub use ports::{
    ContextEntry, ContextError, ContextProvider, DocumentUpdater, RenderContext, RenderError,
    TemplateRenderer, UpdateError,
};
pub use preview::{
    DerivedKeyPath, ENV_ROOT_PREFIX, PreviewPhase, PreviewSession, PreviewSnapshot,
    canonical_reference, derive_update_key_path, is_custom_template,
};
pub use use_cases::{UpdateVariable, UpdateVariableError};
