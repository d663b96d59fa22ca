//! Stencil Domain - Core types for template preview and variable updates
//!
//! This crate defines the domain model for the Stencil template preview
//! engine. All types here are pure Rust with no I/O dependencies.

pub mod document;
pub mod error;
pub mod id;
pub mod key_path;
pub mod patch;
pub mod value;

pub use document::{DocumentId, EnvironmentDocument};
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use key_path::KeyPath;
pub use patch::build_nested_patch;
pub use value::{ContextValue, ValueMap};
