//! Stencil Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: a substitution renderer over `{{ reference }}` markers
//! and an in-memory environment store serving as both context provider and
//! document updater.

pub mod rendering;
pub mod store;

pub use rendering::{MarkerSpan, ParseError, SubstitutionRenderer, scan_markers};
pub use store::InMemoryEnvironmentStore;
