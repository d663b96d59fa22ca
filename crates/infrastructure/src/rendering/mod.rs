//! Template rendering
//!
//! Marker scanning and substitution for `{{ reference }}` syntax.

pub mod parser;
pub mod renderer;

pub use parser::{MarkerSpan, ParseError, scan_markers};
pub use renderer::SubstitutionRenderer;
