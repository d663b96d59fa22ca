//! Live template preview
//!
//! The refresh loop that keeps a preview of the selected template string
//! current, plus the pure helpers that classify a template and derive the
//! key path an update would write through.

pub mod session;
pub mod template;

pub use session::{PreviewPhase, PreviewSession, PreviewSnapshot};
pub use template::{
    DerivedKeyPath, ENV_ROOT_PREFIX, canonical_reference, derive_update_key_path,
    is_custom_template,
};
