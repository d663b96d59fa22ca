//! Template classification and key path derivation
//!
//! Pure helpers over the selected template string: deciding whether it is a
//! plain reference to a known context entry, and extracting the key path a
//! value update would address.

use stencil_domain::KeyPath;

use crate::ports::ContextEntry;

/// Two-character namespace prefix denoting the current environment data root.
pub const ENV_ROOT_PREFIX: &str = "_.";

/// Returns the canonical reference form for a context entry name.
///
/// An entry named `_.host` is selected as `{{ _.host }}`.
#[must_use]
pub fn canonical_reference(name: &str) -> String {
    format!("{{{{ {name} }}}}")
}

/// Classifies a template string as custom free text or a plain reference.
///
/// A template is custom iff it does not exactly equal the canonical
/// reference form of any known entry. Pure and total.
#[must_use]
pub fn is_custom_template(template: &str, known: &[ContextEntry]) -> bool {
    !known
        .iter()
        .any(|entry| template == canonical_reference(&entry.name))
}

/// Outcome of deriving an update key path from a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedKeyPath {
    /// A path was derived; updates write through it.
    Path(KeyPath),

    /// No path is derivable: the template is custom text, or the reference
    /// expression yielded no segments.
    NotDerivable,

    /// The reference expression does not start with [`ENV_ROOT_PREFIX`].
    /// Also "cannot derive", but signalled separately for diagnostics.
    MissingPrefix,
}

impl DerivedKeyPath {
    /// Returns the key path if one was derived.
    #[must_use]
    pub fn path(&self) -> Option<&KeyPath> {
        match self {
            Self::Path(path) => Some(path),
            Self::NotDerivable | Self::MissingPrefix => None,
        }
    }
}

/// Derives the update key path from a template string.
///
/// Only a non-custom template (one matching the canonical reference form of
/// a known entry) carries a path. The inner expression must start with
/// [`ENV_ROOT_PREFIX`]; the remainder splits on `.` into path segments.
#[must_use]
pub fn derive_update_key_path(template: &str, is_custom: bool) -> DerivedKeyPath {
    if is_custom {
        return DerivedKeyPath::NotDerivable;
    }

    let Some(inner) = strip_reference_delimiters(template) else {
        return DerivedKeyPath::NotDerivable;
    };

    let Some(expression) = inner.strip_prefix(ENV_ROOT_PREFIX) else {
        tracing::warn!(reference = inner, "update key must start with '_.'");
        return DerivedKeyPath::MissingPrefix;
    };

    KeyPath::parse_dotted(expression).map_or(DerivedKeyPath::NotDerivable, DerivedKeyPath::Path)
}

/// Strips the wrapping `{{ }}` delimiters, returning the trimmed inner
/// expression, or `None` if the template is not a single wrapped reference.
fn strip_reference_delimiters(template: &str) -> Option<&str> {
    template
        .trim()
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .map(str::trim)
}
