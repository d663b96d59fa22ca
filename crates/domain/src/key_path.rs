//! Key paths addressing a leaf inside a document's data tree.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// An ordered, non-empty sequence of segments addressing a nested value.
///
/// `["auth", "token"]` addresses `data.auth.token`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Creates a key path from the given segments.
    ///
    /// # Errors
    /// Returns `DomainError::EmptyKeyPath` for an empty sequence and
    /// `DomainError::InvalidKeyPathSegment` if any segment is empty.
    pub fn new<I, S>(segments: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(DomainError::EmptyKeyPath);
        }
        if let Some(bad) = segments.iter().find(|s| s.is_empty()) {
            return Err(DomainError::InvalidKeyPathSegment(bad.clone()));
        }
        Ok(Self { segments })
    }

    /// Parses a dotted expression such as `auth.token` into a key path.
    ///
    /// Empty segments produced by stray separators are skipped, mirroring
    /// how reference expressions are tokenized.
    ///
    /// # Errors
    /// Returns `DomainError::EmptyKeyPath` if no non-empty segment remains.
    pub fn parse_dotted(expression: &str) -> DomainResult<Self> {
        Self::new(expression.split('.').filter(|s| !s.is_empty()))
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A key path is never empty; this exists for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_rejects_empty_sequence() {
        let result = KeyPath::new(Vec::<String>::new());
        assert_eq!(result, Err(DomainError::EmptyKeyPath));
    }

    #[test]
    fn test_new_rejects_empty_segment() {
        let result = KeyPath::new(["a", ""]);
        assert_eq!(
            result,
            Err(DomainError::InvalidKeyPathSegment(String::new()))
        );
    }

    #[test]
    fn test_parse_dotted() {
        let path = KeyPath::parse_dotted("auth.token").unwrap();
        assert_eq!(path.segments(), ["auth", "token"]);
    }

    #[test]
    fn test_parse_dotted_skips_stray_separators() {
        let path = KeyPath::parse_dotted("a..b.").unwrap();
        assert_eq!(path.segments(), ["a", "b"]);
    }

    #[test]
    fn test_parse_dotted_all_empty() {
        assert_eq!(KeyPath::parse_dotted("."), Err(DomainError::EmptyKeyPath));
    }

    #[test]
    fn test_display_joins_with_dots() {
        let path = KeyPath::new(["a", "b", "c"]).unwrap();
        assert_eq!(path.to_string(), "a.b.c");
    }
}
