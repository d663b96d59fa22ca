//! Marker scanner for `{{ reference }}` syntax
//!
//! Scans template text for substitution markers with their byte positions.
//! Unlike a lenient highlighter, the scanner treats an unterminated or empty
//! marker as an error so the renderer can report a malformed template.

use std::ops::Range;

use thiserror::Error;

/// A parsed substitution marker in a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    /// The reference name, with surrounding whitespace trimmed.
    pub name: String,

    /// Byte range of the whole marker, braces included.
    pub span: Range<usize>,
}

/// Errors reported while scanning a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{{` has no matching `}}`.
    #[error("unterminated marker opened at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening braces.
        offset: usize,
    },

    /// A marker contains no reference name.
    #[error("empty marker at byte {offset}")]
    EmptyMarker {
        /// Byte offset of the opening braces.
        offset: usize,
    },
}

/// Scans a template and returns every marker in order of appearance.
///
/// Text outside markers is ignored; a template with no `{{` yields an empty
/// list. Braces inside a marker name are not supported.
///
/// # Errors
/// Returns `ParseError` for an unterminated or empty marker.
pub fn scan_markers(input: &str) -> Result<Vec<MarkerSpan>, ParseError> {
    let mut markers = Vec::new();
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find("{{") {
        let open = cursor + found;
        let body_start = open + 2;

        let Some(len) = input[body_start..].find("}}") else {
            return Err(ParseError::Unterminated { offset: open });
        };
        let close = body_start + len + 2;

        let name = input[body_start..body_start + len].trim();
        if name.is_empty() {
            return Err(ParseError::EmptyMarker { offset: open });
        }

        markers.push(MarkerSpan {
            name: name.to_string(),
            span: open..close,
        });
        cursor = close;
    }

    Ok(markers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_markers() {
        assert_eq!(scan_markers("Hello, World!").unwrap(), Vec::new());
    }

    #[test]
    fn test_single_marker_with_span() {
        let input = "Hello {{ name }}!";
        let markers = scan_markers(input).unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "name");
        assert_eq!(&input[markers[0].span.clone()], "{{ name }}");
    }

    #[test]
    fn test_marker_without_padding() {
        let markers = scan_markers("{{name}}").unwrap();
        assert_eq!(markers[0].name, "name");
        assert_eq!(markers[0].span, 0..8);
    }

    #[test]
    fn test_dotted_reference_name() {
        let markers = scan_markers("{{ _.auth.token }}").unwrap();
        assert_eq!(markers[0].name, "_.auth.token");
    }

    #[test]
    fn test_multiple_markers_in_order() {
        let markers = scan_markers("https://{{ _.host }}:{{ _.port }}/api").unwrap();
        let names: Vec<_> = markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["_.host", "_.port"]);
    }

    #[test]
    fn test_adjacent_markers() {
        let markers = scan_markers("{{a}}{{b}}").unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].span, 5..10);
    }

    #[test]
    fn test_unterminated_marker() {
        assert_eq!(
            scan_markers("prefix {{ _.host"),
            Err(ParseError::Unterminated { offset: 7 })
        );
    }

    #[test]
    fn test_empty_marker() {
        assert_eq!(
            scan_markers("{{   }}"),
            Err(ParseError::EmptyMarker { offset: 0 })
        );
    }

    #[test]
    fn test_single_braces_are_plain_text() {
        assert_eq!(scan_markers("{name}").unwrap(), Vec::new());
    }
}
