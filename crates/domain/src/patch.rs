//! Nested patch construction
//!
//! Builds the single-rooted nested mapping that addresses one leaf of a
//! document's data tree with a new value.

use crate::key_path::KeyPath;
use crate::value::{ContextValue, ValueMap};

/// Builds a nested patch from a key path and a new leaf value.
///
/// The path is folded from its last segment outward: the innermost mapping
/// binds the final segment to `new_value`, and each preceding segment wraps
/// the accumulator in a fresh single-key mapping. Nesting depth equals the
/// number of segments.
///
/// `["a", "b", "c"]` with `"x"` yields `{"a": {"b": {"c": "x"}}}`.
///
/// The result is intended as a **full replacement** of the target document's
/// data field, not a merge; sibling keys outside the patch root are lost on
/// submission.
#[must_use]
pub fn build_nested_patch(path: &KeyPath, new_value: ContextValue) -> ContextValue {
    let mut segments = path.segments().iter().rev();
    // KeyPath guarantees at least one segment.
    let Some(leaf) = segments.next() else {
        return ContextValue::Map(ValueMap::new());
    };

    let mut accumulator = ValueMap::new();
    accumulator.insert(leaf.clone(), new_value);

    for segment in segments {
        let mut wrapper = ValueMap::new();
        wrapper.insert(segment.clone(), ContextValue::Map(accumulator));
        accumulator = wrapper;
    }

    ContextValue::Map(accumulator)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn patch_json(path: &[&str], value: ContextValue) -> String {
        let path = KeyPath::new(path.iter().copied()).unwrap();
        serde_json::to_string(&build_nested_patch(&path, value)).unwrap()
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(patch_json(&["k"], ContextValue::from(5i64)), r#"{"k":5.0}"#);
    }

    #[test]
    fn test_three_segments() {
        assert_eq!(
            patch_json(&["a", "b", "c"], ContextValue::from("x")),
            r#"{"a":{"b":{"c":"x"}}}"#
        );
    }

    #[test]
    fn test_depth_equals_path_length() {
        let path = KeyPath::new(["one", "two", "three", "four"]).unwrap();
        let mut value = &build_nested_patch(&path, ContextValue::from(true));

        for segment in ["one", "two", "three"] {
            value = value.get(segment).unwrap();
            assert!(value.is_map());
        }
        assert_eq!(value.get("four"), Some(&ContextValue::Bool(true)));
    }

    #[test]
    fn test_host_update_scenario() {
        let path = KeyPath::new(["host"]).unwrap();
        let patch = build_nested_patch(&path, ContextValue::from("api.example.com"));
        assert_eq!(
            patch.get("host").and_then(ContextValue::as_str),
            Some("api.example.com")
        );
        assert_eq!(patch.as_map().map(std::collections::BTreeMap::len), Some(1));
    }
}
