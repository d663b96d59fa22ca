//! Context value types
//!
//! Values available for template substitution form a closed variant rather
//! than an open "any" type: scalar string/number/boolean/null, or a nested
//! mapping of further values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A mapping of names to context values, ordered by key.
pub type ValueMap = BTreeMap<String, ContextValue>;

/// A value that can appear in a render context or a document's data tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// Absent or intentionally empty value.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value. JSON numbers are modeled as f64.
    Number(f64),
    /// Text value.
    String(String),
    /// Nested mapping of further values.
    Map(ValueMap),
}

impl ContextValue {
    /// Returns the string slice if this is a `String` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested mapping if this is a `Map` value.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true if this value is a nested mapping.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Looks up a direct child by name within a `Map` value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.as_map().and_then(|map| map.get(name))
    }
}

impl fmt::Display for ContextValue {
    /// Renders the value the way it appears when substituted into a
    /// template: strings unquoted, numbers without a trailing `.0` when
    /// integral, mappings as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::String(s) => f.write_str(s),
            Self::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ContextValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<ValueMap> for ContextValue {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}
