//! Environment documents
//!
//! The document holding the variable data a template renders against. The
//! preview engine only reads and replaces the `data` tree; everything else
//! about document storage lives behind ports.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;
use crate::value::{ContextValue, ValueMap};

/// Opaque identifier for a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wraps an existing identifier string.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidDocumentId` if the string is empty.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidDocumentId(id));
        }
        Ok(Self(id))
    }

    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named document whose `data` tree feeds the render context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDocument {
    /// Stable identifier.
    pub id: DocumentId,

    /// Display name.
    pub name: String,

    /// Variable data tree. Leaves are scalars; interior nodes are mappings.
    #[serde(default)]
    pub data: ValueMap,
}

impl EnvironmentDocument {
    /// Creates an empty document with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::generate(),
            name: name.into(),
            data: ValueMap::new(),
        }
    }

    /// Sets a top-level data entry, returning self for chaining.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Replaces the entire data tree with the given mapping.
    ///
    /// This is a whole-field replacement, not a merge: previous entries not
    /// present in `data` are gone afterwards.
    pub fn replace_data(&mut self, data: ValueMap) {
        self.data = data;
    }

    /// Flattens the data tree into `(dotted-path, value)` leaf pairs.
    ///
    /// Interior mappings are traversed, not emitted; `{host, auth: {token}}`
    /// yields `host` and `auth.token`. Order follows the mapping's key order.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, ContextValue)> {
        let mut leaves = Vec::new();
        flatten_into(&self.data, None, &mut leaves);
        leaves
    }
}

fn flatten_into(map: &ValueMap, prefix: Option<&str>, out: &mut Vec<(String, ContextValue)>) {
    for (name, value) in map {
        let path = prefix.map_or_else(|| name.clone(), |p| format!("{p}.{name}"));
        match value {
            ContextValue::Map(inner) => flatten_into(inner, Some(&path), out),
            leaf => out.push((path, leaf.clone())),
        }
    }
}
