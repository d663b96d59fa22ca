//! In-memory environment store
//!
//! Holds environment documents and serves both sides of the preview engine's
//! document boundary: the render context (flattened, `_.`-prefixed entries
//! from the active document) and the update sink (whole-field data replace).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use stencil_application::ports::{
    ContextEntry, ContextError, ContextProvider, DocumentUpdater, RenderContext, UpdateError,
};
use stencil_application::preview::ENV_ROOT_PREFIX;
use stencil_domain::{ContextValue, DocumentId, EnvironmentDocument};

struct Inner {
    documents: HashMap<DocumentId, EnvironmentDocument>,
    active: Option<DocumentId>,
}

/// Stores environment documents in memory.
///
/// Cheap to clone; clones share the same underlying documents.
#[derive(Clone)]
pub struct InMemoryEnvironmentStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryEnvironmentStore {
    /// Creates an empty store with no active document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                documents: HashMap::new(),
                active: None,
            })),
        }
    }

    /// Creates a store holding one document, already active.
    #[must_use]
    pub fn with_active(document: EnvironmentDocument) -> Self {
        let store = Self::new();
        let id = store.insert(document);
        store.set_active(&id);
        store
    }

    /// Inserts a document, returning its id.
    pub fn insert(&self, document: EnvironmentDocument) -> DocumentId {
        let id = document.id.clone();
        self.lock().documents.insert(id.clone(), document);
        id
    }

    /// Marks the given document as active for context fetches.
    pub fn set_active(&self, id: &DocumentId) {
        self.lock().active = Some(id.clone());
    }

    /// Returns the id of the active document, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<DocumentId> {
        self.lock().active.clone()
    }

    /// Returns a copy of the document with the given id.
    #[must_use]
    pub fn document(&self, id: &DocumentId) -> Option<EnvironmentDocument> {
        self.lock().documents.get(id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryEnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContextProvider for InMemoryEnvironmentStore {
    async fn context(&self) -> Result<RenderContext, ContextError> {
        let inner = self.lock();
        let Some(active) = inner.active.as_ref() else {
            return Err(ContextError::Unavailable(
                "no active document".to_string(),
            ));
        };
        let document = inner.documents.get(active).ok_or_else(|| {
            ContextError::Unavailable(format!("active document missing: {active}"))
        })?;

        let keys = document
            .flatten()
            .into_iter()
            .map(|(path, value)| ContextEntry::new(format!("{ENV_ROOT_PREFIX}{path}"), value))
            .collect();

        Ok(RenderContext { keys })
    }
}

#[async_trait]
impl DocumentUpdater for InMemoryEnvironmentStore {
    /// Replaces the document's entire data field. Entries outside the patch
    /// root do not survive.
    async fn replace_data(&self, id: &DocumentId, patch: ContextValue) -> Result<(), UpdateError> {
        let data = match patch {
            ContextValue::Map(data) => data,
            other => {
                return Err(UpdateError::InvalidPatch(format!(
                    "expected a mapping, got {other}"
                )));
            }
        };

        let mut inner = self.lock();
        let document = inner
            .documents
            .get_mut(id)
            .ok_or_else(|| UpdateError::NotFound(id.to_string()))?;
        document.replace_data(data);
        Ok(())
    }
}
