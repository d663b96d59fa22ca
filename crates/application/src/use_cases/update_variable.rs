//! Update variable use case
//!
//! Writes a new scalar value back into an environment document through a
//! derived key path. Independent of the render loop: the hosting view calls
//! this when the user confirms a new value, then notifies the session so a
//! fresh cycle picks the change up.

use std::sync::Arc;

use stencil_domain::{ContextValue, DocumentId, KeyPath, build_nested_patch};
use tokio::task::JoinHandle;

use crate::ports::{DocumentUpdater, UpdateError};

/// Errors that can occur when updating a variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateVariableError {
    /// The document update was rejected by the store.
    #[error("failed to update document: {0}")]
    Submit(#[from] UpdateError),
}

/// Submits nested-patch updates for a single document.
pub struct UpdateVariable<U> {
    updater: Arc<U>,
}

impl<U: DocumentUpdater + 'static> UpdateVariable<U> {
    /// Creates a new `UpdateVariable` use case.
    pub const fn new(updater: Arc<U>) -> Self {
        Self { updater }
    }

    /// Builds the nested patch for `path` and submits it as a full
    /// replacement of the document's data field.
    ///
    /// The submission is fire-and-forget: the write runs on a spawned task
    /// and further edits are not blocked on its completion. Failures are
    /// logged; callers that need confirmation can await the returned handle.
    /// Rapid consecutive submissions race at the store's discretion.
    pub fn submit(
        &self,
        document_id: DocumentId,
        path: &KeyPath,
        new_value: impl Into<ContextValue>,
    ) -> JoinHandle<Result<(), UpdateVariableError>> {
        let patch = build_nested_patch(path, new_value.into());
        let updater = Arc::clone(&self.updater);

        tokio::spawn(async move {
            let result = updater.replace_data(&document_id, patch).await;
            if let Err(e) = &result {
                tracing::warn!(document = %document_id, error = %e, "variable update failed");
            }
            result.map_err(UpdateVariableError::Submit)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;

    struct RecordingUpdater {
        submissions: Mutex<Vec<(DocumentId, ContextValue)>>,
        reject: bool,
    }

    impl RecordingUpdater {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                submissions: Mutex::new(Vec::new()),
                reject: false,
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                submissions: Mutex::new(Vec::new()),
                reject: true,
            })
        }

        fn submissions(&self) -> Vec<(DocumentId, ContextValue)> {
            self.submissions.lock().expect("lock poisoned").clone()
        }
    }

    #[async_trait]
    impl DocumentUpdater for RecordingUpdater {
        async fn replace_data(
            &self,
            id: &DocumentId,
            patch: ContextValue,
        ) -> Result<(), UpdateError> {
            if self.reject {
                return Err(UpdateError::NotFound(id.to_string()));
            }
            self.submissions
                .lock()
                .expect("lock poisoned")
                .push((id.clone(), patch));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_submit_builds_and_sends_nested_patch() {
        let updater = RecordingUpdater::new();
        let use_case = UpdateVariable::new(Arc::clone(&updater));

        let id = DocumentId::generate();
        let path = KeyPath::new(["auth", "token"]).unwrap();
        use_case
            .submit(id.clone(), &path, "new-token")
            .await
            .unwrap()
            .unwrap();

        let submissions = updater.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, id);

        let patch = &submissions[0].1;
        let token = patch.get("auth").and_then(|v| v.get("token"));
        assert_eq!(
            token.and_then(ContextValue::as_str),
            Some("new-token")
        );
    }

    #[tokio::test]
    async fn test_submit_failure_is_reported_on_handle() {
        let updater = RecordingUpdater::rejecting();
        let use_case = UpdateVariable::new(Arc::clone(&updater));

        let id = DocumentId::generate();
        let path = KeyPath::new(["host"]).unwrap();
        let result = use_case.submit(id, &path, "value").await.unwrap();

        assert!(matches!(
            result,
            Err(UpdateVariableError::Submit(UpdateError::NotFound(_)))
        ));
        assert!(updater.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_host_scenario_patch_shape() {
        let updater = RecordingUpdater::new();
        let use_case = UpdateVariable::new(Arc::clone(&updater));

        let path = KeyPath::new(["host"]).unwrap();
        use_case
            .submit(DocumentId::generate(), &path, "api.example.com")
            .await
            .unwrap()
            .unwrap();

        let patch = &updater.submissions()[0].1;
        assert_eq!(
            patch.get("host").and_then(ContextValue::as_str),
            Some("api.example.com")
        );
    }
}
