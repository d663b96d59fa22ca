//! Preview session
//!
//! Owns the refresh loop for one editing session: every template or context
//! change starts a new refresh cycle that renders the template, re-fetches
//! the available context entries, and publishes the outcome. Only the most
//! recently started cycle may publish; superseded cycles find their ticket
//! stale and drop their results silently.

use std::sync::{Mutex, MutexGuard, PoisonError};

use stencil_domain::KeyPath;

use crate::ports::{ContextEntry, ContextProvider, TemplateRenderer};
use crate::preview::template::{DerivedKeyPath, derive_update_key_path, is_custom_template};

/// Where the session currently is in its render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    /// No refresh has run yet.
    Idle,
    /// A refresh cycle is in flight.
    Rendering,
    /// The latest cycle rendered successfully.
    Resolved,
    /// The latest cycle failed to render.
    Failed,
}

/// Read-only view of the session state for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSnapshot {
    /// Current cycle phase.
    pub phase: PreviewPhase,

    /// Rendered preview text. Populated exactly when `error` is not.
    pub preview: Option<String>,

    /// Human-readable render failure. Populated exactly when `preview` is not.
    pub error: Option<String>,

    /// Context entries available for selection, sorted by name.
    pub options: Vec<ContextEntry>,
}

struct SessionState {
    /// Monotonic cycle counter; a cycle's ticket is current while it equals
    /// this value.
    generation: u64,
    template: String,
    phase: PreviewPhase,
    preview: Option<String>,
    error: Option<String>,
    options: Vec<ContextEntry>,
}

/// A live preview of what the selected template string resolves to.
///
/// The session is driven by explicit change notifications rather than an
/// implicit dependency effect: the hosting view calls
/// [`on_template_changed`](Self::on_template_changed) when the bound input
/// changes and [`on_context_changed`](Self::on_context_changed) after an
/// external edit that may have altered the context.
pub struct PreviewSession<R, C> {
    renderer: R,
    provider: C,
    state: Mutex<SessionState>,
}

impl<R: TemplateRenderer, C: ContextProvider> PreviewSession<R, C> {
    /// Creates an idle session with an empty template.
    pub fn new(renderer: R, provider: C) -> Self {
        Self::with_template(renderer, provider, String::new())
    }

    /// Creates an idle session with an initial template string.
    pub fn with_template(renderer: R, provider: C, template: impl Into<String>) -> Self {
        Self {
            renderer,
            provider,
            state: Mutex::new(SessionState {
                generation: 0,
                template: template.into(),
                phase: PreviewPhase::Idle,
                preview: None,
                error: None,
                options: Vec::new(),
            }),
        }
    }

    /// Returns the currently selected template string.
    #[must_use]
    pub fn template(&self) -> String {
        self.lock().template.clone()
    }

    /// Records a new template string and runs a refresh cycle for it.
    pub async fn on_template_changed(&self, template: impl Into<String>) {
        self.lock().template = template.into();
        self.refresh().await;
    }

    /// Runs a refresh cycle for the current template, e.g. after a value
    /// update that may have changed what it resolves to.
    pub async fn on_context_changed(&self) {
        self.refresh().await;
    }

    /// Runs one refresh cycle: render, then re-fetch and sort the options.
    ///
    /// Cycles are never cancelled; a cycle that has been superseded by a
    /// newer one discards each of its outcomes at the corresponding
    /// publication point.
    pub async fn refresh(&self) {
        let (ticket, template) = {
            let mut state = self.lock();
            state.generation += 1;
            (state.generation, state.template.clone())
        };

        self.publish(ticket, |state| state.phase = PreviewPhase::Rendering);

        match self.renderer.render(&template).await {
            Ok(rendered) => self.publish(ticket, |state| {
                state.preview = Some(rendered);
                state.error = None;
                state.phase = PreviewPhase::Resolved;
            }),
            Err(e) => self.publish(ticket, |state| {
                state.preview = None;
                state.error = Some(e.to_string());
                state.phase = PreviewPhase::Failed;
            }),
        }

        match self.provider.context().await {
            Ok(context) => {
                let mut keys = context.keys;
                // Locale-naive byte-wise ordering; sort_by is stable, so
                // entries with equal names keep their provider order.
                keys.sort_by(|a, b| a.name.cmp(&b.name));
                self.publish(ticket, |state| state.options = keys);
            }
            Err(e) => {
                tracing::warn!(error = %e, "context fetch failed; clearing options");
                self.publish(ticket, |state| state.options.clear());
            }
        }
    }

    /// Returns a copy of the displayable state.
    #[must_use]
    pub fn snapshot(&self) -> PreviewSnapshot {
        let state = self.lock();
        PreviewSnapshot {
            phase: state.phase,
            preview: state.preview.clone(),
            error: state.error.clone(),
            options: state.options.clone(),
        }
    }

    /// Derives the key path an update of the current template would write
    /// through, classifying the template against the current options.
    #[must_use]
    pub fn update_key_path(&self) -> DerivedKeyPath {
        let (template, is_custom) = {
            let state = self.lock();
            (
                state.template.clone(),
                is_custom_template(&state.template, &state.options),
            )
        };
        derive_update_key_path(&template, is_custom)
    }

    /// Returns the key path to write `new_value` through, or `None` when no
    /// update should happen: the value already matches the preview, or no
    /// path is derivable from the current template.
    #[must_use]
    pub fn pending_update(&self, new_value: &str) -> Option<KeyPath> {
        if self.lock().preview.as_deref() == Some(new_value) {
            return None;
        }
        self.update_key_path().path().cloned()
    }

    /// Applies `f` to the state only if `ticket` still names the latest
    /// cycle. Stale cycles are dropped here, silently.
    fn publish(&self, ticket: u64, f: impl FnOnce(&mut SessionState)) {
        let mut state = self.lock();
        if state.generation == ticket {
            f(&mut state);
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
