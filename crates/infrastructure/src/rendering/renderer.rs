//! Substitution renderer
//!
//! Implements the `TemplateRenderer` port by substituting `{{ reference }}`
//! markers with values from a context provider. The context is re-fetched on
//! every render so the preview always reflects the latest document state.

use std::collections::HashMap;

use async_trait::async_trait;
use stencil_application::ports::{ContextProvider, RenderError, TemplateRenderer};
use stencil_domain::ContextValue;

use super::parser::{ParseError, scan_markers};

/// Renders templates against whatever context its provider currently serves.
#[derive(Debug, Clone)]
pub struct SubstitutionRenderer<C> {
    provider: C,
}

impl<C: ContextProvider> SubstitutionRenderer<C> {
    /// Creates a renderer over the given context provider.
    pub const fn new(provider: C) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<C: ContextProvider> TemplateRenderer for SubstitutionRenderer<C> {
    async fn render(&self, template: &str) -> Result<String, RenderError> {
        let markers = scan_markers(template).map_err(|e| {
            let offset = match e {
                ParseError::Unterminated { offset } | ParseError::EmptyMarker { offset } => offset,
            };
            RenderError::Malformed {
                offset,
                detail: e.to_string(),
            }
        })?;

        // Identity for marker-free text, no context fetch needed.
        if markers.is_empty() {
            return Ok(template.to_string());
        }

        let context = self
            .provider
            .context()
            .await
            .map_err(|e| RenderError::ContextUnavailable(e.to_string()))?;
        let values: HashMap<&str, &ContextValue> = context
            .keys
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.value))
            .collect();

        let mut rendered = String::with_capacity(template.len());
        let mut last_end = 0;

        for marker in &markers {
            rendered.push_str(&template[last_end..marker.span.start]);

            let Some(value) = values.get(marker.name.as_str()) else {
                return Err(RenderError::UnknownReference {
                    name: marker.name.clone(),
                });
            };
            rendered.push_str(&value.to_string());

            last_end = marker.span.end;
        }
        rendered.push_str(&template[last_end..]);

        Ok(rendered)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use stencil_application::ports::{ContextEntry, ContextError, RenderContext};

    use super::*;

    #[derive(Clone)]
    struct StaticProvider {
        keys: Vec<ContextEntry>,
    }

    #[async_trait]
    impl ContextProvider for StaticProvider {
        async fn context(&self) -> Result<RenderContext, ContextError> {
            Ok(RenderContext {
                keys: self.keys.clone(),
            })
        }
    }

    fn renderer() -> SubstitutionRenderer<StaticProvider> {
        SubstitutionRenderer::new(StaticProvider {
            keys: vec![
                ContextEntry::new("_.host", "localhost"),
                ContextEntry::new("_.port", ContextValue::from(8080i64)),
                ContextEntry::new("_.auth.token", "abc123"),
            ],
        })
    }

    #[tokio::test]
    async fn test_marker_free_template_renders_to_itself() {
        let input = "https://example.com/api?q=1";
        assert_eq!(renderer().render(input).await.unwrap(), input);
    }

    #[tokio::test]
    async fn test_single_reference() {
        assert_eq!(
            renderer().render("{{ _.host }}").await.unwrap(),
            "localhost"
        );
    }

    #[tokio::test]
    async fn test_mixed_text_and_references() {
        assert_eq!(
            renderer()
                .render("https://{{ _.host }}:{{ _.port }}/v1")
                .await
                .unwrap(),
            "https://localhost:8080/v1"
        );
    }

    #[tokio::test]
    async fn test_dotted_reference() {
        assert_eq!(
            renderer()
                .render("Bearer {{ _.auth.token }}")
                .await
                .unwrap(),
            "Bearer abc123"
        );
    }

    #[tokio::test]
    async fn test_unknown_reference_fails_with_name() {
        let err = renderer().render("{{ _.missing }}").await.unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownReference {
                name: "_.missing".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown variable: _.missing");
    }

    #[tokio::test]
    async fn test_malformed_template_fails() {
        let err = renderer().render("{{ _.host").await.unwrap_err();
        assert!(matches!(err, RenderError::Malformed { offset: 0, .. }));
    }
}
