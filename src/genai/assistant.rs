//! Best-effort AI helpers for the storefront
//!
//! Every method here is infallible: backend failures are logged and turned
//! into a fixed fallback so callers never have to handle them.

use crate::core::artwork::{Artwork, ArtworkSummary};
use crate::core::service::GenerativeService;
use std::sync::Arc;

/// Returned when description generation fails
pub const FALLBACK_DESCRIPTION: &str =
    "The piece speaks for itself through its intricate details and unique composition.";

/// Returned when the backend answers with no text
pub const EMPTY_DESCRIPTION: &str = "No description generated.";

/// Description writer and semantic search over a generative backend
#[derive(Clone)]
pub struct ArtAssistant {
    backend: Arc<dyn GenerativeService>,
    search_limit: usize,
}

impl ArtAssistant {
    pub fn new(backend: Arc<dyn GenerativeService>, search_limit: usize) -> Self {
        Self {
            backend,
            search_limit,
        }
    }

    /// Write a short gallery description for a new listing
    pub async fn generate_description(&self, title: &str, category: &str, style: &str) -> String {
        let prompt = format!(
            "Generate a compelling, poetic 3-sentence description for a piece of artwork titled \"{}\" \
             which is in the \"{}\" category and has a \"{}\" style. \
             Keep it professional for an art gallery listing.",
            title, category, style
        );

        match self.backend.generate_text(&prompt).await {
            Ok(text) if text.is_empty() => EMPTY_DESCRIPTION.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, title = %title, "description generation failed");
                FALLBACK_DESCRIPTION.to_string()
            }
        }
    }

    /// Ids of the artworks that best match `query` by meaning
    ///
    /// Returns an empty list when the backend fails; ids the backend
    /// invents are kept as-is, since the filter pipeline simply won't match
    /// them.
    pub async fn semantic_search(&self, query: &str, artworks: &[Artwork]) -> Vec<String> {
        let summaries: Vec<ArtworkSummary<'_>> = artworks.iter().map(ArtworkSummary::from).collect();
        let catalog = match serde_json::to_string(&summaries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize artworks for search");
                return Vec::new();
            }
        };

        let prompt = format!(
            "Analyze the following user query for artwork: \"{}\".\n\
             From the provided list of artworks, identify the top {} IDs that best match \
             the query's mood, color, or subject matter.\n\
             Artworks: {}\n\
             Return only the IDs in a JSON array format.",
            query, self.search_limit, catalog
        );

        match self.backend.generate_string_list(&prompt).await {
            Ok(ids) => {
                tracing::debug!(query = %query, matches = ids.len(), "semantic search");
                ids
            }
            Err(e) => {
                tracing::error!(error = %e, query = %query, "semantic search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::GenAiError;
    use crate::storage::seed;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that replays a fixed answer and records prompts
    struct Scripted {
        text: Option<String>,
        ids: Option<Vec<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(text: Option<&str>, ids: Option<Vec<&str>>) -> Self {
            Self {
                text: text.map(str::to_string),
                ids: ids.map(|ids| ids.into_iter().map(str::to_string).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerativeService for Scripted {
        async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.text.clone().ok_or(GenAiError::MissingApiKey)
        }

        async fn generate_string_list(&self, prompt: &str) -> Result<Vec<String>, GenAiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.ids
                .clone()
                .ok_or_else(|| GenAiError::Malformed("scripted failure".to_string()))
        }
    }

    #[tokio::test]
    async fn test_description_passthrough() {
        let backend = Arc::new(Scripted::new(Some("Light pools in the valley."), None));
        let assistant = ArtAssistant::new(backend.clone(), 3);

        let text = assistant
            .generate_description("Morning Fog", "Photography", "moody")
            .await;
        assert_eq!(text, "Light pools in the valley.");

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("\"Morning Fog\""));
        assert!(prompts[0].contains("\"Photography\""));
        assert!(prompts[0].contains("\"moody\""));
    }

    #[tokio::test]
    async fn test_description_fallback_on_failure() {
        let assistant = ArtAssistant::new(Arc::new(Scripted::new(None, None)), 3);
        let text = assistant.generate_description("t", "c", "s").await;
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_description_placeholder_on_empty_text() {
        let assistant = ArtAssistant::new(Arc::new(Scripted::new(Some(""), None)), 3);
        let text = assistant.generate_description("t", "c", "s").await;
        assert_eq!(text, EMPTY_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_whitespace_description_kept() {
        let assistant = ArtAssistant::new(Arc::new(Scripted::new(Some("  "), None)), 3);
        let text = assistant.generate_description("t", "c", "s").await;
        assert_eq!(text, "  ");
    }

    #[tokio::test]
    async fn test_search_returns_backend_ids() {
        let backend = Arc::new(Scripted::new(None, Some(vec!["2", "4"])));
        let assistant = ArtAssistant::new(backend.clone(), 3);

        let ids = assistant
            .semantic_search("quiet nature", &seed::artworks())
            .await;
        assert_eq!(ids, vec!["2", "4"]);

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("top 3 IDs"));
        assert!(prompts[0].contains("\"title\":\"Silent Peaks\""));
        assert!(!prompts[0].contains("description"));
    }

    #[tokio::test]
    async fn test_search_failure_is_empty() {
        let assistant = ArtAssistant::new(Arc::new(Scripted::new(None, None)), 3);
        let ids = assistant.semantic_search("anything", &seed::artworks()).await;
        assert!(ids.is_empty());
    }
}
