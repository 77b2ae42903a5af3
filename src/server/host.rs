//! Server host for transport-agnostic API exposure
//!
//! The host owns everything a request handler may need: the catalog, the
//! AI assistant and the session registry. It knows nothing about HTTP.

use crate::config::PaletteConfig;
use crate::core::service::{CatalogService, GenerativeService};
use crate::genai::ArtAssistant;
use crate::storage::SessionStore;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::new(config, Arc::new(InMemoryCatalog::seeded()), backend);
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Effective configuration
    pub config: Arc<PaletteConfig>,

    /// Artworks, reviews, users and commissions
    pub catalog: Arc<dyn CatalogService>,

    /// Description writer and semantic search
    pub assistant: ArtAssistant,

    /// Live browsing sessions
    pub sessions: SessionStore,
}

impl ServerHost {
    pub fn new(
        config: PaletteConfig,
        catalog: Arc<dyn CatalogService>,
        generative: Arc<dyn GenerativeService>,
    ) -> Self {
        let assistant = ArtAssistant::new(generative, config.genai.search_limit);
        Self {
            config: Arc::new(config),
            catalog,
            assistant,
            sessions: SessionStore::new(),
        }
    }
}
