//! HTTP handlers for the REST exposure

pub mod catalog;
pub mod dashboard;
pub mod session;

use crate::core::service::CatalogService;
use crate::genai::ArtAssistant;
use crate::server::host::ServerHost;
use crate::storage::SessionStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub assistant: ArtAssistant,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn from_host(host: &ServerHost) -> Self {
        Self {
            catalog: host.catalog.clone(),
            assistant: host.assistant.clone(),
            sessions: host.sessions.clone(),
        }
    }
}
