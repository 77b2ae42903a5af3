//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::PaletteConfig;
use crate::core::service::{CatalogService, GenerativeService};
use crate::genai::GeminiClient;
use crate::storage::InMemoryCatalog;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the storefront server
///
/// Anything not supplied falls back to a default: the seeded in-memory
/// catalog and a [`GeminiClient`] built from the configuration.
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(PaletteConfig::from_env()?)
///     .with_catalog(InMemoryCatalog::seeded())
///     .serve_configured()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: PaletteConfig,
    catalog: Option<Arc<dyn CatalogService>>,
    generative: Option<Arc<dyn GenerativeService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: PaletteConfig::default_config(),
            catalog: None,
            generative: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: PaletteConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the catalog backend
    pub fn with_catalog(mut self, catalog: impl CatalogService + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Set the generative backend used for descriptions and semantic search
    pub fn with_generative_service(mut self, service: impl GenerativeService + 'static) -> Self {
        self.generative = Some(Arc::new(service));
        self
    }

    /// Add custom routes to the server
    ///
    /// ```ignore
    /// let extra = Router::new().route("/version", get(version_handler));
    /// ServerBuilder::new().with_custom_routes(extra).build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let catalog = self
            .catalog
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryCatalog::seeded()));

        let generative = match self.generative.take() {
            Some(service) => service,
            None => Arc::new(GeminiClient::from_config(&self.config.genai)?),
        };

        Ok(ServerHost::new(self.config, catalog, generative))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve on the address from `server.bind`
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        self.serve(&addr).await
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
