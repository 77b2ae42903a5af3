//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router`.

use super::super::host::ServerHost;
use crate::server::handlers::AppState;
use crate::server::router::{build_catalog_routes, build_session_routes};
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Catalog routes
    /// - Session routes
    /// - Custom routes
    ///
    /// wrapped in request tracing and permissive CORS.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = AppState::from_host(&host);

        let mut app = Self::health_routes()
            .merge(build_catalog_routes(state.clone()))
            .merge(build_session_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "palette"
        }))
    }
}
