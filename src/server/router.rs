//! Route tables for the REST exposure

use crate::server::handlers::AppState;
use crate::server::handlers::{catalog, dashboard, session};
use axum::{
    Router,
    routing::{get, patch, post, put},
};

/// Stateless catalog routes
///
/// - GET /categories, GET /mediums
/// - GET /artworks, GET /artworks/{id}
/// - PUT /commissions/{id}/status
pub fn build_catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/mediums", get(catalog::list_mediums))
        .route("/artworks", get(catalog::list_artworks))
        .route("/artworks/{id}", get(catalog::get_artwork))
        .route(
            "/commissions/{id}/status",
            put(catalog::update_commission_status),
        )
        .with_state(state)
}

/// Per-session routes under /sessions/{id}
pub fn build_session_routes(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(session::create_session))
        .route(
            "/sessions/{id}",
            get(session::get_session).delete(session::delete_session),
        )
        .route("/sessions/{id}/gallery", get(session::gallery))
        .route("/sessions/{id}/query", put(session::set_query))
        .route("/sessions/{id}/category", put(session::set_category))
        .route("/sessions/{id}/search", post(session::search))
        .route("/sessions/{id}/filters/reset", post(session::reset_filters))
        .route(
            "/sessions/{id}/artworks/{artwork_id}/select",
            post(session::select_artwork),
        )
        .route(
            "/sessions/{id}/artworks/{artwork_id}/purchase",
            post(session::purchase),
        )
        .route("/sessions/{id}/back", post(session::back))
        .route("/sessions/{id}/navigate", post(session::navigate))
        .route("/sessions/{id}/role", put(session::set_role))
        .route(
            "/sessions/{id}/favorites/{artwork_id}",
            post(session::toggle_favorite),
        )
        .route("/sessions/{id}/dashboard", get(dashboard::get_dashboard))
        .route("/sessions/{id}/dashboard/tab", put(dashboard::select_tab))
        .route("/sessions/{id}/draft", patch(dashboard::update_draft))
        .route(
            "/sessions/{id}/draft/describe",
            post(dashboard::describe_draft),
        )
        .with_state(state)
}
