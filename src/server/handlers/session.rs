//! Session endpoints: gallery filtering, navigation, favorites and purchases

use super::AppState;
use crate::core::artwork::Artwork;
use crate::core::error::{CatalogError, PaletteError, PaletteResult, RequestError};
use crate::core::filter::{CategoryFilter, MatchMode};
use crate::core::session::{NavTarget, Session, SessionSnapshot};
use crate::core::user::UserRole;
use crate::server::extract::{JsonBody, parse_session_id};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: CategoryFilter,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub target: NavTarget,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: UserRole,
}

/// The filtered gallery as seen by one session
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub artworks: Vec<Artwork>,
    pub count: usize,
    /// True when the filters exclude every artwork
    pub no_results: bool,
    pub query: String,
    pub category: CategoryFilter,
    pub match_mode: MatchMode,
    pub searching: bool,
}

impl GalleryResponse {
    fn build(session: &Session, items: &[Artwork]) -> Self {
        let artworks: Vec<Artwork> = session.gallery(items).into_iter().cloned().collect();
        let filter = session.filter();
        Self {
            count: artworks.len(),
            no_results: artworks.is_empty(),
            artworks,
            query: filter.query.clone(),
            category: filter.category.clone(),
            match_mode: filter.mode(),
            searching: session.is_searching(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub artwork_id: String,
    pub favorited: bool,
    pub favorites: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub artwork_id: String,
    pub message: String,
}

/// POST /sessions
///
/// The body is optional; without one the session starts as a buyer.
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> PaletteResult<(StatusCode, Json<SessionSnapshot>)> {
    let request: CreateSessionRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| RequestError::InvalidBody {
            message: e.to_string(),
        })?
    };

    let session = state.sessions.create(request.role)?;
    Ok((StatusCode::CREATED, Json(session.snapshot())))
}

/// GET /sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&session_id)?;
    Ok(Json(state.sessions.get(&id)?.snapshot()))
}

/// DELETE /sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<StatusCode> {
    let id = parse_session_id(&session_id)?;
    state.sessions.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /sessions/{id}/gallery
pub async fn gallery(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<GalleryResponse>> {
    let id = parse_session_id(&session_id)?;
    let artworks = state.catalog.list_artworks().await?;
    let session = state.sessions.get(&id)?;
    Ok(Json(GalleryResponse::build(&session, &artworks)))
}

/// PUT /sessions/{id}/query
pub async fn set_query(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody<QueryRequest>,
) -> PaletteResult<Json<GalleryResponse>> {
    let id = parse_session_id(&session_id)?;
    let artworks = state.catalog.list_artworks().await?;
    let session = state.sessions.update(&id, |s| {
        s.set_query(body.query);
        Ok(s.clone())
    })?;
    Ok(Json(GalleryResponse::build(&session, &artworks)))
}

/// PUT /sessions/{id}/category
pub async fn set_category(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody<CategoryRequest>,
) -> PaletteResult<Json<GalleryResponse>> {
    let id = parse_session_id(&session_id)?;
    let artworks = state.catalog.list_artworks().await?;
    let session = state.sessions.update(&id, |s| {
        s.set_category(body.category);
        Ok(s.clone())
    })?;
    Ok(Json(GalleryResponse::build(&session, &artworks)))
}

/// POST /sessions/{id}/search
///
/// Asks the assistant for the artworks matching the current query by
/// meaning. The session lock is released while the assistant runs; if
/// another search starts meanwhile, this response is discarded.
///
/// The assistant call and its completion run on a spawned task, so the
/// busy flag is cleared even if the client goes away mid-request.
pub async fn search(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<GalleryResponse>> {
    let id = parse_session_id(&session_id)?;
    let artworks = state.catalog.list_artworks().await?;

    if let Some(ticket) = state.sessions.update(&id, |s| Ok(s.begin_search()))? {
        let task_state = state.clone();
        let task_artworks = artworks.clone();
        let task = tokio::spawn(async move {
            let ids = task_state
                .assistant
                .semantic_search(ticket.query(), &task_artworks)
                .await;
            let applied = task_state
                .sessions
                .update(&id, |s| Ok(s.complete_search(&ticket, ids)))?;
            tracing::debug!(session_id = %id, seq = ticket.seq(), applied, "search completed");
            Ok::<_, PaletteError>(())
        });
        task.await
            .map_err(|e| PaletteError::Internal(format!("search task failed: {}", e)))??;
    }

    let session = state.sessions.get(&id)?;
    Ok(Json(GalleryResponse::build(&session, &artworks)))
}

/// POST /sessions/{id}/filters/reset
pub async fn reset_filters(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<GalleryResponse>> {
    let id = parse_session_id(&session_id)?;
    let artworks = state.catalog.list_artworks().await?;
    let session = state.sessions.update(&id, |s| {
        s.reset_filters();
        Ok(s.clone())
    })?;
    Ok(Json(GalleryResponse::build(&session, &artworks)))
}

/// POST /sessions/{id}/artworks/{artwork_id}/select
pub async fn select_artwork(
    State(state): State<AppState>,
    Path((session_id, artwork_id)): Path<(String, String)>,
) -> PaletteResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&session_id)?;
    let artwork = state.catalog.get_artwork(&artwork_id).await?;
    let snapshot = state.sessions.update(&id, |s| {
        s.select_artwork(artwork);
        Ok(s.snapshot())
    })?;
    Ok(Json(snapshot))
}

/// POST /sessions/{id}/back
pub async fn back(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&session_id)?;
    let snapshot = state.sessions.update(&id, |s| {
        s.back();
        Ok(s.snapshot())
    })?;
    Ok(Json(snapshot))
}

/// POST /sessions/{id}/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody<NavigateRequest>,
) -> PaletteResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&session_id)?;
    let snapshot = state.sessions.update(&id, |s| {
        s.navigate(body.target);
        Ok(s.snapshot())
    })?;
    Ok(Json(snapshot))
}

/// PUT /sessions/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody<RoleRequest>,
) -> PaletteResult<Json<SessionSnapshot>> {
    let id = parse_session_id(&session_id)?;
    let snapshot = state.sessions.update(&id, |s| {
        s.set_role(body.role);
        Ok(s.snapshot())
    })?;
    Ok(Json(snapshot))
}

/// POST /sessions/{id}/favorites/{artwork_id}
///
/// Toggles membership and reports the new state.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path((session_id, artwork_id)): Path<(String, String)>,
) -> PaletteResult<Json<FavoriteResponse>> {
    let id = parse_session_id(&session_id)?;
    state.catalog.get_artwork(&artwork_id).await?;

    let response = state.sessions.update(&id, |s| {
        let favorited = s.toggle_favorite(&artwork_id);
        Ok(FavoriteResponse {
            favorites: s.favorites().iter().cloned().collect(),
            artwork_id: artwork_id.clone(),
            favorited,
        })
    })?;
    Ok(Json(response))
}

/// POST /sessions/{id}/artworks/{artwork_id}/purchase
///
/// Acknowledges the purchase of an available artwork; nothing is recorded.
pub async fn purchase(
    State(state): State<AppState>,
    Path((session_id, artwork_id)): Path<(String, String)>,
) -> PaletteResult<Json<PurchaseResponse>> {
    let id = parse_session_id(&session_id)?;
    state.sessions.get(&id)?;

    let artwork = state.catalog.get_artwork(&artwork_id).await?;
    if !artwork.is_available() {
        return Err(CatalogError::NotAvailable {
            id: artwork.id,
            status: artwork.status,
        }
        .into());
    }

    tracing::info!(session_id = %id, artwork_id = %artwork.id, "purchase acknowledged");
    Ok(Json(PurchaseResponse {
        message: format!("Purchasing {} for ${}", artwork.title, artwork.price),
        artwork_id: artwork.id,
    }))
}
