//! Stateless catalog endpoints

use super::AppState;
use crate::core::artwork::{Artwork, Review};
use crate::core::commission::{Commission, CommissionStatus};
use crate::core::error::{PaletteResult, RequestError};
use crate::core::filter::{ALL_CATEGORIES, filter_artworks};
use crate::core::query::{GalleryParams, PaginatedResponse};
use crate::server::extract::JsonBody;
use crate::storage::seed;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
pub struct ArtworkDetail {
    pub artwork: Artwork,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
pub struct CommissionStatusRequest {
    pub status: CommissionStatus,
}

/// GET /categories
pub async fn list_categories() -> Json<Value> {
    Json(json!({
        "all": ALL_CATEGORIES,
        "categories": seed::CATEGORIES,
    }))
}

/// GET /mediums
pub async fn list_mediums() -> Json<Value> {
    Json(json!({ "mediums": seed::MEDIUMS }))
}

/// GET /artworks?q=&category=&page=&limit=
///
/// Text and category filtering only; semantic relevance needs a session.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> PaletteResult<Json<PaginatedResponse<Artwork>>> {
    let artworks = state.catalog.list_artworks().await?;
    let matched: Vec<Artwork> = filter_artworks(&artworks, params.query(), &params.category(), None)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(PaginatedResponse::paginate(
        matched,
        params.page(),
        params.limit(),
    )))
}

/// GET /artworks/{id}
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PaletteResult<Json<ArtworkDetail>> {
    let artwork = state.catalog.get_artwork(&id).await?;
    let reviews = state.catalog.reviews_for(&id).await?;
    Ok(Json(ArtworkDetail { artwork, reviews }))
}

/// PUT /commissions/{id}/status
///
/// Only `ACCEPTED` and `REJECTED` may be requested here.
pub async fn update_commission_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<CommissionStatusRequest>,
) -> PaletteResult<Json<Commission>> {
    if !matches!(
        body.status,
        CommissionStatus::Accepted | CommissionStatus::Rejected
    ) {
        return Err(RequestError::InvalidParameter {
            name: "status".to_string(),
            message: format!("expected ACCEPTED or REJECTED, got {}", body.status.as_str()),
        }
        .into());
    }

    let commission = state.catalog.update_commission(&id, body.status).await?;
    Ok(Json(commission))
}
