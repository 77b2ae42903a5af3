//! Dashboard endpoints: tabs, overview figures and the artist's draft

use super::AppState;
use crate::core::commission::{Commission, CommissionStatus, Sale};
use crate::core::error::{PaletteError, PaletteResult, RequestError};
use crate::core::session::{ArtworkDraft, DashboardTab, DraftUpdate, Session};
use crate::core::user::{User, UserRole};
use crate::server::extract::{JsonBody, parse_session_id};
use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: DashboardTab,
}

/// Headline figures for the overview tab
#[derive(Debug, Serialize)]
pub struct Overview {
    pub total_earnings: f64,
    pub sales_count: usize,
    pub pending_commissions: usize,
    pub favorites_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub role: UserRole,
    pub identity: &'static str,
    pub profile: Option<User>,
    pub tab: DashboardTab,
    pub available_tabs: Vec<DashboardTab>,
    pub overview: Overview,
    pub sales: Vec<Sale>,
    pub commissions: Vec<Commission>,
    /// Only present for artists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<ArtworkDraft>,
    pub generating: bool,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: ArtworkDraft,
    pub generating: bool,
}

impl DraftResponse {
    fn of(session: &Session) -> Self {
        Self {
            draft: session.draft().clone(),
            generating: session.is_generating(),
        }
    }
}

fn require_artist(session: &Session) -> PaletteResult<()> {
    if session.role() != UserRole::Artist {
        return Err(RequestError::Forbidden {
            message: format!("the portfolio draft is not available to {}", session.role()),
        }
        .into());
    }
    Ok(())
}

async fn dashboard_for(state: &AppState, id: &Uuid) -> PaletteResult<DashboardResponse> {
    let session = state.sessions.get(id)?;
    let role = session.role();

    let artworks = state.catalog.list_artworks().await?;
    let sales = Sale::from_sold(&artworks);
    let commissions = state.catalog.list_commissions().await?;
    let profile = state.catalog.user_for_role(role).await?;

    let overview = Overview {
        total_earnings: sales.iter().map(|sale| sale.price).sum(),
        sales_count: sales.len(),
        pending_commissions: commissions
            .iter()
            .filter(|c| c.status == CommissionStatus::Pending)
            .count(),
        favorites_count: session.favorites().len(),
    };

    Ok(DashboardResponse {
        role,
        identity: session.identity(),
        profile,
        tab: session.dashboard_tab(),
        available_tabs: session.available_tabs(),
        overview,
        sales,
        commissions,
        draft: (role == UserRole::Artist).then(|| session.draft().clone()),
        generating: session.is_generating(),
    })
}

/// GET /sessions/{id}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<DashboardResponse>> {
    let id = parse_session_id(&session_id)?;
    Ok(Json(dashboard_for(&state, &id).await?))
}

/// PUT /sessions/{id}/dashboard/tab
pub async fn select_tab(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(body): JsonBody<TabRequest>,
) -> PaletteResult<Json<DashboardResponse>> {
    let id = parse_session_id(&session_id)?;
    state
        .sessions
        .update(&id, |s| s.select_tab(body.tab).map_err(Into::into))?;
    Ok(Json(dashboard_for(&state, &id).await?))
}

/// PATCH /sessions/{id}/draft
pub async fn update_draft(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    JsonBody(update): JsonBody<DraftUpdate>,
) -> PaletteResult<Json<DraftResponse>> {
    let id = parse_session_id(&session_id)?;
    let response = state.sessions.update(&id, |s| {
        require_artist(s)?;
        s.update_draft(update);
        Ok(DraftResponse::of(s))
    })?;
    Ok(Json(response))
}

/// POST /sessions/{id}/draft/describe
///
/// Fills the draft description from the assistant. A draft without a
/// title or style is returned unchanged. Generation runs on a spawned task
/// so the busy flag is cleared even if the client goes away.
pub async fn describe_draft(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> PaletteResult<Json<DraftResponse>> {
    let id = parse_session_id(&session_id)?;

    let request = state.sessions.update(&id, |s| {
        require_artist(s)?;
        Ok(s.begin_describe())
    })?;

    if let Some(request) = request {
        let task_state = state.clone();
        let task = tokio::spawn(async move {
            let description = task_state
                .assistant
                .generate_description(&request.title, &request.category, &request.style)
                .await;
            task_state.sessions.update(&id, |s| {
                s.complete_describe(description);
                Ok(())
            })
        });
        task.await
            .map_err(|e| PaletteError::Internal(format!("describe task failed: {}", e)))??;
    }

    let session = state.sessions.get(&id)?;
    Ok(Json(DraftResponse::of(&session)))
}
