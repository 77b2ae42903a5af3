//! Browsing session state and its transitions
//!
//! A [`Session`] holds everything the storefront tracks for one visitor:
//! the current view, the active role, favorites, gallery filters, the
//! dashboard tab and the portfolio draft. All changes go through named
//! transition methods so they can be tested without any rendering layer.
//!
//! # Views
//!
//! ```text
//!   Gallery ──select──▶ Detail ──back──▶ Gallery
//!   Dashboard ─select─▶ Detail
//!   any view ──navigate(Gallery | Dashboard)──▶ target (selection cleared)
//! ```
//!
//! # Overlapping searches
//!
//! Semantic searches are asynchronous. Each call to
//! [`Session::begin_search`] issues a [`SearchTicket`] with a strictly
//! increasing sequence number; [`Session::complete_search`] only applies
//! the response of the most recently issued ticket. Earlier responses that
//! arrive late are dropped, so the last request wins.

use crate::core::artwork::Artwork;
use crate::core::error::SessionError;
use crate::core::filter::{CategoryFilter, FilterState, MatchMode};
use crate::core::user::UserRole;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The screen a session is looking at
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "name", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Gallery,
    /// Detail always carries the artwork being shown
    Detail { artwork: Artwork },
    Dashboard,
}

impl View {
    pub fn selected_artwork(&self) -> Option<&Artwork> {
        match self {
            View::Detail { artwork } => Some(artwork),
            _ => None,
        }
    }
}

/// Destinations reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavTarget {
    Gallery,
    Dashboard,
}

/// Dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardTab {
    #[default]
    Overview,
    Portfolio,
    Orders,
    Commissions,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Portfolio,
        DashboardTab::Orders,
        DashboardTab::Commissions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "OVERVIEW",
            DashboardTab::Portfolio => "PORTFOLIO",
            DashboardTab::Orders => "ORDERS",
            DashboardTab::Commissions => "COMMISSIONS",
        }
    }

    /// Whether `role` is offered this tab (only artists upload portfolio pieces)
    pub fn is_available_to(&self, role: UserRole) -> bool {
        match self {
            DashboardTab::Portfolio => role == UserRole::Artist,
            _ => true,
        }
    }

    /// Tabs offered to `role`, in display order
    pub fn available_to(role: UserRole) -> Vec<DashboardTab> {
        Self::ALL
            .into_iter()
            .filter(|tab| tab.is_available_to(role))
            .collect()
    }
}

/// Work-in-progress listing an artist fills in on the portfolio tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkDraft {
    pub title: String,
    pub category: String,
    pub medium: String,
    pub style: String,
    pub description: String,
    pub price: String,
    pub dimensions: String,
}

impl Default for ArtworkDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: "Oil Painting".to_string(),
            medium: "Canvas".to_string(),
            style: String::new(),
            description: String::new(),
            price: String::new(),
            dimensions: String::new(),
        }
    }
}

/// Partial update of an [`ArtworkDraft`]; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub medium: Option<String>,
    pub style: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub dimensions: Option<String>,
}

/// Inputs for a description generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRequest {
    pub title: String,
    pub category: String,
    pub style: String,
}

/// Handle for an in-flight semantic search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The query text the search was started with
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// One visitor's storefront state
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    view: View,
    role: UserRole,
    favorites: IndexSet<String>,
    filter: FilterState,
    dashboard_tab: DashboardTab,
    draft: ArtworkDraft,
    scroll_to_top: bool,
    search_seq: u64,
    pending_search: Option<u64>,
    generating: bool,
}

impl Session {
    pub fn new(role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            view: View::Gallery,
            role,
            favorites: IndexSet::new(),
            filter: FilterState::new(),
            dashboard_tab: DashboardTab::Overview,
            draft: ArtworkDraft::default(),
            scroll_to_top: false,
            search_seq: 0,
            pending_search: None,
            generating: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &IndexSet<String> {
        &self.favorites
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        self.dashboard_tab
    }

    pub fn draft(&self) -> &ArtworkDraft {
        &self.draft
    }

    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    // === View transitions ===

    /// Open the detail view for `artwork`
    pub fn select_artwork(&mut self, artwork: Artwork) {
        tracing::debug!(session_id = %self.id, artwork_id = %artwork.id, "select artwork");
        self.view = View::Detail { artwork };
        self.scroll_to_top = true;
    }

    /// Leave the detail view for the gallery; other views are unaffected
    pub fn back(&mut self) {
        if matches!(self.view, View::Detail { .. }) {
            self.view = View::Gallery;
        }
        self.scroll_to_top = false;
    }

    /// Jump to a top-level view, dropping any selected artwork
    pub fn navigate(&mut self, target: NavTarget) {
        tracing::debug!(session_id = %self.id, ?target, "navigate");
        self.view = match target {
            NavTarget::Gallery => View::Gallery,
            NavTarget::Dashboard => View::Dashboard,
        };
        self.scroll_to_top = false;
    }

    // === Role and dashboard ===

    /// Switch role; falls back to the overview tab if the current tab is
    /// not offered to the new role
    pub fn set_role(&mut self, role: UserRole) {
        tracing::debug!(session_id = %self.id, from = %self.role, to = %role, "role change");
        self.role = role;
        if !self.dashboard_tab.is_available_to(role) {
            self.dashboard_tab = DashboardTab::Overview;
        }
    }

    pub fn available_tabs(&self) -> Vec<DashboardTab> {
        DashboardTab::available_to(self.role)
    }

    pub fn select_tab(&mut self, tab: DashboardTab) -> Result<(), SessionError> {
        if !tab.is_available_to(self.role) {
            return Err(SessionError::TabUnavailable {
                tab,
                role: self.role,
            });
        }
        self.dashboard_tab = tab;
        Ok(())
    }

    /// Name shown for the current role
    pub fn identity(&self) -> &'static str {
        self.role.display_name()
    }

    // === Favorites ===

    /// Flip membership of `artwork_id`; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, artwork_id: &str) -> bool {
        if self.favorites.shift_remove(artwork_id) {
            false
        } else {
            self.favorites.insert(artwork_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, artwork_id: &str) -> bool {
        self.favorites.contains(artwork_id)
    }

    // === Gallery filters ===

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.filter.set_category(category);
    }

    /// The "clear filters" action of the empty-results view
    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    /// Run the gallery pipeline against `items`
    pub fn gallery<'a>(&self, items: &'a [Artwork]) -> Vec<&'a Artwork> {
        self.filter.apply(items)
    }

    /// Start a semantic search for the current query
    ///
    /// A blank query leaves relevance mode instead and returns `None`.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.filter.query.trim().is_empty() {
            self.filter.clear_relevance();
            return None;
        }

        self.search_seq += 1;
        self.pending_search = Some(self.search_seq);
        Some(SearchTicket {
            seq: self.search_seq,
            query: self.filter.query.clone(),
        })
    }

    /// Deliver a search response; returns whether it was applied
    ///
    /// Responses for anything but the latest ticket are discarded and keep
    /// the busy flag raised. A response for the latest ticket always clears
    /// it, but is dropped if the query was emptied in the meantime.
    pub fn complete_search(&mut self, ticket: &SearchTicket, ids: Vec<String>) -> bool {
        if self.pending_search != Some(ticket.seq) {
            tracing::debug!(
                session_id = %self.id,
                seq = ticket.seq,
                latest = self.search_seq,
                "discarding stale search response"
            );
            return false;
        }

        self.pending_search = None;
        if self.filter.query.trim().is_empty() {
            return false;
        }
        self.filter.set_relevance(ids);
        true
    }

    // === Portfolio draft ===

    pub fn update_draft(&mut self, update: DraftUpdate) {
        let draft = &mut self.draft;
        if let Some(title) = update.title {
            draft.title = title;
        }
        if let Some(category) = update.category {
            draft.category = category;
        }
        if let Some(medium) = update.medium {
            draft.medium = medium;
        }
        if let Some(style) = update.style {
            draft.style = style;
        }
        if let Some(description) = update.description {
            draft.description = description;
        }
        if let Some(price) = update.price {
            draft.price = price;
        }
        if let Some(dimensions) = update.dimensions {
            draft.dimensions = dimensions;
        }
    }

    /// Start generating a description for the draft
    ///
    /// Needs both a title and a style; returns `None` (and stays idle)
    /// otherwise.
    pub fn begin_describe(&mut self) -> Option<DescribeRequest> {
        if self.draft.title.is_empty() || self.draft.style.is_empty() {
            return None;
        }
        self.generating = true;
        Some(DescribeRequest {
            title: self.draft.title.clone(),
            category: self.draft.category.clone(),
            style: self.draft.style.clone(),
        })
    }

    pub fn complete_describe(&mut self, description: String) {
        self.draft.description = description;
        self.generating = false;
    }

    /// Serializable view of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            view: self.view.clone(),
            scroll_to_top: self.scroll_to_top,
            role: self.role,
            identity: self.identity(),
            favorites: self.favorites.iter().cloned().collect(),
            selected_favorited: self
                .view
                .selected_artwork()
                .map(|artwork| self.is_favorite(&artwork.id)),
            filter: self.filter.clone(),
            match_mode: self.filter.mode(),
            searching: self.is_searching(),
            dashboard_tab: self.dashboard_tab,
            available_tabs: self.available_tabs(),
            draft: self.draft.clone(),
            generating: self.generating,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(UserRole::default())
    }
}

/// Wire representation of a [`Session`]
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub view: View,
    pub scroll_to_top: bool,
    pub role: UserRole,
    pub identity: &'static str,
    pub favorites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_favorited: Option<bool>,
    pub filter: FilterState,
    pub match_mode: MatchMode,
    pub searching: bool,
    pub dashboard_tab: DashboardTab,
    pub available_tabs: Vec<DashboardTab>,
    pub draft: ArtworkDraft,
    pub generating: bool,
}
