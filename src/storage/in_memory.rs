//! In-memory catalog and session storage

use crate::core::artwork::{Artwork, Review};
use crate::core::commission::{Commission, CommissionStatus};
use crate::core::error::{CatalogError, CommissionError, PaletteError, PaletteResult, SessionError};
use crate::core::service::CatalogService;
use crate::core::session::Session;
use crate::core::user::{User, UserRole};
use crate::storage::seed;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory catalog
///
/// Artworks, users and reviews are fixed at construction; only commissions
/// change. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryCatalog {
    artworks: Arc<Vec<Artwork>>,
    users: Arc<Vec<User>>,
    reviews: Arc<Vec<Review>>,
    commissions: Arc<RwLock<Vec<Commission>>>,
}

impl InMemoryCatalog {
    /// Create a catalog from explicit records
    pub fn new(
        artworks: Vec<Artwork>,
        users: Vec<User>,
        reviews: Vec<Review>,
        commissions: Vec<Commission>,
    ) -> Self {
        Self {
            artworks: Arc::new(artworks),
            users: Arc::new(users),
            reviews: Arc::new(reviews),
            commissions: Arc::new(RwLock::new(commissions)),
        }
    }

    /// Create a catalog holding the built-in seed data
    pub fn seeded() -> Self {
        Self::new(
            seed::artworks(),
            seed::users(),
            seed::reviews(),
            seed::commissions(),
        )
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list_artworks(&self) -> PaletteResult<Vec<Artwork>> {
        Ok(self.artworks.as_ref().clone())
    }

    async fn get_artwork(&self, id: &str) -> PaletteResult<Artwork> {
        self.artworks
            .iter()
            .find(|artwork| artwork.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::ArtworkNotFound { id: id.to_string() }.into())
    }

    async fn reviews_for(&self, artwork_id: &str) -> PaletteResult<Vec<Review>> {
        Ok(self
            .reviews
            .iter()
            .filter(|review| review.artwork_id == artwork_id)
            .cloned()
            .collect())
    }

    async fn user_for_role(&self, role: UserRole) -> PaletteResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.role == role).cloned())
    }

    async fn list_commissions(&self) -> PaletteResult<Vec<Commission>> {
        let commissions = self.commissions.read()?;
        Ok(commissions.clone())
    }

    async fn update_commission(
        &self,
        id: &str,
        status: CommissionStatus,
    ) -> PaletteResult<Commission> {
        let mut commissions = self.commissions.write()?;

        let commission = commissions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CommissionError::NotFound { id: id.to_string() })?;

        commission.transition(status)?;
        tracing::info!(commission_id = %id, status = status.as_str(), "commission updated");

        Ok(commission.clone())
    }
}

/// In-memory registry of browsing sessions
///
/// Sessions live until the process exits.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session for `role` and return a copy of it
    pub fn create(&self, role: UserRole) -> PaletteResult<Session> {
        let session = Session::new(role);
        let mut sessions = self.sessions.write()?;
        sessions.insert(session.id(), session.clone());
        tracing::debug!(session_id = %session.id(), role = %role, "session created");
        Ok(session)
    }

    pub fn get(&self, id: &Uuid) -> PaletteResult<Session> {
        let sessions = self.sessions.read()?;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound { id: *id }.into())
    }

    /// Run `f` against the stored session under the write lock
    ///
    /// `f` must not await; async work happens between two `update` calls.
    pub fn update<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut Session) -> PaletteResult<R>,
    ) -> PaletteResult<R> {
        let mut sessions = self.sessions.write()?;
        let session = sessions
            .get_mut(id)
            .ok_or(PaletteError::Session(SessionError::NotFound { id: *id }))?;
        f(session)
    }

    /// Drop a session; `SessionError::NotFound` if it is already gone
    pub fn remove(&self, id: &Uuid) -> PaletteResult<()> {
        let mut sessions = self.sessions.write()?;
        sessions
            .remove(id)
            .ok_or(PaletteError::Session(SessionError::NotFound { id: *id }))?;
        tracing::debug!(session_id = %id, "session removed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
