//! Service traits for the catalog and the generative backend

use crate::core::artwork::{Artwork, Review};
use crate::core::commission::{Commission, CommissionStatus};
use crate::core::error::PaletteResult;
use crate::core::user::{User, UserRole};
use crate::genai::GenAiError;
use async_trait::async_trait;

/// Read access to the catalog plus the commission workflow
///
/// The storefront is agnostic to where the catalog lives; the crate ships
/// an in-memory implementation seeded with built-in data.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All artworks, in catalog order
    async fn list_artworks(&self) -> PaletteResult<Vec<Artwork>>;

    /// A single artwork; `CatalogError::ArtworkNotFound` if unknown
    async fn get_artwork(&self, id: &str) -> PaletteResult<Artwork>;

    /// Reviews left on an artwork (possibly none)
    async fn reviews_for(&self, artwork_id: &str) -> PaletteResult<Vec<Review>>;

    /// The profile shown on the dashboard for a role
    async fn user_for_role(&self, role: UserRole) -> PaletteResult<Option<User>>;

    async fn list_commissions(&self) -> PaletteResult<Vec<Commission>>;

    /// Answer a commission request
    ///
    /// Fails with `CommissionError::NotFound` for unknown ids and
    /// `CommissionError::InvalidTransition` for anything other than
    /// accepting or declining a pending request.
    async fn update_commission(
        &self,
        id: &str,
        status: CommissionStatus,
    ) -> PaletteResult<Commission>;
}

/// Raw access to a generative language model
///
/// Implementations surface every failure; turning failures into fallback
/// values is the job of [`ArtAssistant`](crate::genai::ArtAssistant).
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Generate free text for `prompt`
    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError>;

    /// Generate a JSON array of strings for `prompt`
    async fn generate_string_list(&self, prompt: &str) -> Result<Vec<String>, GenAiError>;
}
