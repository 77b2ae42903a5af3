//! # Palette
//!
//! Backend for an art marketplace storefront: a gallery of artworks that
//! visitors can filter by text, category or AI-ranked relevance, plus a
//! role-dependent dashboard for buyers, artists and admins.
//!
//! ## Features
//!
//! - **Gallery pipeline**: category stage then text or relevance stage, see
//!   [`core::filter`]
//! - **Sessions**: view navigation, favorites, dashboard tabs and the
//!   artist's portfolio draft, see [`core::session`]
//! - **Generative helpers**: listing descriptions and semantic search that
//!   never fail the request, see [`genai`]
//! - **REST exposure**: axum router built by [`server::ServerBuilder`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use palette::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(PaletteConfig::from_env()?)
//!         .with_catalog(InMemoryCatalog::seeded())
//!         .serve_configured()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod genai;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        ALL_CATEGORIES, Artwork, ArtworkDraft, ArtworkStatus, CategoryFilter, Commission,
        CommissionStatus, DashboardTab, FilterState, MatchMode, NavTarget, Review, Sale,
        SearchTicket, Session, SessionSnapshot, User, UserRole, View, filter_artworks,
    };

    // === Services ===
    pub use crate::core::service::{CatalogService, GenerativeService};
    pub use crate::genai::{ArtAssistant, GenAiError, GeminiClient};

    // === Errors ===
    pub use crate::core::error::{PaletteError, PaletteResult};

    // === Storage ===
    pub use crate::storage::{InMemoryCatalog, SessionStore};

    // === Config ===
    pub use crate::config::{GenAiConfig, PaletteConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
