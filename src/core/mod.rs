//! Core domain types and the traits the server is built on

pub mod artwork;
pub mod commission;
pub mod error;
pub mod filter;
pub mod query;
pub mod service;
pub mod session;
pub mod user;

pub use artwork::{Artwork, ArtworkStatus, ArtworkSummary, Review};
pub use commission::{Commission, CommissionStatus, OrderStatus, Sale};
pub use error::{PaletteError, PaletteResult};
pub use filter::{ALL_CATEGORIES, CategoryFilter, FilterState, MatchMode, filter_artworks};
pub use query::{GalleryParams, PaginatedResponse, PaginationMeta};
pub use service::{CatalogService, GenerativeService};
pub use session::{
    ArtworkDraft, DashboardTab, DescribeRequest, DraftUpdate, NavTarget, SearchTicket, Session,
    SessionSnapshot, View,
};
pub use user::{User, UserRole};
