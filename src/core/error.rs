//! Typed error handling for palette
//!
//! Every fallible operation in the crate returns a [`PaletteError`], which
//! maps onto an HTTP status and a stable error code so REST clients can
//! match on failures without parsing messages.
//!
//! # Error Categories
//!
//! - [`CatalogError`]: unknown artworks, purchases of unavailable pieces
//! - [`SessionError`]: unknown sessions, role-restricted dashboard tabs
//! - [`CommissionError`]: unknown commissions, illegal status changes
//! - [`RequestError`]: malformed requests and forbidden operations
//! - [`ConfigError`]: configuration reading and parsing
//!
//! Failures of the generative backend never show up here: the assistant
//! converts them to fallback values before they reach a caller.
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.get_artwork("42").await {
//!     Err(PaletteError::Catalog(CatalogError::ArtworkNotFound { id })) => {
//!         println!("no artwork {}", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//!     Ok(artwork) => println!("{}", artwork.title),
//! }
//! ```

use crate::core::commission::CommissionStatus;
use crate::core::artwork::ArtworkStatus;
use crate::core::session::DashboardTab;
use crate::core::user::UserRole;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Result alias used across the crate
pub type PaletteResult<T> = Result<T, PaletteError>;

/// The main error type for palette
#[derive(Debug)]
pub enum PaletteError {
    /// Catalog lookups and purchases
    Catalog(CatalogError),

    /// Session lookups and transitions
    Session(SessionError),

    /// Commission workflow
    Commission(CommissionError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (poisoned locks and the like)
    Internal(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Catalog(e) => write!(f, "{}", e),
            PaletteError::Session(e) => write!(f, "{}", e),
            PaletteError::Commission(e) => write!(f, "{}", e),
            PaletteError::Request(e) => write!(f, "{}", e),
            PaletteError::Config(e) => write!(f, "{}", e),
            PaletteError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::Catalog(e) => Some(e),
            PaletteError::Session(e) => Some(e),
            PaletteError::Commission(e) => Some(e),
            PaletteError::Request(e) => Some(e),
            PaletteError::Config(e) => Some(e),
            PaletteError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PaletteError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaletteError::Catalog(e) => e.status_code(),
            PaletteError::Session(e) => e.status_code(),
            PaletteError::Commission(e) => e.status_code(),
            PaletteError::Request(e) => e.status_code(),
            PaletteError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PaletteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PaletteError::Catalog(e) => e.error_code(),
            PaletteError::Session(e) => e.error_code(),
            PaletteError::Commission(e) => e.error_code(),
            PaletteError::Request(e) => e.error_code(),
            PaletteError::Config(_) => "CONFIG_ERROR",
            PaletteError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PaletteError::Catalog(CatalogError::ArtworkNotFound { id }) => {
                Some(serde_json::json!({ "artwork_id": id }))
            }
            PaletteError::Catalog(CatalogError::NotAvailable { id, status }) => {
                Some(serde_json::json!({ "artwork_id": id, "status": status }))
            }
            PaletteError::Session(SessionError::NotFound { id }) => {
                Some(serde_json::json!({ "session_id": id.to_string() }))
            }
            PaletteError::Session(SessionError::TabUnavailable { tab, role }) => {
                Some(serde_json::json!({ "tab": tab, "role": role }))
            }
            PaletteError::Commission(CommissionError::InvalidTransition { id, from, to }) => {
                Some(serde_json::json!({ "commission_id": id, "from": from, "to": to }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for PaletteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors related to the artwork catalog
#[derive(Debug)]
pub enum CatalogError {
    /// No artwork carries this identifier
    ArtworkNotFound { id: String },

    /// The artwork exists but cannot be purchased
    NotAvailable { id: String, status: ArtworkStatus },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ArtworkNotFound { id } => {
                write!(f, "Artwork with id '{}' not found", id)
            }
            CatalogError::NotAvailable { id, status } => {
                write!(
                    f,
                    "Artwork '{}' is not available for purchase (status: {})",
                    id,
                    status.as_str()
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ArtworkNotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::NotAvailable { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::ArtworkNotFound { .. } => "ARTWORK_NOT_FOUND",
            CatalogError::NotAvailable { .. } => "ARTWORK_NOT_AVAILABLE",
        }
    }
}

impl From<CatalogError> for PaletteError {
    fn from(err: CatalogError) -> Self {
        PaletteError::Catalog(err)
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors related to browsing sessions
#[derive(Debug)]
pub enum SessionError {
    /// Session id is unknown (never created, or the server restarted)
    NotFound { id: Uuid },

    /// The dashboard tab is not offered to the session's role
    TabUnavailable { tab: DashboardTab, role: UserRole },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound { id } => {
                write!(f, "Session '{}' not found", id)
            }
            SessionError::TabUnavailable { tab, role } => {
                write!(
                    f,
                    "Dashboard tab {} is not available to role {}",
                    tab.as_str(),
                    role
                )
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::NotFound { .. } => StatusCode::NOT_FOUND,
            SessionError::TabUnavailable { .. } => StatusCode::FORBIDDEN,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::NotFound { .. } => "SESSION_NOT_FOUND",
            SessionError::TabUnavailable { .. } => "TAB_UNAVAILABLE",
        }
    }
}

impl From<SessionError> for PaletteError {
    fn from(err: SessionError) -> Self {
        PaletteError::Session(err)
    }
}

// =============================================================================
// Commission Errors
// =============================================================================

/// Errors related to commission requests
#[derive(Debug)]
pub enum CommissionError {
    /// No commission carries this identifier
    NotFound { id: String },

    /// The requested status change is not allowed from the current status
    InvalidTransition {
        id: String,
        from: CommissionStatus,
        to: CommissionStatus,
    },
}

impl fmt::Display for CommissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommissionError::NotFound { id } => {
                write!(f, "Commission with id '{}' not found", id)
            }
            CommissionError::InvalidTransition { id, from, to } => {
                write!(
                    f,
                    "Commission '{}' cannot move from {} to {}",
                    id,
                    from.as_str(),
                    to.as_str()
                )
            }
        }
    }
}

impl std::error::Error for CommissionError {}

impl CommissionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CommissionError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommissionError::InvalidTransition { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CommissionError::NotFound { .. } => "COMMISSION_NOT_FOUND",
            CommissionError::InvalidTransition { .. } => "INVALID_COMMISSION_TRANSITION",
        }
    }
}

impl From<CommissionError> for PaletteError {
    fn from(err: CommissionError) -> Self {
        PaletteError::Commission(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// Invalid request body
    InvalidBody { message: String },

    /// A path or query parameter could not be interpreted
    InvalidParameter { name: String, message: String },

    /// Operation not permitted for the current role
    Forbidden { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::InvalidParameter { name, message } => {
                write!(f, "Invalid parameter '{}': {}", name, message)
            }
            RequestError::Forbidden { message } => {
                write!(f, "Forbidden: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            RequestError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RequestError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}

impl From<RequestError> for PaletteError {
    fn from(err: RequestError) -> Self {
        PaletteError::Request(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    ReadError { path: String, message: String },

    /// The configuration could not be parsed
    ParseError { file: Option<String>, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadError { path, message } => {
                write!(f, "Failed to read config '{}': {}", path, message)
            }
            ConfigError::ParseError {
                file: Some(file),
                message,
            } => {
                write!(f, "Failed to parse config '{}': {}", file, message)
            }
            ConfigError::ParseError { file: None, message } => {
                write!(f, "Failed to parse config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PaletteError {
    fn from(err: ConfigError) -> Self {
        PaletteError::Config(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for PaletteError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        PaletteError::Internal(format!("lock poisoned: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_not_found_is_404_with_details() {
        let err: PaletteError = CatalogError::ArtworkNotFound {
            id: "99".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ARTWORK_NOT_FOUND");

        let response = err.to_response();
        assert_eq!(response.message, "Artwork with id '99' not found");
        assert_eq!(response.details.unwrap()["artwork_id"], "99");
    }

    #[test]
    fn test_not_available_is_conflict() {
        let err: PaletteError = CatalogError::NotAvailable {
            id: "4".to_string(),
            status: ArtworkStatus::Sold,
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert!(err.to_string().contains("SOLD"));
    }

    #[test]
    fn test_tab_unavailable_is_forbidden() {
        let err = PaletteError::Session(SessionError::TabUnavailable {
            tab: DashboardTab::Portfolio,
            role: UserRole::Buyer,
        });

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            err.to_string(),
            "Dashboard tab PORTFOLIO is not available to role BUYER"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            file: Some("palette.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config 'palette.yaml': bad indent"
        );

        let err: PaletteError = err.into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let err = PaletteError::Request(RequestError::InvalidBody {
            message: "missing field".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
