//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses carry the code/message/details envelope
//! - Malformed requests are reported as typed errors over HTTP

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{ScriptedBackend, make_server, new_session};
use palette::core::error::{
    CatalogError, CommissionError, PaletteError, RequestError, SessionError,
};
use palette::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_artwork_not_found_returns_404() {
        let err = PaletteError::Catalog(CatalogError::ArtworkNotFound {
            id: "99".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_session_not_found_returns_404() {
        let err = PaletteError::Session(SessionError::NotFound { id: Uuid::new_v4() });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_tab_unavailable_returns_403() {
        let err = PaletteError::Session(SessionError::TabUnavailable {
            tab: DashboardTab::Portfolio,
            role: UserRole::Buyer,
        });
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_transition_returns_409() {
        let err = PaletteError::Commission(CommissionError::InvalidTransition {
            id: "c1".to_string(),
            from: CommissionStatus::Accepted,
            to: CommissionStatus::Rejected,
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_body_returns_400() {
        let err = PaletteError::Request(RequestError::InvalidBody {
            message: "expected object".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = PaletteError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// Response Envelope Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_not_available_details() {
        let err = PaletteError::Catalog(CatalogError::NotAvailable {
            id: "4".to_string(),
            status: ArtworkStatus::Sold,
        });
        let response = err.to_response();
        assert_eq!(response.code, "ARTWORK_NOT_AVAILABLE");
        assert!(response.message.contains("SOLD"));
        assert_eq!(
            response.details,
            Some(json!({ "artwork_id": "4", "status": "SOLD" }))
        );
    }

    #[test]
    fn test_forbidden_has_no_details() {
        let err: PaletteError = RequestError::Forbidden {
            message: "artists only".to_string(),
        }
        .into();
        assert!(err.to_response().details.is_none());
    }

    #[test]
    fn test_into_response_status() {
        let err: PaletteError = CommissionError::NotFound {
            id: "c9".to_string(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// HTTP Error Tests
// =============================================================================

mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_session_id_returns_400() {
        let server = make_server(ScriptedBackend::new());

        let response = server.get("/sessions/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_PARAMETER");
    }

    #[tokio::test]
    async fn test_malformed_body_returns_invalid_body() {
        let server = make_server(ScriptedBackend::new());
        let id = new_session(&server, "BUYER").await;

        let response = server
            .put(&format!("/sessions/{}/role", id))
            .json(&json!({ "role": "CURATOR" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_unknown_artwork_returns_404() {
        let server = make_server(ScriptedBackend::new());

        let response = server.get("/artworks/99").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["code"], "ARTWORK_NOT_FOUND");
        assert_eq!(body["details"]["artwork_id"], "99");
    }

    #[tokio::test]
    async fn test_unknown_commission_returns_404() {
        let server = make_server(ScriptedBackend::new());

        let response = server
            .put("/commissions/c404/status")
            .json(&json!({ "status": "ACCEPTED" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let server = make_server(ScriptedBackend::new());

        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "ok");
        server.get("/healthz").await.assert_status_ok();
    }
}
