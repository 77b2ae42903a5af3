//! Request extractors that fail with typed errors

use crate::core::error::{PaletteError, PaletteResult, RequestError};
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use uuid::Uuid;

/// JSON body extractor whose rejection is a [`PaletteError`]
///
/// Behaves like `axum::Json` but reports malformed bodies as
/// `INVALID_BODY` with the usual error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(PaletteError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for PaletteError {
    fn from(rejection: JsonRejection) -> Self {
        PaletteError::Request(RequestError::InvalidBody {
            message: rejection.body_text(),
        })
    }
}

/// Parse a session id path segment
pub fn parse_session_id(raw: &str) -> PaletteResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| {
        RequestError::InvalidParameter {
            name: "session_id".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_session_id(&id.to_string()).unwrap(), id);

        let err = parse_session_id("not-a-uuid").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}
