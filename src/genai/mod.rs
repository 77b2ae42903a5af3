//! Generative language collaborators
//!
//! - [`GeminiClient`]: HTTP client for the generative language API
//! - [`ArtAssistant`]: best-effort description writing and semantic search
//!   on top of any [`GenerativeService`](crate::core::service::GenerativeService)

pub mod assistant;
pub mod gemini;

pub use assistant::{ArtAssistant, EMPTY_DESCRIPTION, FALLBACK_DESCRIPTION};
pub use gemini::GeminiClient;

use thiserror::Error;

/// Failures talking to a generative backend
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
}
