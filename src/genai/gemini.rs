//! Client for the `generateContent` endpoint of the generative language API

use super::GenAiError;
use crate::config::GenAiConfig;
use crate::core::service::GenerativeService;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;

/// HTTP client for a single model
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, empty if there is none
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    /// Build a client from configuration, reading the key from the environment
    pub fn from_config(config: &GenAiConfig) -> Result<Self, GenAiError> {
        let api_key = config.api_key();
        if api_key.is_none() {
            tracing::warn!(
                env = %config.api_key_env,
                "no generative API key set; AI features will return fallbacks"
            );
        }
        Self::new(
            &config.base_url,
            &config.model,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(
        &self,
        prompt: &str,
        generation_config: Option<Value>,
    ) -> Result<String, GenAiError> {
        let api_key = self.api_key.as_deref().ok_or(GenAiError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        self.generate(prompt, None).await
    }

    async fn generate_string_list(&self, prompt: &str) -> Result<Vec<String>, GenAiError> {
        let config = json!({
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        });

        let text = self.generate(prompt, Some(config)).await?;
        parse_string_list(&text)
    }
}

/// Parse a JSON array of strings; blank text counts as an empty array
pub(crate) fn parse_string_list(text: &str) -> Result<Vec<String>, GenAiError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(GenAiError::Malformed(format!(
                    "expected string id, got {}",
                    other
                ))),
            })
            .collect(),
        other => Err(GenAiError::Malformed(format!(
            "expected JSON array, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: Some(json!({ "responseMimeType": "application/json" })),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[\"1\"," }, { "text": "\"2\"]" }] }
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "[\"1\",\"2\"]");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_parse_string_list() {
        assert_eq!(parse_string_list("[\"2\", \"3\"]").unwrap(), vec!["2", "3"]);
        assert!(parse_string_list("  ").unwrap().is_empty());
        assert!(matches!(
            parse_string_list("{\"ids\": []}"),
            Err(GenAiError::Malformed(_))
        ));
        assert!(matches!(parse_string_list("[1, 2]"), Err(GenAiError::Malformed(_))));
        assert!(matches!(parse_string_list("not json"), Err(GenAiError::Json(_))));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            "https://example.test/v1beta/",
            "test-model",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/test-model:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client =
            GeminiClient::new("http://127.0.0.1:9", "m", None, Duration::from_secs(1)).unwrap();
        assert!(matches!(
            client.generate_text("hi").await,
            Err(GenAiError::MissingApiKey)
        ));
    }
}
