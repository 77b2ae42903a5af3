//! Shared harness for the REST integration tests.
//!
//! Builds the full router around the seeded catalog and a scripted
//! generative backend, so no test touches the network.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use palette::prelude::*;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One canned answer for prompts containing `needle`
#[derive(Clone)]
pub struct Rule {
    pub needle: String,
    pub ids: Option<Vec<String>>,
    pub delay: Duration,
}

/// Generative backend driven by prompt-matching rules
///
/// `generate_text` returns `description` after `description_delay` (or
/// fails when it is `None`).
/// `generate_string_list` answers with the first rule whose needle occurs
/// in the prompt, after its delay; `None` ids simulate a failure.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    description: Option<String>,
    description_delay: Duration,
    rules: Vec<Rule>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describing(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn describing_after(mut self, text: &str, delay: Duration) -> Self {
        self.description = Some(text.to_string());
        self.description_delay = delay;
        self
    }

    pub fn answering(mut self, needle: &str, ids: &[&str]) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            ids: Some(ids.iter().map(|id| id.to_string()).collect()),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn answering_after(mut self, needle: &str, ids: &[&str], delay: Duration) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            ids: Some(ids.iter().map(|id| id.to_string()).collect()),
            delay,
        });
        self
    }

    pub fn failing(mut self, needle: &str) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            ids: None,
            delay: Duration::ZERO,
        });
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeService for ScriptedBackend {
    async fn generate_text(&self, prompt: &str) -> std::result::Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if !self.description_delay.is_zero() {
            tokio::time::sleep(self.description_delay).await;
        }
        self.description.clone().ok_or(GenAiError::MissingApiKey)
    }

    async fn generate_string_list(
        &self,
        prompt: &str,
    ) -> std::result::Result<Vec<String>, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let rule = self
            .rules
            .iter()
            .find(|rule| prompt.contains(&format!("\"{}\"", rule.needle)))
            .cloned();

        match rule {
            Some(rule) => {
                if !rule.delay.is_zero() {
                    tokio::time::sleep(rule.delay).await;
                }
                rule.ids
                    .ok_or_else(|| GenAiError::Malformed("scripted failure".to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}

pub fn make_server(backend: ScriptedBackend) -> TestServer {
    let router = ServerBuilder::new()
        .with_catalog(InMemoryCatalog::seeded())
        .with_generative_service(backend)
        .build()
        .unwrap();
    TestServer::new(router)
}

/// Create a session and return its id
pub async fn new_session(server: &TestServer, role: &str) -> String {
    let response = server.post("/sessions").json(&json!({ "role": role })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

/// Ids of the artworks in a gallery response, in order
pub fn gallery_ids(body: &Value) -> Vec<String> {
    body["artworks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|artwork| artwork["id"].as_str().unwrap().to_string())
        .collect()
}
