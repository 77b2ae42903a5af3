//! Configuration loading and management

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "PALETTE_CONFIG";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (e.g., "127.0.0.1:3000")
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Generative language backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// Model name used for both description and search requests
    pub model: String,

    /// API root, without trailing slash
    pub base_url: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// How many artworks semantic search asks the model for
    pub search_limit: usize,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_secs: 30,
            search_limit: 3,
        }
    }
}

impl GenAiConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Complete configuration for the storefront service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub server: ServerConfig,
    pub genai: GenAiConfig,
}

impl PaletteConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load from the file named by `PALETTE_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => {
                tracing::info!(path = %path, "loading configuration");
                Self::from_yaml_file(&path)
            }
            _ => Ok(Self::default_config()),
        }
    }

    /// Default configuration
    pub fn default_config() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default_config();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.genai.model, "gemini-3-flash-preview");
        assert_eq!(config.genai.search_limit, 3);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
server:
  bind: "0.0.0.0:8080"
genai:
  timeout_secs: 5
"#;
        let config = PaletteConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.genai.timeout_secs, 5);
        assert_eq!(config.genai.api_key_env, "API_KEY");
    }

    #[test]
    fn test_yaml_serialization() {
        let config = PaletteConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = PaletteConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = PaletteConfig::from_yaml_str("server: [unclosed").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = PaletteConfig::from_yaml_file("/nonexistent/palette.yaml").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ReadError { .. })
        ));
    }
}
