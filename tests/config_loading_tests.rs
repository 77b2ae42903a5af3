//! Loading configuration from YAML files on disk.

use palette::config::PaletteConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
server:
  bind: "0.0.0.0:8080"
genai:
  model: "test-model"
  base_url: "http://localhost:9000/v1"
  api_key_env: "PALETTE_TEST_KEY"
  timeout_secs: 5
  search_limit: 5
"#,
    );

    let config = PaletteConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(config.genai.model, "test-model");
    assert_eq!(config.genai.timeout_secs, 5);
    assert_eq!(config.genai.search_limit, 5);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("genai:\n  search_limit: 1\n");

    let config = PaletteConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.genai.search_limit, 1);
    assert_eq!(config.genai.model, "gemini-3-flash-preview");
    assert_eq!(config.server.bind, "127.0.0.1:3000");
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = PaletteConfig::from_yaml_file(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_invalid_yaml_names_the_file() {
    let file = write_config("server: [not, a, map]\n");
    let path = file.path().to_str().unwrap().to_string();

    let err = PaletteConfig::from_yaml_file(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to parse config"));
    assert!(message.contains(&path));
}
