use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use resume_tailor::{
    Result,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    resume::{CompletionGateway, CompletionSettings},
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            api_key: "test-api-key".to_string(),
            ..LlmConfig::default()
        },
    }
}

/// Build the full router around a mock client
pub fn create_test_app(client: Arc<MockLlmClient>) -> Router {
    let config = create_test_config();
    let gateway = CompletionGateway::new(client, CompletionSettings::from(&config.llm));
    server::router(AppState {
        gateway: Arc::new(gateway),
    })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<PathBuf> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn sample_generation_body() -> Value {
    json!({
        "userInfo": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "location": "Berlin",
            "linkedin": "",
            "github": "github.com/janedoe",
            "summary": "Backend engineer.",
            "experience": "Acme Corp, 2019-2024",
            "education": "BSc Computer Science",
            "skills": "Rust, SQL"
        },
        "jobDescription": "Senior Rust engineer for payments"
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "yaml-api-key"
  model: "gpt-4o"
  temperature: 0.3
  generation_max_tokens: 2500
  improvement_max_tokens: 800
"#;

/// Only server settings; the key has to come from the environment
pub const SERVER_ONLY_CONFIG_YAML: &str = r#"
server:
  port: 7000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
