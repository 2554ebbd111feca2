use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use texgen::{
    config::{Config, ExportConfig},
    llm::{InferenceClient, OllamaClient},
    server::{handlers::AppState, router},
    shell::{Shell, ShellHandle},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.logs.level = "debug".to_string();
    config
}

pub fn create_test_server(client: Arc<dyn InferenceClient>) -> TestServer {
    let config = create_test_config();
    let state = AppState {
        shell: ShellHandle::new(Shell::new(&config.ollama), client),
        export: ExportConfig::default(),
    };
    TestServer::new(router(state)).expect("Failed to start test server")
}

/// App wired to a real `OllamaClient` pointed at a wiremock server.
pub fn create_ollama_backed_server(ollama: &MockServer) -> TestServer {
    let client = OllamaClient::with_base_url(ollama.uri()).expect("Failed to build client");
    create_test_server(Arc::new(client))
}

pub async fn mount_tags(ollama: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(ollama)
        .await;
}

pub async fn mount_generate(ollama: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(template)
        .mount(ollama)
        .await;
}

pub fn generate_body(response: &str) -> Value {
    json!({
        "model": "llama3.2",
        "created_at": "2024-01-01T00:00:00Z",
        "response": response,
        "done": true
    })
}

/// An address with nothing listening on it.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
