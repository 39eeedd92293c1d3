use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use sendai_chat_proxy::{
    chat::ChatProxy,
    config::LlmConfig,
    llm::LlmClient,
    server::{self, cors::CorsPolicy, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-test-key";

pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:9003",
    "https://sendaigo.jp",
    "http://sendaigo.jp",
];

/// LLM config pointing at `base_url` with the test key set
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        model: "gpt-4o-mini".to_string(),
        timeout_secs: 30,
    }
}

/// LLM config for a mock upstream started with wiremock
pub fn create_mock_upstream_config(upstream: &MockServer) -> LlmConfig {
    create_test_llm_config(&format!("{}/v1", upstream.uri()))
}

/// Full router wired to a real `OpenAiClient`
pub fn create_test_app(llm_config: &LlmConfig) -> Router {
    let proxy = ChatProxy::new(llm_config).expect("Failed to build chat proxy");
    app_with_proxy(proxy)
}

/// Full router wired to any `LlmClient`
pub fn create_test_app_with_client(client: Arc<dyn LlmClient>, llm_config: &LlmConfig) -> Router {
    app_with_proxy(ChatProxy::with_client(client, llm_config))
}

fn app_with_proxy(proxy: ChatProxy) -> Router {
    server::router(AppState {
        proxy: Arc::new(proxy),
        cors: Arc::new(CorsPolicy::new(ALLOWED_ORIGINS)),
    })
}

/// Sample upstream success body
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_739_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 8, "total_tokens": 128}
    })
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
