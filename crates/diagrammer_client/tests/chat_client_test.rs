//! ChatCompletionClient against an in-process fake upstream.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use diagrammer_client::{ChatCompletionClient, ClientConfig, CompletionClient};
use diagrammer_core::{ApiKey, CompletionPrompt};
use diagrammer_error::CompletionErrorKind;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Seen {
    fn record(&self, headers: &HeaderMap, body: Value) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push((auth, body));
    }

    fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn spawn_upstream(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Ok(format!("http://{addr}/v1/chat/completions"))
}

fn prompt() -> CompletionPrompt {
    CompletionPrompt::builder()
        .system("You are a diagram generator.")
        .user("Draw a login flow")
        .temperature(0.7)
        .max_tokens(4000u32)
        .build()
        .unwrap()
}

fn client(endpoint: String) -> ChatCompletionClient {
    ChatCompletionClient::new(
        ClientConfig::new(endpoint, "deepseek-chat").with_api_key(ApiKey::new("sk-test")),
    )
}

#[tokio::test]
async fn sends_wire_contract_and_returns_content() -> anyhow::Result<()> {
    let seen = Seen::default();
    let router = Router::new()
        .route(
            "/v1/chat/completions",
            post(|State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                seen.record(&headers, body);
                Json(json!({
                    "id": "cmpl-1",
                    "choices": [{ "index": 0, "message": { "role": "assistant", "content": "graph TD\nA-->B" } }]
                }))
            }),
        )
        .with_state(seen.clone());
    let endpoint = spawn_upstream(router).await?;

    let text = client(endpoint).complete(&prompt(), Duration::from_secs(5)).await?;
    assert_eq!(text, "graph TD\nA-->B");

    let requests = seen.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["max_tokens"], 4000);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Draw a login flow");
    Ok(())
}

#[tokio::test]
async fn non_success_status_is_upstream_error() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded").into_response() }),
    );
    let endpoint = spawn_upstream(router).await?;

    let err = client(endpoint)
        .complete(&prompt(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        CompletionErrorKind::Upstream {
            status_code: 503,
            body: "overloaded".to_string()
        }
    );
    assert!(err.kind.is_retryable());
    Ok(())
}

#[tokio::test]
async fn missing_credential_fails_without_network_call() -> anyhow::Result<()> {
    let seen = Seen::default();
    let router = Router::new()
        .route(
            "/v1/chat/completions",
            post(|State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                seen.record(&headers, body);
                Json(json!({ "choices": [] }))
            }),
        )
        .with_state(seen.clone());
    let endpoint = spawn_upstream(router).await?;

    let client = ChatCompletionClient::new(ClientConfig::new(endpoint, "deepseek-chat"));
    let err = client
        .complete(&prompt(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, CompletionErrorKind::MissingCredential);
    assert!(!err.kind.is_retryable());
    assert_eq!(seen.count(), 0);
    Ok(())
}

#[tokio::test]
async fn slow_upstream_times_out() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let endpoint = spawn_upstream(router).await?;

    let err = client(endpoint)
        .complete(&prompt(), Duration::from_millis(100))
        .await
        .unwrap_err();
    assert_eq!(err.kind, CompletionErrorKind::Timeout(100));
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_deserialization_error() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { "definitely not json" }),
    );
    let endpoint = spawn_upstream(router).await?;

    let err = client(endpoint)
        .complete(&prompt(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, CompletionErrorKind::Deserialization(_)));
    Ok(())
}

#[tokio::test]
async fn blank_content_is_empty_response() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            Json(json!({ "choices": [{ "message": { "role": "assistant", "content": "  \n" } }] }))
        }),
    );
    let endpoint = spawn_upstream(router).await?;

    let err = client(endpoint)
        .complete(&prompt(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, CompletionErrorKind::EmptyResponse);
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Port 9 (discard) on loopback is closed in test environments.
    let err = client("http://127.0.0.1:9/v1/chat/completions".to_string())
        .complete(&prompt(), Duration::from_secs(2))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        CompletionErrorKind::Transport(_) | CompletionErrorKind::Timeout(_)
    ));
}
