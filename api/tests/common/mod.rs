#![allow(dead_code)]

use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    routing::post,
};
use clap::Parser;
use http_body_util::BodyExt;
use menucraft_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds the application router from CLI style flags. Retries never sleep.
pub async fn app(flags: &[&str]) -> Router {
    let mut argv = vec!["menucraft", "--llm-retry-backoff-ms", "0"];
    argv.extend_from_slice(flags);
    let args = Arc::new(Args::parse_from(argv));

    let app_state = state(args).await.expect("state should build");
    router(app_state).expect("router should build")
}

/// Router running without an API key, serving canned replies.
pub async fn offline_app() -> Router {
    app(&["--openai-api-key="]).await
}

/// Fake chat-completions provider. Replays `responses` in order, repeating the
/// last one, and records each request payload.
pub struct FakeProvider {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

pub async fn spawn_provider(responses: Vec<(u16, Value)>) -> FakeProvider {
    let queue = Arc::new(Mutex::new(VecDeque::from(responses)));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let sink = requests.clone();

    let handler = move |Json(payload): Json<Value>| {
        let queue = queue.clone();
        let sink = sink.clone();
        async move {
            sink.lock().unwrap().push(payload);
            let mut queue = queue.lock().unwrap();
            let (status, body) = if queue.len() > 1 {
                queue.pop_front().unwrap()
            } else {
                queue.front().cloned().unwrap()
            };
            (StatusCode::from_u16(status).unwrap(), Json(body))
        }
    };

    let provider = Router::new().route("/v1/chat/completions", post(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, provider).await.unwrap();
    });

    FakeProvider {
        base_url: format!("http://{}/v1", addr),
        requests,
    }
}

/// Router wired to a fake provider.
pub async fn online_app(provider: &FakeProvider) -> Router {
    app(&[
        "--openai-api-key",
        "sk-test",
        "--openai-base-url",
        &provider.base_url,
    ])
    .await
}

/// A successful chat completion whose content is the two-field reply.
pub fn completion(description: &str, upsell: &str) -> (u16, Value) {
    let content = json!({
        "description": description,
        "upsell_suggestion": upsell,
    })
    .to_string();
    raw_completion(&content)
}

pub fn raw_completion(content: &str) -> (u16, Value) {
    (
        200,
        json!({"choices": [{"message": {"role": "assistant", "content": content}}]}),
    )
}

pub fn generate_request(body: Value, peer: &str) -> Request<Body> {
    generate_request_at("/generate-item-details", body, peer)
}

pub fn generate_request_at(uri: &str, body: Value, peer: &str) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    req.extensions_mut()
        .insert(ConnectInfo(peer.parse::<SocketAddr>().unwrap()));
    req
}

/// Sends one request and returns the status, headers and JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, body)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
