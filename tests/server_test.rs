//! HTTP API tests against a live listener.

use std::net::SocketAddr;

use serde_json::{Value, json};
use textlab::pipeline::Pipeline;
use textlab::server::{self, AppState};

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(AppState::new(Pipeline::default()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Minimal HTTP/1.1 exchange; returns the status code and JSON body.
async fn request(addr: SocketAddr, method: &str, path: &str, body: Option<Value>) -> (u16, Value) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let payload = body.map(|b| b.to_string()).unwrap_or_default();
    let raw = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    let status = response[9..12].parse().unwrap();
    let (_, body) = response.split_once("\r\n\r\n").unwrap();
    (status, serde_json::from_str(body).unwrap())
}

#[tokio::test]
async fn test_health_and_root() {
    let addr = spawn_server().await;

    let (status, body) = request(addr, "GET", "/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "NLP Text Processing Lab API");

    let (status, body) = request(addr, "GET", "/", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["endpoints"]["process"], "POST /process");
}

#[tokio::test]
async fn test_process_selective() {
    let addr = spawn_server().await;

    let (status, body) = request(
        addr,
        "POST",
        "/process",
        Some(json!({"text": "Cats chase mice.", "options": {"tokenization": true, "tf": true}})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["tokens"], json!(["Cats", "chase", "mice"]));
    assert!(body.get("filtered_tokens").is_none());
    assert!(body.get("term_frequency").is_some());
}

#[tokio::test]
async fn test_process_validation_errors() {
    let addr = spawn_server().await;

    let (status, body) = request(
        addr,
        "POST",
        "/process",
        Some(json!({"text": "  ", "options": {"tokenization": true}})),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"detail": "Please enter some text to process."}));

    let (status, body) = request(addr, "POST", "/process", Some(json!({"text": "hello"}))).await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"detail": "Please select at least one processing option."})
    );
}

#[tokio::test]
async fn test_full_endpoint() {
    let addr = spawn_server().await;

    let (status, body) = request(
        addr,
        "POST",
        "/full",
        Some(json!({"text": "Dogs run.", "options": {"tf": false}})),
    )
    .await;
    assert_eq!(status, 200);
    for field in [
        "original_text",
        "cleaned_text",
        "lowercased_text",
        "tokens",
        "filtered_tokens",
        "lemmatized_tokens",
        "stemmed_tokens",
        "vocabulary",
        "bag_of_words",
        "term_frequency",
        "tfidf",
        "pos_tags",
    ] {
        assert!(body.get(field).is_some(), "missing {field}");
    }
    assert_eq!(body["pos_tags"], json!([["Dogs", "NNS"], ["run", "VBP"]]));
}
