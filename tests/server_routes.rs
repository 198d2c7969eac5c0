use rolling_analytics::{create_router, AppState, RollingWindowAggregator};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server() -> SocketAddr {
    let state = Arc::new(AppState::new(RollingWindowAggregator::new(), 42));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });
    addr
}

/// Sends one HTTP/1.1 request and returns the status code and JSON body.
async fn send(addr: SocketAddr, method: &str, path: &str, body: Option<&str>) -> (u16, Value) {
    let mut request = format!(
        "{} {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n",
        method, path
    );
    if let Some(body) = body {
        request.push_str("Content-Type: application/json\r\n");
        request.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    } else {
        request.push_str("\r\n");
    }

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let text = String::from_utf8(raw).unwrap();
    let (head, payload) = text
        .split_once("\r\n\r\n")
        .expect("response should have a header block");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .expect("response should have a status code");
    let body = serde_json::from_str(payload).unwrap_or(Value::Null);

    (status, body)
}

#[tokio::test]
async fn health_route_responds() {
    let addr = spawn_server().await;
    let (status, body) = send(addr, "GET", "/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn synthetic_rolling_route_generates_and_aggregates() {
    let addr = spawn_server().await;
    let (status, body) = send(
        addr,
        "GET",
        "/synthetic/rolling?seed=3&samples=20&noise=0&width=1",
        None,
    )
    .await;

    assert_eq!(status, 200);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 40);
    assert_eq!(results[0]["group"], "A");
    assert_eq!(results[1]["group"], "B");
    assert_eq!(body["config"]["groupby"], json!(["group"]));
}

#[tokio::test]
async fn synthetic_rolling_route_rejects_malformed_width_as_json() {
    let addr = spawn_server().await;

    for path in ["/synthetic/rolling?width=abc", "/synthetic/rolling"] {
        let (status, body) = send(addr, "GET", path, None).await;
        assert_eq!(status, 400, "path {}", path);
        assert_eq!(body["error"], "InvalidParameter", "path {}", path);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn synthetic_rolling_route_rejects_zero_width() {
    let addr = spawn_server().await;
    let (status, body) = send(addr, "GET", "/synthetic/rolling?width=0", None).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "InvalidConfiguration");
}

#[tokio::test]
async fn synthetic_route_rejects_huge_sample_count() {
    let addr = spawn_server().await;
    let (status, body) = send(addr, "GET", "/synthetic?samples=9223372036854775808", None).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "InvalidParameter");
}

#[tokio::test]
async fn rolling_route_rejects_body_without_config() {
    let addr = spawn_server().await;
    let payload = r#"{"series": [{"time": 0.0, "value": 1.0, "group": "A"}]}"#;
    let (status, body) = send(addr, "POST", "/rolling", Some(payload)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "InvalidParameter");
}

#[tokio::test]
async fn rolling_route_computes_posted_series() {
    let addr = spawn_server().await;
    let payload = json!({
        "series": [
            {"time": 0.0, "value": 0.0, "group": "A"},
            {"time": 1.0, "value": 2.0, "group": "A"},
            {"time": 2.0, "value": 4.0, "group": "A"}
        ],
        "config": {"width": 2.0}
    })
    .to_string();

    let (status, body) = send(addr, "POST", "/rolling", Some(&payload)).await;
    assert_eq!(status, 200);
    assert_eq!(body["results"][1]["rolling_average"], 2.0);
}
