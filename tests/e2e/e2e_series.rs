use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use bytes::Bytes;
use series_client::{Client, RestErrorKind, Runner, RunnerConfig};
use sonic_rs::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct AppState {
    seen: Arc<Mutex<Vec<(HeaderMap, Bytes)>>>,
}

impl AppState {
    fn last(&self) -> (HeaderMap, Bytes) {
        self.seen
            .lock()
            .expect("seen mutex")
            .last()
            .cloned()
            .expect("server received a request")
    }
}

#[tokio::test]
async fn e2e_success_prints_indented_response() {
    let server = TestServer::start(
        Router::new().route("/get_content_by_series_id", post(content_handler)),
    )
    .await;

    let (result, stdout) = server.run().await;

    result.expect("run should succeed");
    assert_eq!(stdout, "Response:\n{\n    \"title\": \"Example\"\n}\n");
}

#[tokio::test]
async fn e2e_server_receives_json_id_list() {
    let server = TestServer::start(
        Router::new().route("/get_content_by_series_id", post(content_handler)),
    )
    .await;

    server.run().await.0.expect("run should succeed");

    let (headers, body) = server.state.last();
    assert_eq!(
        headers
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let sent: Value = sonic_rs::from_slice(&body).expect("body is json");
    assert_eq!(sent, json!({"id_list": [13]}));
}

#[tokio::test]
async fn e2e_not_found_prints_error_block() {
    let server = TestServer::start(
        Router::new().route("/get_content_by_series_id", post(not_found_handler)),
    )
    .await;

    let (result, stdout) = server.run().await;

    result.expect("http errors are reported, not raised");
    assert_eq!(stdout, "Error: 404\nResponse: Not Found\n");
}

#[tokio::test]
async fn e2e_invalid_json_on_200_is_a_parse_error() {
    let server = TestServer::start(
        Router::new().route("/get_content_by_series_id", post(garbage_handler)),
    )
    .await;

    let (result, stdout) = server.run().await;

    let err = result.expect_err("garbage body must propagate");
    assert_eq!(err.kind(), RestErrorKind::Parse);
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn e2e_unreachable_server_is_a_connect_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let runner = Runner::with_client(
        Client::new(),
        RunnerConfig::default().with_base_url(format!("http://{addr}")),
    );
    let mut out = Vec::new();
    let err = runner
        .run(&mut out)
        .await
        .expect_err("nothing listens on the freed port");

    assert_eq!(err.kind(), RestErrorKind::Connect);
    assert!(out.is_empty());
}

#[tokio::test]
async fn e2e_truncated_body_is_a_receive_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind raw listener");
    let addr = listener.local_addr().expect("local addr");
    let task = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.ends_with(br#"{"id_list":[13]}"#) {
            let n = stream.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\ncontent-type: application/json\r\n\r\n{\"title\"")
            .await
            .expect("write partial response");
        stream.shutdown().await.expect("close");
    });

    let runner = Runner::with_client(
        Client::new(),
        RunnerConfig::default().with_base_url(format!("http://{addr}")),
    );
    let mut out = Vec::new();
    let err = runner
        .run(&mut out)
        .await
        .expect_err("body shorter than content-length");

    assert_eq!(err.kind(), RestErrorKind::Receive);
    assert!(out.is_empty());
    task.await.expect("raw server task");
}

struct TestServer {
    base_url: String,
    state: AppState,
    task: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start(router: Router<AppState>) -> Self {
        let state = AppState::default();
        let app = router.with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{}", addr);

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url,
            state,
            task,
        }
    }

    async fn run(&self) -> (series_client::RestResult<series_client::Outcome>, String) {
        let runner = Runner::with_client(
            Client::new(),
            RunnerConfig::default().with_base_url(self.base_url.clone()),
        );
        let mut out = Vec::new();
        let result = runner.run(&mut out).await;
        (result, String::from_utf8(out).expect("stdout is utf-8"))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn content_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    state.seen.lock().expect("seen mutex").push((headers, body));
    (StatusCode::OK, r#"{"title": "Example"}"#)
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn garbage_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "not json at all")
}
