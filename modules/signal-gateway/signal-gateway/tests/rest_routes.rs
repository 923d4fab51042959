#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Route tests for the signal gateway.
//!
//! These build the real axum `Router` over a fake `SignalClientV1` and send
//! requests with `tower::ServiceExt::oneshot`; no network is involved.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use proptest::prelude::*;
use signal_gateway::Service;
use signal_gateway::api::rest::routes;
use signal_sdk::{SignalClientV1, SignalError};
use tower::ServiceExt;

/// Fake responder that follows the real validation rules and records what it receives.
#[derive(Default)]
struct FakeSignalClient {
    received: Mutex<Vec<String>>,
}

impl FakeSignalClient {
    fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignalClientV1 for FakeSignalClient {
    async fn ping(&self, message: String) -> Result<String, SignalError> {
        self.received.lock().unwrap().push(message.clone());
        if message == "PING" {
            Ok("PONG".to_owned())
        } else {
            Err(SignalError::InvalidPing)
        }
    }

    async fn echo(&self, message: String) -> Result<String, SignalError> {
        self.received.lock().unwrap().push(message.clone());
        if message.is_empty() {
            Err(SignalError::EmptyEcho)
        } else {
            Ok(message)
        }
    }
}

/// Fake whose every call fails below the validation layer.
struct BrokenSignalClient;

#[async_trait]
impl SignalClientV1 for BrokenSignalClient {
    async fn ping(&self, _message: String) -> Result<String, SignalError> {
        Err(SignalError::Transport(
            "tcp connect error: Connection refused (os error 111)".to_owned(),
        ))
    }

    async fn echo(&self, _message: String) -> Result<String, SignalError> {
        Err(SignalError::Transport(
            "tcp connect error: Connection refused (os error 111)".to_owned(),
        ))
    }
}

/// Fake that never replies.
struct StalledSignalClient;

#[async_trait]
impl SignalClientV1 for StalledSignalClient {
    async fn ping(&self, _message: String) -> Result<String, SignalError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("PONG".to_owned())
    }

    async fn echo(&self, message: String) -> Result<String, SignalError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(message)
    }
}

fn build_router(client: Arc<dyn SignalClientV1>) -> Router {
    routes::register_routes(Router::new(), Arc::new(Service::new(client)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn ping_pong() {
    let router = build_router(Arc::new(FakeSignalClient::default()));
    let (status, content_type, body) = get(router, "/ping/PING").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));
    assert_eq!(body, r#"{"message":"PONG"}"#);
}

#[tokio::test]
async fn ping_wrong_case_is_500() {
    let router = build_router(Arc::new(FakeSignalClient::default()));
    let (status, content_type, body) = get(router, "/ping/Ping").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));
    assert_eq!(body, r#""invalid ping message""#);
}

#[tokio::test]
async fn empty_ping_is_forwarded_and_rejected() {
    let client = Arc::new(FakeSignalClient::default());
    let (status, _, body) = get(build_router(client.clone()), "/ping/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#""invalid ping message""#);
    assert_eq!(client.received(), vec![String::new()]);
}

#[tokio::test]
async fn echo_hello() {
    let router = build_router(Arc::new(FakeSignalClient::default()));
    let (status, content_type, body) = get(router, "/echo/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));
    assert_eq!(body, r#"{"message":"hello"}"#);
}

#[tokio::test]
async fn echo_empty_suffix_is_500() {
    let client = Arc::new(FakeSignalClient::default());
    let (status, _, body) = get(build_router(client.clone()), "/echo/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#""message can't be empty""#);
    assert_eq!(client.received(), vec![String::new()]);
}

#[tokio::test]
async fn echo_suffix_is_taken_verbatim() {
    let client = Arc::new(FakeSignalClient::default());

    for (uri, expected) in [
        ("/echo/a/b/c", "a/b/c"),
        ("/echo/hello%20world", "hello world"),
        ("/echo/%20padded%20", " padded "),
        ("/echo/PING", "PING"),
    ] {
        let (status, _, body) = get(build_router(client.clone()), uri).await;
        assert_eq!(status, StatusCode::OK, "uri {uri}");
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], expected, "uri {uri}");
    }

    assert_eq!(client.received(), vec!["a/b/c", "hello world", " padded ", "PING"]);
}

#[tokio::test]
async fn transport_failure_returns_raw_text() {
    let router = build_router(Arc::new(BrokenSignalClient));

    let (status, _, body) = get(router.clone(), "/ping/PING").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#""tcp connect error: Connection refused (os error 111)""#);

    let (status, _, _) = get(router, "/echo/hello").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn slow_responder_times_out() {
    let service = Service::with_timeout(Arc::new(StalledSignalClient), Duration::from_millis(50));
    let router = routes::register_routes(Router::new(), Arc::new(service));

    let (status, _, body) = get(router, "/echo/hello").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#""deadline exceeded after 50ms""#);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let router = build_router(Arc::new(FakeSignalClient::default()));
    let (status, _, _) = get(router, "/pong/PING").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let router = build_router(Arc::new(FakeSignalClient::default()));
    let (status, _, body) = get(router, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/ping/{message}"]["get"].is_object());
    assert!(doc["paths"]["/echo/{message}"]["get"].is_object());
}

#[tokio::test]
async fn non_utf8_suffix_is_500_json_string() {
    let client = Arc::new(FakeSignalClient::default());

    for uri in ["/echo/%FF", "/ping/%C3%28"] {
        let (status, content_type, body) = get(build_router(client.clone()), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri {uri}");
        assert_eq!(content_type.as_deref(), Some("application/json; charset=UTF-8"));
        let text: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(text.as_str().is_some_and(|t| !t.is_empty()), "uri {uri}: {body}");
    }

    assert!(client.received().is_empty());
}

#[tokio::test]
async fn html_characters_are_not_escaped() {
    let (status, _, body) = get(
        build_router(Arc::new(FakeSignalClient::default())),
        "/echo/%3Cb%3E%26%3C%2Fb%3E",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"<b>&</b>"}"#);
}

fn percent_encode_all(message: &str) -> String {
    let mut encoded = String::with_capacity(message.len() * 3);
    for byte in message.bytes() {
        let _ = write!(encoded, "%{byte:02X}");
    }
    encoded
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn echo_round_trips_any_message(
        message in any::<String>().prop_filter("non-empty", |m| !m.is_empty())
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let client = Arc::new(FakeSignalClient::default());
        let uri = format!("/echo/{}", percent_encode_all(&message));

        let (status, _, body) = runtime.block_on(get(build_router(client.clone()), &uri));

        prop_assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(json["message"].as_str(), Some(message.as_str()));
        prop_assert_eq!(client.received(), vec![message]);
    }
}
