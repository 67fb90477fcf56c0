use super::*;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::any;
use tower::ServiceExt;

use crate::config::{DEFAULT_MAX_UPLOAD_BYTES, ProxyTimeouts};
use crate::routes::api_routes;

// =============================================================
// Helpers
// =============================================================

const TIMEOUTS: ProxyTimeouts = ProxyTimeouts { request_secs: 5, connect_secs: 2 };

/// Upstream stand-in that echoes what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body = serde_json::json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "content_type": content_type,
        "accept": accept,
        "body": String::from_utf8_lossy(&body),
    });
    (StatusCode::CREATED, [(header::CONTENT_DISPOSITION, "attachment; filename=\"x.csv\"")], Json(body)).into_response()
}

async fn rejecting() -> Response {
    (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "title": ["This field is required."] }))).into_response()
}

async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/listing_api/listings/{id}/", any(rejecting))
        .fallback(echo);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(base_url: &str) -> AppState {
    AppState::new(Some(Upstream::new(base_url, TIMEOUTS).unwrap()), DEFAULT_MAX_UPLOAD_BYTES)
}

async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://backend", "/listing_api/listings/", Some("page=2")),
        "http://backend/listing_api/listings/?page=2"
    );
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://backend", "/listing_api/images/", Some("")), "http://backend/listing_api/images/");
    assert_eq!(upstream_url("http://backend", "/listing_api/images/", None), "http://backend/listing_api/images/");
}

// =============================================================
// ProxyError
// =============================================================

#[tokio::test]
async fn proxy_error_renders_message_body() {
    let response = ProxyError::Upstream("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = read_json(response).await;
    assert_eq!(json["message"], "listing API upstream failed: connection refused");
}

// =============================================================
// forward
// =============================================================

#[tokio::test]
async fn forward_without_upstream_is_service_unavailable() {
    let app = api_routes(AppState::default());
    let response = app
        .oneshot(Request::builder().uri("/listing_api/listings/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(read_json(response).await["message"].is_string());
}

#[tokio::test]
async fn forward_passes_method_query_headers_and_body() {
    let base = spawn_upstream().await;
    let app = api_routes(state_for(&base));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/listing_api/listings/?source=wizard")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .body(Body::from(r#"{"title":"Gold Hoops"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"x.csv\""
    );
    let json = read_json(response).await;
    assert_eq!(json["method"], "POST");
    assert_eq!(json["path"], "/listing_api/listings/");
    assert_eq!(json["query"], "source=wizard");
    assert_eq!(json["content_type"], "application/json");
    assert_eq!(json["accept"], "application/json");
    assert_eq!(json["body"], r#"{"title":"Gold Hoops"}"#);
}

#[tokio::test]
async fn forward_relays_validation_errors_verbatim() {
    let base = spawn_upstream().await;
    let app = api_routes(state_for(&base));

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/listing_api/listings/7/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["title"][0], "This field is required.");
}

#[tokio::test]
async fn forward_to_unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = api_routes(state_for(&format!("http://{addr}")));
    let response = app
        .oneshot(Request::builder().uri("/listing_api/listings/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_rejects_bodies_over_limit() {
    let base = spawn_upstream().await;
    let app = api_routes(AppState::new(Some(Upstream::new(base, TIMEOUTS).unwrap()), 16));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/listing_api/images/")
        .body(Body::from(vec![0_u8; 64]))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
