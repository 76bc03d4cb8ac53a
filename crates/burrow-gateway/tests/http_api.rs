use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use burrow_core::{InMemoryRegistry, Registry, ShortCode};
use burrow_gateway::{App, AppState};
use burrow_generator::{Generator, SeqGenerator};
use burrow_shortener::ShortenerService;
use jiff::Timestamp;
use serde_json::{json, Value};
use tower::ServiceExt;

fn seq_service() -> ShortenerService<InMemoryRegistry, SeqGenerator> {
    ShortenerService::new(
        InMemoryRegistry::new(),
        SeqGenerator::with_prefix("bw").unwrap(),
    )
}

fn app() -> Router {
    App::router(AppState::new(Arc::new(seq_service()), None))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn shorten(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/shorten")
        .header(header::HOST, "bur.row")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(app: &Router, url: &str) -> String {
    let response = send(app, shorten(json!({ "url": url }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn health_check() {
    let app = app();

    let response = send(&app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["links"], 0);
}

#[tokio::test]
async fn shorten_and_redirect() {
    let app = app();

    let response = send(&app, shorten(json!({ "url": "https://example.com" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["short_code"], "bw000000");
    assert_eq!(body["short_url"], "http://bur.row/bw000000");

    let response = send(&app, get("/bw000000")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com"
    );
}

#[tokio::test]
async fn configured_base_url_is_used_for_short_url() {
    let app = App::router(AppState::new(
        Arc::new(seq_service()),
        Some("https://s.example/".to_string()),
    ));

    let response = send(&app, shorten(json!({ "url": "https://example.com" }))).await;

    let body = body_json(response).await;
    assert_eq!(body["short_url"], "https://s.example/bw000000");
}

#[tokio::test]
async fn shorten_invalid_url() {
    let app = app();

    let response = send(&app, shorten(json!({ "url": "invalid" }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid URL");
}

#[tokio::test]
async fn shorten_non_string_url_is_invalid() {
    let app = app();

    for body in [json!({ "url": 123 }), json!({ "url": null }), json!({ "url": ["https://a.com"] })] {
        let response = send(&app, shorten(body.clone())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["error"], "Invalid URL", "{body}");
    }
}

#[tokio::test]
async fn shorten_missing_url() {
    let app = app();

    let response = send(&app, shorten(json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing URL");

    let request = Request::builder()
        .method("POST")
        .uri("/api/shorten")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing URL");

    let response = send(&app, shorten(json!("https://example.com"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing URL");
}

#[tokio::test]
async fn seq_codes_can_be_followed() {
    let service = ShortenerService::new(
        InMemoryRegistry::new(),
        SeqGenerator::with_prefix("node-a_").unwrap(),
    );
    let app = App::router(AppState::new(Arc::new(service), None));

    let code = create(&app, "https://example.com").await;
    assert_eq!(code, "node-a_000000");

    let response = send(&app, get(&format!("/{code}"))).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let response = send(&app, get(&format!("/api/stats/{code}"))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn redirect_not_found() {
    let app = app();

    let response = send(&app, get("/notarealcode")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Not found");

    let response = send(&app, get("/favicon.ico")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_count_redirects() {
    let app = app();
    let code = create(&app, "https://stats.com").await;

    send(&app, get(&format!("/{code}"))).await;

    let response = send(&app, get(&format!("/api/stats/{code}"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["url"], "https://stats.com");
    assert_eq!(body["clicks"], 1);
    let created_at: Timestamp = body["created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at <= Timestamp::now());
}

#[tokio::test]
async fn stats_not_found() {
    let app = app();

    let response = send(&app, get("/api/stats/missing")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

struct FixedGenerator;

impl Generator for FixedGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        ShortCode::new_unchecked("aB3xQ9")
    }
}

#[tokio::test]
async fn exhausted_allocation_is_server_error() {
    let registry = Arc::new(InMemoryRegistry::new());
    registry.create(&ShortCode::new_unchecked("aB3xQ9"), "https://taken.com");
    let service = ShortenerService::with_registry(Arc::clone(&registry), FixedGenerator);
    let app = App::router(AppState::new(Arc::new(service), None));

    let response = send(&app, shorten(json!({ "url": "https://example.com" }))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Could not generate unique code"
    );
    assert_eq!(registry.len(), 1);
}
