#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ideas_api::config::{ServerConfig, StoreBackend};
use ideas_api::router::build_app_router;
use ideas_api::state::AppState;
use ideas_db::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        database_max_connections: 1,
        store_backend: StoreBackend::Memory,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        min_password_length: 6,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// under test is the production one.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), Arc::new(MemoryStore::new()));
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    send_raw(app, method, uri, &body.to_string()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

/// Send a body verbatim with a JSON content type (for malformed-body tests).
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register an account through the API and return its id.
pub async fn register(app: &Router, full_name: &str, phone: &str, password: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/register",
        serde_json::json!({
            "fullName": full_name,
            "phoneNumber": phone,
            "password": password,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["user"]["id"]
        .as_i64()
        .expect("user id should be an integer")
}

/// Submit an idea through the API and return the response body.
pub async fn submit_idea(app: &Router, user_id: i64, text: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/ideas",
        serde_json::json!({
            "text": text,
            "project": "dashboard",
            "module": "settings",
            "section": "ui-ux",
            "submittedBy": "Ann",
            "userId": user_id,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
