//! HTTP-level integration tests for registration, login and account listing.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, post_json, register, send_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_register_returns_public_fields() {
    let app = build_test_app();
    let body = json!({ "fullName": "Ann", "phoneNumber": "555-0001", "password": "secret1" });

    let response = post_json(app, "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User registered successfully");
    assert!(json["user"]["id"].is_i64());
    assert_eq!(json["user"]["fullName"], "Ann");
    assert_eq!(json["user"]["phoneNumber"], "555-0001");
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_distinct_phones_get_distinct_ids() {
    let app = build_test_app();
    let a = register(&app, "Ann", "555-0001", "secret1").await;
    let b = register(&app, "Bob", "555-0002", "secret2").await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_register_duplicate_phone_fails() {
    let app = build_test_app();
    register(&app, "Ann", "555-0001", "secret1").await;

    let body = json!({ "fullName": "Not Ann", "phoneNumber": "555-0001", "password": "another-pw" });
    let response = post_json(app, "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "DUPLICATE_ACCOUNT");
    assert_eq!(json["message"], "User with this phone number already exists");
}

#[tokio::test]
async fn test_register_missing_fields_is_validation_error() {
    let app = build_test_app();
    let response = post_json(app, "/api/register", json!({ "phoneNumber": "555-0001" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Full name is required"));
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let app = build_test_app();
    let body = json!({ "fullName": "Ann", "phoneNumber": "555-0001", "password": "12345" });

    let response = post_json(app.clone(), "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    // Nothing was written.
    let users = body_json(get(app, "/api/users").await).await;
    assert_eq!(users["users"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = build_test_app();
    let response = send_raw(app, Method::POST, "/api/register", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_returns_registered_id() {
    let app = build_test_app();
    let id = register(&app, "Ann", "555-0001", "secret1").await;

    let body = json!({ "phoneNumber": "555-0001", "password": "secret1" });
    let response = post_json(app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["id"], id);
    assert_eq!(json["user"]["fullName"], "Ann");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = build_test_app();
    register(&app, "Ann", "555-0001", "secret1").await;

    let wrong_password = post_json(
        app.clone(),
        "/api/login",
        json!({ "phoneNumber": "555-0001", "password": "secret2" }),
    )
    .await;
    let unknown_phone = post_json(
        app,
        "/api/login",
        json!({ "phoneNumber": "555-0009", "password": "secret1" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_phone.status(), StatusCode::BAD_REQUEST);

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_phone).await;
    assert_eq!(a, b);
    assert_eq!(a["message"], "Invalid phone number or password");
}

// ---------------------------------------------------------------------------
// Account listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_users_excludes_password() {
    let app = build_test_app();
    register(&app, "Ann", "555-0001", "secret1").await;
    register(&app, "Bob", "555-0002", "secret2").await;

    let response = get(app, "/api/users").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("passwordHash").is_none());
        assert!(user["createdAt"].is_string());
        assert!(user["updatedAt"].is_string());
    }
    assert!(!json.to_string().contains("argon2"));
}
