//! Integration tests for the HTTP gateway.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; time is
//! controlled through a `ManualClock`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use session_gate::api::{create_router, AppState};
use session_gate::config::Config;
use session_gate::domain::Role;
use session_gate::infra::ManualClock;
use session_gate::services::StaticCredentials;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(role: Role) -> (Arc<ManualClock>, Router) {
    let clock = Arc::new(ManualClock::default());
    let credentials = Arc::new(StaticCredentials::new("user", "password", role));
    let state = AppState::with_parts(Config::default(), credentials, clock.clone());
    (clock, create_router(state))
}

fn app() -> (Arc<ManualClock>, Router) {
    app_with(Role::Admin)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

fn login_request(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn logout_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri("/api/logout");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn login(app: &Router) -> String {
    let (status, _, body) = send(app, login_request("username=user&password=password")).await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_returns_token_and_role() {
    let (_, app) = app();
    let (status, _, body) = send(&app, login_request("username=user&password=password")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["role"], "admin");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_tokens_are_fresh() {
    let (_, app) = app();
    let first = login(&app).await;
    let second = login(&app).await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (_, app) = app();
    let (status, headers, body) = send(&app, login_request("username=user&password=nope")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(body["error"]["code"], "AUTHENTICATION_FAILURE");
    assert_eq!(body["error"]["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_rejects_incomplete_form() {
    let (_, app) = app();

    let (status, _, body) = send(&app, login_request("username=&password=password")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Username is required");

    let (status, _, _) = send(&app, login_request("username=user")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Protected routes
// =============================================================================

#[tokio::test]
async fn test_missing_header_is_malformed() {
    let (_, app) = app();
    let (status, headers, body) = send(&app, get("/api/secret-data", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(headers.contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(body["error"]["code"], "MALFORMED_CREDENTIAL");
    assert_eq!(body["error"]["message"], "Invalid authentication scheme");
}

#[tokio::test]
async fn test_wrong_scheme_is_malformed() {
    let (_, app) = app();
    let token = login(&app).await;
    let (status, _, body) = send(
        &app,
        get("/api/secret-data", Some(&format!("Token {}", token))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MALFORMED_CREDENTIAL");
}

#[tokio::test]
async fn test_unknown_token_is_invalid() {
    let (_, app) = app();
    let (status, _, body) = send(&app, get("/api/secret-data", Some("Bearer made-up"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    assert_eq!(body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let (_, app) = app();
    let token = login(&app).await;
    let auth = bearer(&token);

    let (status, _, body) = send(&app, get("/api/secret-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, user! Secret message: 42.");

    let (status, _, body) = send(&app, get("/api/admin-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, admin user! This is admin-only data.");

    let (status, _, body) = send(&app, logout_request(Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    let (status, _, body) = send(&app, get("/api/secret-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token_then_invalid() {
    let (clock, app) = app();
    let auth = bearer(&login(&app).await);

    clock.advance(Duration::seconds(3601));

    let (status, _, body) = send(&app, get("/api/admin-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(body["error"]["message"], "Token expired");

    let (status, _, body) = send(&app, get("/api/secret-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_still_valid_at_lifetime_boundary() {
    let (clock, app) = app();
    let auth = bearer(&login(&app).await);

    clock.advance(Duration::seconds(3600));

    let (status, _, _) = send(&app, get("/api/secret-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_role_forbidden_on_admin_route() {
    let (_, app) = app_with(Role::User);
    let auth = bearer(&login(&app).await);

    let (status, headers, body) = send(&app, get("/api/admin-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!headers.contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(body["error"]["code"], "INSUFFICIENT_PRIVILEGE");
    assert_eq!(body["error"]["message"], "Insufficient privileges");

    // The session survives the rejection.
    let (status, _, _) = send(&app, get("/api/secret-data", Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Logout
// =============================================================================

#[tokio::test]
async fn test_logout_unknown_token_succeeds() {
    let (_, app) = app();
    let (status, _, body) = send(&app, logout_request(Some("Bearer never-issued"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");
}

#[tokio::test]
async fn test_logout_requires_bearer_scheme() {
    let (_, app) = app();
    let (status, _, body) = send(&app, logout_request(Some("Basic dXNlcjpwYXNz"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid authentication scheme");

    let (status, _, _) = send(&app, logout_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Ambient endpoints
// =============================================================================

#[tokio::test]
async fn test_health_counts_sessions() {
    let (_, app) = app();
    login(&app).await;
    login(&app).await;

    let (status, _, body) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_sessions"], 2);
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend_origin() {
    let (_, app) = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/secret-data")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = send(&app, request).await;
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_preflight_mirrors_requested_method() {
    let (_, app) = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/secret-data")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = send(&app, request).await;
    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed.contains("PUT"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (_, app) = app();
    let (status, _, body) = send(&app, get("/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/login"].is_object());
    assert!(body["paths"]["/api/admin-data"].is_object());
}
