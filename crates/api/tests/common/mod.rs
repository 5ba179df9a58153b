//! Shared helpers for HTTP-level integration tests.
//!
//! Each test gets its own database via `#[sqlx::test]`; the app is built
//! through [`build_test_app`] so tests exercise the same middleware stack
//! (CORS, request ID, timeout, tracing, panic recovery) that production uses.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use wayfarer_api::auth::cookie::SESSION_COOKIE;
use wayfarer_api::auth::jwt::{generate_token, JwtConfig};
use wayfarer_api::auth::password::hash_password;
use wayfarer_api::config::{AiConfig, ServerConfig};
use wayfarer_api::router::build_app_router;
use wayfarer_api::state::AppState;
use wayfarer_db::models::user::{CreateUser, User};
use wayfarer_db::repositories::UserRepo;

/// Signing secret shared by the test app and [`session_cookie_for`].
const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Build a test `ServerConfig` with safe defaults.
///
/// No Gemini API key is configured, so the suggestion endpoint answers
/// `SERVICE_UNAVAILABLE` instead of calling out to the network.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 24,
        },
        ai: AiConfig {
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: "http://127.0.0.1:1".to_string(),
            geocode_base_url: "http://127.0.0.1:1".to_string(),
            upstream_timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Test data
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the row plus the
/// plaintext password.
pub async fn create_test_user(pool: &PgPool, email: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: Some("Test User".to_string()),
            email: email.to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint a session cookie header value (`jwt=<token>`) for the given user,
/// signed with the test secret.
pub fn session_cookie_for(user_id: i64) -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiry_hours: 24,
    };
    let token = generate_token(user_id, &config).expect("token generation should succeed");
    format!("{SESSION_COOKIE}={token}")
}

/// Extract the session cookie pair (`jwt=<token>`) from a response's
/// `Set-Cookie` header, if present.
pub fn session_cookie_from(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{SESSION_COOKIE}=")))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a raw body with a JSON content type, bypassing serialization.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a `multipart/form-data` body assembled by [`multipart_body`].
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    boundary: &str,
    body: Vec<u8>,
    cookie: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(COOKIE, cookie)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Assemble a multipart body from `(field_name, filename, content_type, bytes)`
/// parts.
pub fn multipart_body(boundary: &str, parts: &[(&str, &str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
