//! Server test fixtures
//!
//! Every fixture gets its own in-memory SQLite database, so tests never see
//! each other's users or expenses.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use expense_tracker::backend::server::{create_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Secret the test server signs tokens with
pub const TEST_SECRET: &str = "test-secret";

/// Configuration for a throwaway server
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::new(TEST_SECRET);
    config.database_url = "sqlite::memory:".to_string();
    config.bcrypt_cost = 4;
    config
}

/// Router over a fresh in-memory database
pub async fn test_app() -> Router {
    create_app(&test_config())
        .await
        .expect("Failed to create test app")
}

/// Send one request through the router and decode the JSON reply
///
/// A body of `Value::Null` sends no body at all.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = if body.is_null() {
        builder.body(Body::empty()).unwrap()
    } else {
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Sign a user up and return their token
pub async fn signup_token(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/signup",
        None,
        json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Serve a fresh app on an ephemeral local port and return its base URL
pub async fn spawn_server() -> String {
    let app = test_app().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
