//! Authentication API integration tests
//!
//! Tests for the signup and login endpoints.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{send, signup_token, test_app};

#[tokio::test]
async fn test_signup_success() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["name"], "Ann");
    assert_eq!(body["result"]["email"], "ann@x.com");
    assert!(body["result"]["id"].is_string());
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["result"].get("password").is_none());
    assert!(body["result"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        json!({ "name": "Other Ann", "email": "ann@x.com", "password": "another1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_signup_email_is_case_insensitive() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        json!({ "name": "Ann", "email": "ANN@X.COM", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_missing_field_names_it() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        json!({ "email": "ann@x.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn test_signup_malformed_json() {
    let app = test_app().await;

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/auth/signup")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "email": "ann@x.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Ann");
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "email": "ann@x.com", "password": "wrong-password" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "email": "nobody@x.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User does not exist");
}

#[tokio::test]
async fn test_login_malformed_email_is_unknown_user() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    for body in [
        json!({ "email": "bob", "password": "x" }),
        json!({ "email": "nobody@x.com", "password": "" }),
        json!({}),
    ] {
        let (status, error) = send(&app, Method::POST, "/api/auth/login", None, body.clone()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "body {}", body);
        assert_eq!(error["message"], "User does not exist");
    }
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None, serde_json::Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
