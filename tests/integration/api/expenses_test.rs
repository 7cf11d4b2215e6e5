//! Expense API integration tests
//!
//! Ownership scoping, validation and authentication of the expense routes.

use axum::http::{Method, StatusCode};
use expense_tracker::backend::auth::TokenKeys;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{send, signup_token, test_app, TEST_SECRET};

fn coffee() -> Value {
    json!({ "title": "Coffee", "amount": 4.5, "category": "Food", "date": "2024-01-05" })
}

#[tokio::test]
async fn test_create_and_list() {
    let app = test_app().await;
    let token = signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, created) = send(&app, Method::POST, "/api/expenses", Some(&token), coffee()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Coffee");
    assert_eq!(created["amount"], 4.5);
    assert_eq!(created["date"], "2024-01-05");

    let (status, list) = send(&app, Method::GET, "/api/expenses", Some(&token), Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_amount_as_numeric_string() {
    let app = test_app().await;
    let token = signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/expenses",
        Some(&token),
        json!({ "title": "Bus", "amount": "12.25", "category": "Transportation", "date": "2024-02-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["amount"], 12.25);
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let app = test_app().await;
    let ann = signup_token(&app, "Ann", "ann@x.com", "secret1").await;
    let bob = signup_token(&app, "Bob", "bob@x.com", "secret2").await;

    send(&app, Method::POST, "/api/expenses", Some(&ann), coffee()).await;

    let (status, list) = send(&app, Method::GET, "/api/expenses", Some(&bob), Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_own_expense() {
    let app = test_app().await;
    let token = signup_token(&app, "Ann", "ann@x.com", "secret1").await;
    let (_, created) = send(&app, Method::POST, "/api/expenses", Some(&token), coffee()).await;
    let uri = format!("/api/expenses/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&token), Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Expense deleted successfully");

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&token), Value::Null).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Expense not found or not authorized");

    let (_, list) = send(&app, Method::GET, "/api/expenses", Some(&token), Value::Null).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_cannot_delete_someone_elses_expense() {
    let app = test_app().await;
    let ann = signup_token(&app, "Ann", "ann@x.com", "secret1").await;
    let bob = signup_token(&app, "Bob", "bob@x.com", "secret2").await;
    let (_, created) = send(&app, Method::POST, "/api/expenses", Some(&ann), coffee()).await;
    let uri = format!("/api/expenses/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), Value::Null).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/api/expenses", Some(&ann), Value::Null).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_with_malformed_id() {
    let app = test_app().await;
    let token = signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let (status, _) = send(&app, Method::DELETE, "/api/expenses/not-a-uuid", Some(&token), Value::Null).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_errors_name_the_field() {
    let app = test_app().await;
    let token = signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let cases = [
        (json!({ "amount": 4.5, "category": "Food", "date": "2024-01-05" }), "title"),
        (json!({ "title": "Coffee", "category": "Food", "date": "2024-01-05" }), "amount"),
        (json!({ "title": "Coffee", "amount": 0, "category": "Food", "date": "2024-01-05" }), "amount"),
        (json!({ "title": "Coffee", "amount": "abc", "category": "Food", "date": "2024-01-05" }), "amount"),
        (json!({ "title": "Coffee", "amount": 4.5, "date": "2024-01-05" }), "category"),
        (json!({ "title": "Coffee", "amount": 4.5, "category": "Food", "date": "05/01/2024" }), "date"),
    ];

    for (body, field) in cases {
        let (status, error) = send(&app, Method::POST, "/api/expenses", Some(&token), body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(error["field"], field, "body {}", body);
    }

    let (_, list) = send(&app, Method::GET, "/api/expenses", Some(&token), Value::Null).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/expenses", None, Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthenticated");

    let (status, _) = send(&app, Method::POST, "/api/expenses", None, coffee()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/expenses", Some("garbage"), Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = test_app().await;
    signup_token(&app, "Ann", "ann@x.com", "secret1").await;

    let expired = TokenKeys::new(TEST_SECRET, -600).create_token(Uuid::new_v4()).unwrap();
    let (status, _) = send(&app, Method::GET, "/api/expenses", Some(&expired), Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = test_app().await;

    let forged = TokenKeys::new("some-other-secret", 3600).create_token(Uuid::new_v4()).unwrap();
    let (status, _) = send(&app, Method::GET, "/api/expenses", Some(&forged), Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None, Value::Null).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}
