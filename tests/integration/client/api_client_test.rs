//! ApiClient against a mock server
//!
//! Checks request shape (paths, bearer header, JSON bodies) and how server
//! failures are mapped to `ClientError`.

use assert_matches::assert_matches;
use expense_tracker::egui_app::{ApiClient, ClientError, Config, Session};
use expense_tracker::shared::{AmountInput, CreateExpenseRequest, LoginRequest};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    let config = Config::for_server(server.uri()).unwrap();
    ApiClient::new(config, Session::new())
}

fn auth_body(token: &str) -> serde_json::Value {
    json!({
        "result": { "id": Uuid::new_v4(), "name": "Ann", "email": "ann@x.com" },
        "token": token
    })
}

fn expense_body(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": Uuid::new_v4(),
        "title": "Coffee",
        "amount": 4.5,
        "category": "Food",
        "date": "2024-01-05",
        "created_at": "2024-01-05T10:00:00Z"
    })
}

#[tokio::test]
async fn test_login_returns_token_without_touching_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "ann@x.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let auth = api
        .login(&LoginRequest { email: "ann@x.com".into(), password: "secret1".into() })
        .await
        .unwrap();

    assert_eq!(auth.token, "tok-1");
    assert!(!api.session().is_authenticated());

    api.session().sign_in(&auth);
    assert_eq!(api.session().token().as_deref(), Some("tok-1"));
    assert_eq!(api.session().user().unwrap().name, "Ann");
}

#[tokio::test]
async fn test_failed_login_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid credentials", "status": 400 })),
        )
        .mount(&server)
        .await;

    let api = client(&server);
    let err = api
        .login(&LoginRequest { email: "ann@x.com".into(), password: "nope".into() })
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::Api { status: 400, message: "Invalid credentials".into() });
    assert!(!api.session().is_authenticated());
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok-2")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .and(header("authorization", "Bearer tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([expense_body(Uuid::new_v4())])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let auth = api
        .login(&LoginRequest { email: "ann@x.com".into(), password: "secret1".into() })
        .await
        .unwrap();
    api.session().sign_in(&auth);
    let expenses = api.fetch_expenses().await.unwrap();

    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].title, "Coffee");
}

#[tokio::test]
async fn test_add_expense_posts_json() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/expenses"))
        .and(body_json(json!({
            "title": "Coffee",
            "amount": 4.5,
            "category": "Food",
            "date": "2024-01-05"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(expense_body(id)))
        .mount(&server)
        .await;

    let request = CreateExpenseRequest {
        title: "Coffee".into(),
        amount: Some(AmountInput::Number(4.5)),
        category: "Food".into(),
        date: "2024-01-05".into(),
    };
    let expense = client(&server).add_expense(&request).await.unwrap();

    assert_eq!(expense.id, id);
}

#[tokio::test]
async fn test_delete_hits_id_path() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/api/expenses/{}", id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Expense deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).delete_expense(id).await.unwrap();
    assert_eq!(response.message, "Expense deleted successfully");
}

#[tokio::test]
async fn test_unauthorized_is_detectable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated", "status": 401 })),
        )
        .mount(&server)
        .await;

    let err = client(&server).fetch_expenses().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_non_json_error_falls_back_to_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_expenses().await.unwrap_err();
    assert_eq!(err, ClientError::Api { status: 503, message: "Service Unavailable".into() });
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let err = client(&server).fetch_expenses().await.unwrap_err();
    assert_matches!(err, ClientError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let api = ApiClient::new(Config::for_server(uri).unwrap(), Session::new());
    let err = api.fetch_expenses().await.unwrap_err();
    assert_matches!(err, ClientError::Network(_));
}
