//! Full user journey
//!
//! Starts the server on an ephemeral port with an in-memory database and
//! walks through signup, adding and deleting an expense with the same
//! `ApiClient` the desktop app uses.

use expense_tracker::egui_app::components::sidebar::category_line;
use expense_tracker::egui_app::{ApiClient, ClientError, Config, Session};
use expense_tracker::shared::summary::{format_currency, monthly_totals, summarize};
use expense_tracker::shared::{AmountInput, CreateExpenseRequest, LoginRequest, SignupRequest};
use pretty_assertions::assert_eq;

use crate::common::spawn_server;

fn coffee() -> CreateExpenseRequest {
    CreateExpenseRequest {
        title: "Coffee".to_string(),
        amount: Some(AmountInput::Number(4.5)),
        category: "Food".to_string(),
        date: "2024-01-05".to_string(),
    }
}

#[tokio::test]
async fn test_signup_add_summarize_delete() {
    let base = spawn_server().await;
    let api = ApiClient::new(Config::for_server(&base).unwrap(), Session::new());

    let auth = api
        .signup(&SignupRequest {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(auth.result.name, "Ann");
    assert!(!api.session().is_authenticated());
    api.session().sign_in(&auth);
    assert!(api.session().is_authenticated());

    assert!(api.fetch_expenses().await.unwrap().is_empty());

    let created = api.add_expense(&coffee()).await.unwrap();
    let expenses = api.fetch_expenses().await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, created.id);

    let summary = summarize(&expenses);
    assert_eq!(format_currency(summary.total), "₹4.50");
    assert_eq!(summary.count, 1);
    assert_eq!(
        category_line(&summary.categories[0].category, summary.categories[0].total, summary.categories[0].percent()),
        "Food: ₹4.50 (100%)"
    );
    assert_eq!(monthly_totals(&expenses)[0], 4.5);

    let deleted = api.delete_expense(created.id).await.unwrap();
    assert_eq!(deleted.message, "Expense deleted successfully");
    assert!(api.fetch_expenses().await.unwrap().is_empty());

    let again = api.delete_expense(created.id).await.unwrap_err();
    assert_eq!(again, ClientError::Api { status: 404, message: "Expense not found or not authorized".into() });
}

#[tokio::test]
async fn test_second_user_sees_nothing() {
    let base = spawn_server().await;

    let ann = ApiClient::new(Config::for_server(&base).unwrap(), Session::new());
    let auth = ann
        .signup(&SignupRequest {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    ann.session().sign_in(&auth);
    let created = ann.add_expense(&coffee()).await.unwrap();

    let bob = ApiClient::new(Config::for_server(&base).unwrap(), Session::new());
    let auth = bob
        .signup(&SignupRequest {
            name: "Bob".to_string(),
            email: "bob@x.com".to_string(),
            password: "secret2".to_string(),
        })
        .await
        .unwrap();
    bob.session().sign_in(&auth);

    assert!(bob.fetch_expenses().await.unwrap().is_empty());
    let err = bob.delete_expense(created.id).await.unwrap_err();
    assert_eq!(err, ClientError::Api { status: 404, message: "Expense not found or not authorized".into() });
    assert_eq!(ann.fetch_expenses().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_login_after_signup_and_signed_out_access() {
    let base = spawn_server().await;

    let first = ApiClient::new(Config::for_server(&base).unwrap(), Session::new());
    first
        .signup(&SignupRequest {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    let anonymous = ApiClient::new(Config::for_server(&base).unwrap(), Session::new());
    let err = anonymous.fetch_expenses().await.unwrap_err();
    assert!(err.is_unauthorized());

    let auth = anonymous
        .login(&LoginRequest { email: "ann@x.com".to_string(), password: "secret1".to_string() })
        .await
        .unwrap();
    assert_eq!(auth.result.email, "ann@x.com");
    anonymous.session().sign_in(&auth);
    assert!(anonymous.fetch_expenses().await.unwrap().is_empty());

    anonymous.session().clear();
    assert!(anonymous.fetch_expenses().await.unwrap_err().is_unauthorized());
}
