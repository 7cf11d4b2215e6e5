//! HTTP handlers for the expense API
//!
//! All three routes sit behind `auth_middleware`; the caller arrives as an
//! `AuthUser` and only ever sees or touches their own expenses.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::expenses::db::{delete_expense_for_user, insert_expense, list_expenses_for_user};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{CreateExpenseRequest, DeleteResponse, Expense, ExpenseDraft};

/// Message for a delete that matched nothing the caller owns
pub const EXPENSE_NOT_FOUND: &str = "Expense not found or not authorized";

/// Message for a successful delete
pub const EXPENSE_DELETED: &str = "Expense deleted successfully";

/// GET /api/expenses
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Expense>>, BackendError> {
    let expenses = list_expenses_for_user(&state.db_pool, user.user_id).await?;
    tracing::debug!("Listed {} expenses for {}", expenses.len(), user.user_id);
    Ok(Json(expenses))
}

/// POST /api/expenses
///
/// # Example Request
///
/// ```http
/// POST /api/expenses HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "title": "Coffee", "amount": 4.5, "category": "Food", "date": "2024-01-05" }
/// ```
pub async fn create_expense(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), BackendError> {
    let Json(request) = payload?;
    let draft = ExpenseDraft::parse(&request)?;

    let expense = insert_expense(&state.db_pool, user.user_id, &draft).await?;
    tracing::info!("Expense {} created for {}", expense.id, user.user_id);

    Ok((StatusCode::CREATED, Json(expense)))
}

/// DELETE /api/expenses/{id}
///
/// An id that is not a UUID cannot name an owned expense, so it is reported
/// exactly like a foreign or missing one.
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    let expense_id = Uuid::parse_str(&id).map_err(|_| BackendError::not_found(EXPENSE_NOT_FOUND))?;

    if !delete_expense_for_user(&state.db_pool, expense_id, user.user_id).await? {
        tracing::warn!("Delete of {} by {} matched nothing", expense_id, user.user_id);
        return Err(BackendError::not_found(EXPENSE_NOT_FOUND));
    }

    tracing::info!("Expense {} deleted by {}", expense_id, user.user_id);
    Ok(Json(DeleteResponse {
        message: EXPENSE_DELETED.to_string(),
    }))
}
