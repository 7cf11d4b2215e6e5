/**
 * API Route Wiring
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Expenses (require `Authorization: Bearer <token>`)
 * - `GET /api/expenses` - List the caller's expenses
 * - `POST /api/expenses` - Create an expense
 * - `DELETE /api/expenses/{id}` - Delete an owned expense
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::expenses::{create_expense, delete_expense, list_expenses};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The auth middleware is attached with `route_layer` to the expense routes
/// only, so unknown paths still reach the fallback instead of answering 401.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let expense_routes = Router::new()
        .route("/api/expenses", get(list_expenses).post(create_expense))
        .route("/api/expenses/{id}", delete(delete_expense))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .merge(expense_routes)
}
