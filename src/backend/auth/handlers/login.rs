/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::service::authenticate;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `404 Not Found` - No user with this email ("User does not exist")
/// * `400 Bad Request` - Wrong password ("Invalid credentials") or invalid input
/// * `500 Internal Server Error` - Database query or token generation failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ann@x.com", "password": "secret1" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let response = authenticate(&state, &request).await?;
    Ok(Json(response))
}
