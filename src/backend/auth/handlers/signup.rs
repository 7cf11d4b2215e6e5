/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Validation
 *
 * - Name is required
 * - Email must contain '@' and is stored lower-cased
 * - Password must be at least 6 characters long
 * - Email must be unique (no existing user with same email)
 */

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, response::Json};

use crate::backend::auth::service::register;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, SignupRequest};

/// Sign up handler
///
/// Creates the account and returns a token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - Invalid input, or a user with this email already exists
/// * `500 Internal Server Error` - Hashing, storage or token generation failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ann", "email": "ann@x.com", "password": "secret1" }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// {
///   "result": { "id": "123e4567-e89b-12d3-a456-426614174000", "name": "Ann", "email": "ann@x.com" },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for email: {}", request.email);

    let response = register(&state, &request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
