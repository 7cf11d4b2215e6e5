/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user to handlers.
 *
 * Every failure short-circuits with 401 before the handler runs:
 * - missing header or a scheme other than `Bearer`
 * - bad signature or expired token
 * - a subject that is not a UUID
 * - a subject that no longer resolves to a stored user
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Message for a request without usable credentials
pub const UNAUTHENTICATED: &str = "Unauthenticated";

/// Message for a token that fails verification
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token
/// 3. Checks the user in the token's subject still exists
/// 4. Attaches user data to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized(UNAUTHENTICATED)
    })?;

    let user_id = app_state.tokens.user_id_from_token(token).ok_or_else(|| {
        tracing::warn!("Rejected bearer token");
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    let user = get_user_by_id(&app_state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject not found in database: {}", user_id);
            BackendError::unauthorized(INVALID_TOKEN)
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(request: &Request) -> Option<&str> {
    let header = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user from request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(UNAUTHENTICATED)
            })?;

        Ok(AuthUser(user))
    }
}
