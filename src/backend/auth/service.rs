/**
 * Auth Service
 *
 * Signup and login, independent of HTTP. The handlers are thin wrappers
 * around `register` and `authenticate`.
 *
 * # Registration Process
 *
 * 1. Validate and normalize the request (name, email, password length)
 * 2. Reject an email that is already registered
 * 3. Hash the password on the blocking pool
 * 4. Create the user; a unique-constraint race also counts as a duplicate
 * 5. Issue a token for the new user id
 *
 * # Login Process
 *
 * 1. Trim and lower-case the email; no format checks
 * 2. Look up the user by email (`NotFound` if absent, including malformed)
 * 3. Verify the password (`BadCredentials` on mismatch)
 * 4. Issue a token
 */

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest, SignupRequest};

/// Message for a signup with a registered email
pub const USER_EXISTS: &str = "User already exists";

/// Message for a login with an unknown email
pub const USER_NOT_FOUND: &str = "User does not exist";

/// Register a new user and sign them in
pub async fn register(state: &AppState, request: &SignupRequest) -> Result<AuthResponse, BackendError> {
    let request = request.validate()?;

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!("Signup rejected, email already registered: {}", request.email);
        return Err(BackendError::conflict(USER_EXISTS));
    }

    let password_hash = hash_password(request.password, state.bcrypt_cost).await?;

    let user = create_user(&state.db_pool, request.name, request.email, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Signup lost a race on a duplicate email");
                BackendError::conflict(USER_EXISTS)
            } else {
                BackendError::from(e)
            }
        })?;

    let token = state.tokens.create_token(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(AuthResponse {
        result: user.to_public(),
        token,
    })
}

/// Check credentials and sign the user in
pub async fn authenticate(state: &AppState, request: &LoginRequest) -> Result<AuthResponse, BackendError> {
    let email = request.lookup_email();

    let user = get_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            BackendError::not_found(USER_NOT_FOUND)
        })?;

    if !verify_password(request.password.clone(), user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::BadCredentials);
    }

    let token = state.tokens.create_token(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(AuthResponse {
        result: user.to_public(),
        token,
    })
}
