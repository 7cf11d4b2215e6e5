//! Password hashing
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of stalling a request worker.

use crate::backend::error::BackendError;

/// Hash a plain-text password
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::internal(format!("hash task failed: {}", e)))??;
    Ok(hashed)
}

/// Check a plain-text password against a stored hash
///
/// A mismatch is `Ok(false)`; a malformed stored hash is an error.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, BackendError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| BackendError::internal(format!("verify task failed: {}", e)))??;
    Ok(matches)
}
