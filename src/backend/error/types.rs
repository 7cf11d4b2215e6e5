/**
 * Backend Error Types
 *
 * One enum covers every way a request can fail. Client-caused kinds carry the
 * message the caller will see; server-side kinds wrap the underlying error,
 * which is logged but never sent back.
 *
 * # Status Mapping
 *
 * - `Validation`, `Conflict`, `BadCredentials` - 400 Bad Request
 * - `Unauthorized` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Database`, `PasswordHash`, `Token`, `Internal` - 500 Internal Server Error
 *
 * Duplicate signups answer 400 rather than 409 so that existing clients of the
 * REST surface keep working.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned for every server-side failure
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed input
    #[error("{message}")]
    Validation {
        /// The offending field, or `body` when the payload itself is unreadable
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The resource already exists (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    BadCredentials,

    /// No such user or expense visible to the caller
    #[error("{0}")]
    NotFound(String),

    /// Missing, invalid or expired bearer token
    #[error("{0}")]
    Unauthorized(String),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Anything else that is our fault (e.g. a panicked blocking task)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict(_) | Self::BadCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the failure is ours rather than the caller's
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// The message safe to show to the caller
    pub fn message(&self) -> String {
        if self.is_server_error() {
            GENERIC_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        }
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation { field, message },
            SharedError::SerializationError { message } => Self::Validation {
                field: "body".to_string(),
                message,
            },
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}
