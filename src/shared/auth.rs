//! Authentication wire types
//!
//! Request and response bodies for `/api/auth/signup` and `/api/auth/login`,
//! shared by the server handlers and the desktop client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Shortest password accepted at signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign up request
///
/// Missing fields deserialize as empty strings so that they surface as
/// validation errors naming the field instead of a body rejection.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SignupRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address, unique across users
    #[serde(default)]
    pub email: String,
    /// Plain-text password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

impl SignupRequest {
    /// Check required fields and return a normalized copy
    ///
    /// The name is trimmed and the email is trimmed and lower-cased.
    pub fn validate(&self) -> Result<Self, SharedError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SharedError::validation("name", "Name is required"));
        }
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            email,
            password: self.password.clone(),
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Check required fields and return a copy with the email normalized
    pub fn validate(&self) -> Result<Self, SharedError> {
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        Ok(Self {
            email,
            password: self.password.clone(),
        })
    }

    /// Trimmed, lower-cased email used for the user lookup
    ///
    /// No format check: a malformed email simply matches no user.
    pub fn lookup_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

fn normalize_email(raw: &str) -> Result<String, SharedError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(SharedError::validation("email", "Email is required"));
    }
    if !email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(email)
}

/// Public projection of a user (never carries the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Auth response
///
/// Returned by both signup and login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// The authenticated user
    pub result: PublicUser,
    /// Bearer token (HS256 JWT, one hour lifetime)
    pub token: String,
}
