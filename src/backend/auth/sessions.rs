/**
 * Session Tokens
 *
 * This module issues and verifies the JWT bearer tokens handed out by signup
 * and login.
 *
 * Tokens are HS256-signed with the configured secret and carry only the user
 * id (`sub`) plus issue and expiry times. Verification uses the library's
 * default validation, so expiry is always enforced.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Create keys from a shared secret
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `ttl_secs` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Lifetime of issued tokens, in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Create a JWT token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    ///
    /// # Returns
    /// JWT token string
    pub fn create_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    ///
    /// # Arguments
    /// * `token` - JWT token string
    ///
    /// # Returns
    /// Decoded claims or error
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Extract the user ID from a token
    ///
    /// Returns `None` when the token is invalid, expired, or its subject is
    /// not a UUID.
    pub fn user_id_from_token(&self, token: &str) -> Option<Uuid> {
        match self.verify_token(token) {
            Ok(claims) => Uuid::parse_str(&claims.sub).ok(),
            Err(e) => {
                tracing::debug!("Token verification failed: {:?}", e);
                None
            }
        }
    }
}
