//! Client session
//!
//! Holds the bearer token and the signed-in user. A `Session` is a cheap
//! handle; clones share the same slot, so the UI and the `ApiClient` it
//! built always agree on who is signed in. Nothing is persisted to disk.

use std::sync::{Arc, RwLock};

use crate::shared::{AuthResponse, PublicUser};

#[derive(Debug, Clone)]
struct SessionData {
    token: String,
    user: PublicUser,
}

/// Shared handle to the current login
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionData>>>,
}

impl Session {
    /// An empty (signed-out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a successful signup or login
    pub fn sign_in(&self, auth: &AuthResponse) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(SessionData {
            token: auth.token.clone(),
            user: auth.result.clone(),
        });
    }

    /// Forget the token and user
    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|data| data.token.clone())
    }

    /// Current user, if signed in
    pub fn user(&self) -> Option<PublicUser> {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|data| data.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        slot.is_some()
    }
}
