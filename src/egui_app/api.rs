//! Expense API Client
//!
//! Async wrappers for the five REST endpoints. The bearer token comes from
//! the `Session` the client was built with and is attached to every request
//! while one is present. Signup and login only return the token; the caller
//! decides whether to store it in the session.
//!
//! There is no retry, caching or offline queue: each call is one request.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::egui_app::session::Session;
use crate::shared::{AuthResponse, CreateExpenseRequest, DeleteResponse, Expense, LoginRequest, SignupRequest};

/// Message shown when the server gives no usable explanation
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Client-side failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not what we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The background runtime could not be started or a task was lost
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl ClientError {
    /// Whether the server rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// One-line message for inline display
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Network(_) => "Unable to reach the server".to_string(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// HTTP client for the expense API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    session: Session,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            session,
            client: Client::new(),
        }
    }

    /// The session this client reads its token from
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// POST /api/auth/signup
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let auth: AuthResponse = self
            .send(self.client.post(self.config.api_url("/api/auth/signup")).json(request))
            .await?;
        tracing::info!("Signed up as {}", auth.result.email);
        Ok(auth)
    }

    /// POST /api/auth/login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let auth: AuthResponse = self
            .send(self.client.post(self.config.api_url("/api/auth/login")).json(request))
            .await?;
        tracing::info!("Logged in as {}", auth.result.email);
        Ok(auth)
    }

    /// GET /api/expenses
    pub async fn fetch_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        self.send(self.client.get(self.config.api_url("/api/expenses")))
            .await
    }

    /// POST /api/expenses
    pub async fn add_expense(&self, request: &CreateExpenseRequest) -> Result<Expense, ClientError> {
        self.send(self.client.post(self.config.api_url("/api/expenses")).json(request))
            .await
    }

    /// DELETE /api/expenses/{id}
    pub async fn delete_expense(&self, id: Uuid) -> Result<DeleteResponse, ClientError> {
        let url = self.config.api_url(&format!("/api/expenses/{}", id));
        self.send(self.client.delete(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let response = check_status(response).await?;
        response.json::<T>().await.map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Turn a non-2xx response into `ClientError::Api`, using the server's
/// `message` field when the body has one
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| fallback_message(status));

    tracing::warn!("Request failed: {} - {}", status, message);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}
