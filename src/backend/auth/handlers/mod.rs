//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration (201)
//! - **`login`** - POST /api/auth/login - User authentication (200)
//!
//! Both answer `{ "result": { id, name, email }, "token": "<jwt>" }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::backend::auth::handlers::{signup, login};
//! use axum::{routing::post, Router};
//!
//! let router = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login));
//! ```

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

// Re-export handlers
pub use login::login;
pub use signup::signup;
