//! Backend Module
//!
//! All server-side code: an Axum REST API over a SQLite store. Compiled only
//! with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly
//! - **`auth`** - Users, password hashing, JWT sessions, signup/login
//! - **`expenses`** - Expense persistence and CRUD handlers
//! - **`middleware`** - Bearer-token verification for protected routes
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── expenses/       - Expense API
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the JWT keys and the password hashing
//! cost. It is immutable after startup; the store is the only shared mutable
//! resource and serializes conflicting writes itself.
//!
//! # Endpoints
//!
//! - `POST /api/auth/signup`
//! - `POST /api/auth/login`
//! - `GET /api/expenses` (bearer token)
//! - `POST /api/expenses` (bearer token)
//! - `DELETE /api/expenses/{id}` (bearer token)
//! - `GET /health`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Expense persistence and handlers
pub mod expenses;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
