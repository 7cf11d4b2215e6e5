//! Authentication Module
//!
//! This module handles user registration, login, and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`passwords`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT token generation and validation
//! - **`service`** - Signup and login rules, independent of HTTP
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Signup/login logic
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email and password → user created → JWT token returned
//! 2. **Login**: email and password → credentials verified → JWT token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` verified by
//!    `middleware::auth`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after one hour by default (`TOKEN_TTL_SECS`)
//! - The password hash never leaves the server

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Signup and login logic
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, signup};
pub use sessions::{Claims, TokenKeys};
pub use users::User;
