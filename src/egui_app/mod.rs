//! egui Native Desktop App Module
//!
//! This module provides the expense tracker's desktop client using
//! egui/eframe. It talks to the Axum backend over its JSON API.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Where the server lives (`CLIENT_API_URL`)
//! - **`session`** - Bearer token and signed-in user, shared with the API client
//! - **`api`** - Async HTTP client for the auth and expense endpoints
//! - **`auth`** - Login/signup form state and the password strength meter
//! - **`types`** - View and dashboard tab enums
//! - **`state`** - Central state; runs requests and applies their results
//! - **`components`** - Expense form, list, summary sidebar and charts
//! - **`views`** - Top bar, auth pages and dashboard layout
//! - **`theme`** - Colors and frame styles
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs        - Module exports and documentation
//! ├── main.rs       - Main application entry point
//! ├── config.rs     - Configuration management
//! ├── session.rs    - Token storage
//! ├── api.rs        - HTTP client
//! ├── auth.rs       - Auth form state
//! ├── types.rs      - Shared enums
//! ├── state/        - Application state
//! ├── components/   - Dashboard widgets
//! ├── views/        - Page layouts
//! └── theme/        - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin expense_app
//! ```

pub mod config;
pub mod session;
pub mod api;
pub mod auth;
pub mod types;
pub mod state;
pub mod components;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use session::Session;
pub use api::{ApiClient, ClientError};
pub use auth::{AuthState, PasswordStrength};
pub use types::{AppView, DashboardTab};
pub use state::AppState;
