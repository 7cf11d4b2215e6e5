//! Expense Tracker - Main Library
//!
//! A personal expense tracker: users sign up, log in, and record expenses that
//! are summarized by category and by month.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the desktop client and the server
//!   - Wire types for auth and expenses
//!   - Parse-and-validate boundary for user input
//!   - Expense aggregation (totals, category breakdown, monthly buckets)
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum REST API under `/api`
//!   - JWT bearer authentication and bcrypt password hashing
//!   - SQLite persistence through sqlx
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - HTTP data layer with an injected session
//!   - Login, signup and dashboard pages
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the server binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use expense_tracker::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
