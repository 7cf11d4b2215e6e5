//! Shared Module
//!
//! Types shared between the desktop client and the server. Everything here is
//! plain data plus the validation and aggregation rules both sides agree on,
//! so it compiles without the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Auth request/response types
pub mod auth;

/// Expense records and the input parse boundary
pub mod expense;

/// Totals, category breakdown and monthly buckets
pub mod summary;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use auth::{AuthResponse, LoginRequest, PublicUser, SignupRequest};
pub use expense::{AmountInput, CreateExpenseRequest, DeleteResponse, Expense, ExpenseDraft, CATEGORIES};
pub use summary::{CategoryShare, ExpenseSummary};
