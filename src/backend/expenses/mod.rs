//! Expenses Module
//!
//! Persistence and HTTP handlers for a user's expenses.
//!
//! # Module Structure
//!
//! ```text
//! expenses/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - Owner-scoped database operations
//! └── handlers.rs   - List, create and delete handlers
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/expenses` - the caller's expenses in insertion order
//! - `POST /api/expenses` - create; 201 with the stored record
//! - `DELETE /api/expenses/{id}` - owner-scoped delete; 404 otherwise

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_expense, delete_expense, list_expenses};
