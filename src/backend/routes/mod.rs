//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - `/api` endpoints (auth, expenses)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/expenses` - List the caller's expenses (authenticated)
//! - `POST /api/expenses` - Create an expense (authenticated)
//! - `DELETE /api/expenses/{id}` - Delete an owned expense (authenticated)
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
