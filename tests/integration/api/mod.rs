//! API integration tests
//!
//! Integration tests for all API endpoints

mod auth_test;
mod expenses_test;
mod config_test;
