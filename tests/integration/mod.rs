//! Integration tests
//!
//! - `api` drives the router in-process
//! - `client` checks the desktop client's HTTP layer against mock servers

#[cfg(feature = "ssr")]
pub mod api;
pub mod client;
