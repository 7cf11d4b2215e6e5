//! End-to-end tests: the desktop client's API layer against a real server

mod app_suite;
