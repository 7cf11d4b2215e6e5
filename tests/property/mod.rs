//! Property-based tests

mod expense_proptest;
mod summary_proptest;
