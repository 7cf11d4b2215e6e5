//! Dashboard Components
//!
//! Reusable pieces of the dashboard page:
//!
//! - `expense_form` - "Add New Expense" card and its input state
//! - `expense_list` - Table of expenses with per-row delete
//! - `sidebar` - Totals and category breakdown
//! - `charts` - Category pie chart and monthly bar chart

pub mod charts;
pub mod expense_form;
pub mod expense_list;
pub mod sidebar;

pub use expense_form::ExpenseForm;
