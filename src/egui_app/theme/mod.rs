//! Theme Module
//!
//! Color scheme and styling for the expense tracker:
//!
//! - Color constants, including the chart palette
//! - Frame builders for the top bar, cards, sidebar and banners
//!
//! # Usage
//!
//! ```rust,ignore
//! use expense_tracker::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.heading("Your Expenses");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
