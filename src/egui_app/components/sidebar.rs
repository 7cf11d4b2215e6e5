/**
 * Summary Sidebar Component
 *
 * Overview of the expense list: grand total, count and per-category totals
 * with their share of the whole.
 */

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::summary::{format_currency, summarize};
use crate::shared::Expense;

/// Category line as shown in the sidebar, e.g. `Food: ₹4.50 (100%)`
pub fn category_line(category: &str, total: f64, percent: u32) -> String {
    format!("{}: {} ({}%)", category, format_currency(total), percent)
}

/// Render the sidebar contents
pub fn render(ui: &mut egui::Ui, expenses: &[Expense]) {
    let summary = summarize(expenses);

    styles::sidebar_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Overview");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Total Expenses:");
            ui.strong(format_currency(summary.total));
        });
        ui.horizontal(|ui| {
            ui.label("Number of Expenses:");
            ui.strong(summary.count.to_string());
        });

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Expenses by Category");
        ui.add_space(6.0);

        if summary.categories.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No data available");
            return;
        }

        for share in &summary.categories {
            ui.label(category_line(&share.category, share.total, share.percent()));
            ui.add(
                egui::ProgressBar::new(share.share as f32)
                    .desired_height(6.0)
                    .fill(colors::ACCENT),
            );
            ui.add_space(4.0);
        }
    });
}
