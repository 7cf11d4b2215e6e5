/**
 * Expense List Component
 *
 * Table of the signed-in user's expenses with a Delete button per row.
 */

use chrono::NaiveDate;
use eframe::egui;
use uuid::Uuid;

use crate::egui_app::theme::{colors, styles};
use crate::shared::summary::format_currency;
use crate::shared::Expense;

/// Shown when the user has no expenses yet
pub const EMPTY_LIST: &str = "No expenses found. Add your first expense using the form.";

/// Date as shown in the table, e.g. `05 Jan 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/**
 * Render the expense table
 *
 * # Arguments
 * * `ui` - The egui UI context
 * * `expenses` - Rows to show, in server order
 * * `deleting` - Ids with a delete request in flight; their button is disabled
 *
 * # Returns
 * The id whose Delete button was clicked this frame, if any
 */
pub fn render(ui: &mut egui::Ui, expenses: &[Expense], deleting: &[Uuid]) -> Option<Uuid> {
    let mut clicked = None;

    styles::card_frame().show(ui, |ui| {
        ui.heading("Your Expenses");
        ui.add_space(8.0);

        if expenses.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, EMPTY_LIST);
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("expense_list_scroll")
            .max_height(360.0)
            .show(ui, |ui| {
                egui::Grid::new("expense_list_grid")
                    .num_columns(5)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in ["Title", "Category", "Amount", "Date", "Actions"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for expense in expenses {
                            ui.label(&expense.title);
                            ui.label(&expense.category);
                            ui.label(format_currency(expense.amount));
                            ui.label(format_date(expense.date));

                            let busy = deleting.contains(&expense.id);
                            let button = egui::Button::new(
                                egui::RichText::new(if busy { "Deleting..." } else { "Delete" })
                                    .color(colors::TEXT_LIGHT),
                            )
                            .fill(colors::DANGER);
                            if ui.add_enabled(!busy, button).clicked() {
                                clicked = Some(expense.id);
                            }
                            ui.end_row();
                        }
                    });
            });
    });

    clicked
}
