/**
 * Expense Form Component
 *
 * The "Add New Expense" card. Input is kept as raw text and only parsed when
 * the user submits, using the same rules the server applies.
 */

use chrono::Local;
use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::{AmountInput, CreateExpenseRequest, ExpenseDraft, SharedError, CATEGORIES};

/// Shown after a failed submit
pub const ADD_FAILED: &str = "Failed to add expense. Please try again.";

/// Shown for a few seconds after a successful submit
pub const ADD_SUCCEEDED: &str = "Expense added successfully!";

/// Raw form input
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    /// Empty until the user picks one
    pub category: String,
    /// `YYYY-MM-DD`, today by default
    pub date: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: String::new(),
            date: today(),
            error: None,
            submitting: false,
        }
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request exactly as typed
    pub fn to_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            title: self.title.clone(),
            amount: Some(AmountInput::Text(self.amount.clone())),
            category: self.category.clone(),
            date: self.date.clone(),
        }
    }

    /// Parse the input and return a normalized request ready to send
    pub fn validate(&self) -> Result<CreateExpenseRequest, SharedError> {
        let draft = ExpenseDraft::parse(&self.to_request())?;
        Ok(CreateExpenseRequest::from(&draft))
    }

    /// Clear the inputs after a successful add; the date goes back to today
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/**
 * Render the expense form card
 *
 * # Arguments
 * * `ui` - The egui UI context
 * * `form` - Form state, edited in place
 * * `show_success` - Whether the success banner is still visible
 *
 * # Returns
 * `true` when the user pressed "Add Expense"
 */
pub fn render(ui: &mut egui::Ui, form: &mut ExpenseForm, show_success: bool) -> bool {
    let mut submitted = false;

    styles::card_frame().show(ui, |ui| {
        ui.heading("Add New Expense");
        ui.add_space(8.0);

        if let Some(error) = &form.error {
            styles::banner_frame(colors::ERROR).show(ui, |ui| {
                ui.colored_label(colors::ERROR, error);
            });
            ui.add_space(6.0);
        }
        if show_success {
            styles::banner_frame(colors::SUCCESS).show(ui, |ui| {
                ui.colored_label(colors::SUCCESS, ADD_SUCCEEDED);
            });
            ui.add_space(6.0);
        }

        ui.add_enabled_ui(!form.submitting, |ui| {
            egui::Grid::new("expense_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Title");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.title)
                            .hint_text("Expense title")
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label("Amount (₹)");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.amount)
                            .hint_text("0.00")
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label("Category");
                    let selected = if form.category.is_empty() {
                        "Select a category"
                    } else {
                        form.category.as_str()
                    };
                    egui::ComboBox::from_id_salt("expense_category")
                        .selected_text(selected.to_string())
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for category in CATEGORIES {
                                ui.selectable_value(&mut form.category, category.to_string(), category);
                            }
                        });
                    ui.end_row();

                    ui.label("Date");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(220.0),
                    );
                    ui.end_row();
                });

            ui.add_space(10.0);
            let label = if form.submitting { "Adding..." } else { "Add Expense" };
            if ui.button(label).clicked() {
                submitted = true;
            }
        });
    });

    submitted
}
