/**
 * Dashboard View
 *
 * Signed-in page: expense form, expense list and charts, with the summary
 * sidebar on the right. Narrow windows show one section at a time behind a
 * tab strip instead.
 */

use eframe::egui;

use crate::egui_app::components::{charts, expense_form, expense_list, sidebar};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::DashboardTab;

/// Windows narrower than this use the tabbed layout
pub const NARROW_WIDTH: f32 = 768.0;

const SIDEBAR_WIDTH: f32 = 280.0;

pub fn is_narrow(width: f32) -> bool {
    width < NARROW_WIDTH
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let width = ui.available_width();

    if is_narrow(width) {
        render_tabbed(ui, state, width);
    } else {
        render_wide(ui, state, width);
    }
}

fn render_wide(ui: &mut egui::Ui, state: &mut AppState, width: f32) {
    egui::SidePanel::right("summary_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .frame(styles::sidebar_frame())
        .show_inside(ui, |ui| {
            sidebar::render(ui, &state.expenses);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(0, 4)))
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    form_section(ui, state);
                    ui.add_space(12.0);
                    list_section(ui, state);
                    ui.add_space(12.0);
                    charts::render(ui, &state.expenses, width);
                });
        });
}

fn render_tabbed(ui: &mut egui::Ui, state: &mut AppState, width: f32) {
    ui.horizontal(|ui| {
        for tab in DashboardTab::ALL {
            let selected = state.active_tab == tab;
            let text = egui::RichText::new(tab.label()).color(if selected {
                colors::TEXT_LIGHT
            } else {
                colors::TEXT_DARK
            });
            let button = egui::Button::new(text).fill(if selected { colors::ACCENT } else { colors::INPUT_BG });
            if ui.add(button).clicked() {
                state.active_tab = tab;
            }
        }
    });
    ui.add_space(10.0);

    egui::ScrollArea::vertical()
        .id_salt("dashboard_tab_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| match state.active_tab {
            DashboardTab::Expenses => list_section(ui, state),
            DashboardTab::AddNew => form_section(ui, state),
            DashboardTab::Charts => charts::render(ui, &state.expenses, width),
            DashboardTab::Summary => sidebar::render(ui, &state.expenses),
        });
}

fn form_section(ui: &mut egui::Ui, state: &mut AppState) {
    let show_success = state.success_banner_visible();
    if expense_form::render(ui, &mut state.form, show_success) {
        state.submit_expense();
    }
}

fn list_section(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(error) = &state.dashboard_error {
        styles::banner_frame(colors::ERROR).show(ui, |ui| {
            ui.colored_label(colors::ERROR, error);
        });
        ui.add_space(6.0);
    }

    if state.loading_expenses && state.expenses.is_empty() {
        styles::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading expenses...");
            });
        });
        return;
    }

    if let Some(id) = expense_list::render(ui, &state.expenses, &state.deleting) {
        state.delete_expense(id);
    }
}
