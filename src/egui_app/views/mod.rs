use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod auth_view;
pub mod dashboard_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("💰 Expense Tracker").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.current_view == AppView::Dashboard {
                        if ui.button("Logout").clicked() {
                            state.logout();
                            return;
                        }
                        if let Some(user) = state.user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("Welcome, {}", user.name));
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = match state.current_view {
        AppView::Dashboard => styles::dashboard_frame(),
        AppView::Login | AppView::Signup => egui::Frame::default()
            .fill(colors::BG_DARK)
            .inner_margin(egui::Margin::same(0)),
    };

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login | AppView::Signup => auth_view::render(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
        });
}
