use eframe::egui;

use crate::egui_app::auth::password_strength;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let signup = state.current_view == AppView::Signup;

    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if signup { 380.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("💰 Expense Tracker").size(32.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if signup { "Create Account" } else { "Welcome Back" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT)
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;
            let indent = (available_rect.width() - input_width - label_width - 20.0).max(0.0) / 2.0;
            let loading = state.auth_state.loading;

            ui.add_enabled_ui(!loading, |ui| {
                if signup {
                    ui.horizontal(|ui| {
                        ui.add_space(indent);
                        ui.add_sized([label_width, 24.0], egui::Label::new(
                            egui::RichText::new("Name:").color(colors::TEXT_SECONDARY)
                        ));
                        ui.add_sized([input_width, 28.0], egui::TextEdit::singleline(&mut state.auth_state.name_input)
                            .text_color(colors::TEXT_DARK));
                    });
                    ui.add_space(8.0);
                }

                ui.horizontal(|ui| {
                    ui.add_space(indent);
                    ui.add_sized([label_width, 24.0], egui::Label::new(
                        egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)
                    ));
                    ui.add_sized([input_width, 28.0], egui::TextEdit::singleline(&mut state.auth_state.email_input)
                        .text_color(colors::TEXT_DARK));
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.add_space(indent);
                    ui.add_sized([label_width, 24.0], egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY)
                    ));
                    ui.add_sized([input_width, 28.0], egui::TextEdit::singleline(&mut state.auth_state.password_input)
                        .password(!state.auth_state.show_password)
                        .text_color(colors::TEXT_DARK));
                    let toggle = if state.auth_state.show_password { "Hide" } else { "Show" };
                    if ui.small_button(toggle).clicked() {
                        state.auth_state.show_password = !state.auth_state.show_password;
                    }
                });

                if signup && !state.auth_state.password_input.is_empty() {
                    let strength = password_strength(&state.auth_state.password_input);
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.add_space(indent + label_width + 8.0);
                        ui.add_sized([input_width, 8.0], egui::ProgressBar::new(strength.fraction())
                            .fill(strength.color()));
                    });
                    ui.label(egui::RichText::new(format!("Password strength: {}", strength.label()))
                        .size(12.0)
                        .color(strength.color()));
                }
            });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 120.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width).max(0.0) / 2.0);

                let submit = if signup { "Sign Up" } else { "Login" };
                if ui.add_enabled(!loading, egui::Button::new(
                    egui::RichText::new(submit).color(colors::TEXT_LIGHT)
                ).fill(colors::ACCENT).min_size(egui::vec2(button_width, 32.0))).clicked() {
                    if signup {
                        state.handle_signup();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let switch = if signup { "Back to Login" } else { "Create Account" };
                if ui.add_sized([button_width, 32.0], egui::Button::new(
                    egui::RichText::new(switch).color(colors::TEXT_SECONDARY)
                )).clicked() {
                    if signup {
                        state.show_login();
                    } else {
                        state.show_signup();
                    }
                }
            });

            if loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                    ui.label(egui::RichText::new(if signup { "Creating account..." } else { "Logging in..." })
                        .color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
