/**
 * egui Native Desktop App - Main Entry Point
 *
 * Desktop client for the expense tracker. Set `CLIENT_API_URL` to point it
 * at a server other than `http://127.0.0.1:5000`.
 */
use std::time::Duration;

use eframe::egui;
use expense_tracker::egui_app::{theme, views, AppState, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = match AppState::new(Config::new()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start client: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            let mut state = state;
            state.set_repaint_context(cc.egui_ctx.clone());
            Ok(Box::new(ExpenseApp { state }))
        }),
    )
}

/// Main application state
struct ExpenseApp {
    state: AppState,
}

impl eframe::App for ExpenseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_results();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        if self.state.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
