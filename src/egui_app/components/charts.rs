/**
 * Charts Component
 *
 * Category pie chart and monthly bar chart, painted directly with the egui
 * painter. The pie's legend moves below the chart on narrow windows.
 */

use std::f32::consts::TAU;

use eframe::egui::{self, epaint::Mesh, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::egui_app::theme::{colors, styles};
use crate::shared::summary::{category_totals, format_currency, monthly_totals, MONTH_NAMES};
use crate::shared::Expense;

/// Shown instead of the charts when there is nothing to plot
pub const NO_CHART_DATA: &str = "No expense data available to display charts";

/// Windows narrower than this get the compact chart layout
pub const NARROW_CHART_WIDTH: f32 = 768.0;

/// Triangles per full turn of the pie
const PIE_SEGMENTS: usize = 96;

const CHART_HEIGHT: f32 = 220.0;

/// Whether the pie legend goes below the chart instead of beside it
pub fn legend_below(window_width: f32) -> bool {
    window_width < NARROW_CHART_WIDTH
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice
///
/// Values that are not positive get an empty slice.
pub fn slice_angles(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = 0.0_f32;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                (*value / total) as f32 * TAU
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Bar heights scaled so the largest month fills `max_height`
pub fn bar_heights(months: &[f64; 12], max_height: f32) -> [f32; 12] {
    let peak = months.iter().cloned().fold(0.0_f64, f64::max);
    let mut heights = [0.0_f32; 12];
    if peak <= 0.0 {
        return heights;
    }
    for (height, value) in heights.iter_mut().zip(months) {
        *height = (value.max(0.0) / peak) as f32 * max_height;
    }
    heights
}

/**
 * Render both charts
 *
 * # Arguments
 * * `ui` - The egui UI context
 * * `expenses` - All expenses of the signed-in user
 * * `window_width` - Current window width, used for the legend position
 */
pub fn render(ui: &mut egui::Ui, expenses: &[Expense], window_width: f32) {
    styles::card_frame().show(ui, |ui| {
        if expenses.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, NO_CHART_DATA);
            return;
        }

        let compact = legend_below(window_width);
        let title_size = if compact { 14.0 } else { 16.0 };

        ui.label(egui::RichText::new("Expenses by Category").strong().size(title_size));
        ui.add_space(6.0);
        let totals = category_totals(expenses);
        if compact {
            pie_chart(ui, &totals);
            ui.add_space(6.0);
            legend(ui, &totals, compact);
        } else {
            ui.horizontal(|ui| {
                pie_chart(ui, &totals);
                ui.add_space(16.0);
                ui.vertical(|ui| legend(ui, &totals, compact));
            });
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Monthly Expenses").strong().size(title_size));
        ui.add_space(6.0);
        bar_chart(ui, &monthly_totals(expenses));
    });
}

fn pie_chart(ui: &mut egui::Ui, totals: &[(String, f64)]) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(CHART_HEIGHT), Sense::hover());
    let center = response.rect.center();
    let radius = CHART_HEIGHT / 2.0 - 4.0;

    let values: Vec<f64> = totals.iter().map(|(_, total)| *total).collect();
    let mut mesh = Mesh::default();

    for (index, (start, end)) in slice_angles(&values).into_iter().enumerate() {
        if end <= start {
            continue;
        }
        let color = colors::chart_color(index);
        let steps = (((end - start) / TAU) * PIE_SEGMENTS as f32).ceil().max(1.0) as usize;
        for step in 0..steps {
            let a = start + (end - start) * step as f32 / steps as f32;
            let b = start + (end - start) * (step + 1) as f32 / steps as f32;
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(center, color);
            mesh.colored_vertex(point_on_circle(center, radius, a), color);
            mesh.colored_vertex(point_on_circle(center, radius, b), color);
            mesh.add_triangle(base, base + 1, base + 2);
        }
    }

    painter.add(egui::Shape::mesh(mesh));
    painter.circle_stroke(center, radius, Stroke::new(1.0, colors::CARD_BORDER));
}

fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
}

fn legend(ui: &mut egui::Ui, totals: &[(String, f64)], compact: bool) {
    let box_size = if compact { 12.0 } else { 15.0 };
    let font_size = if compact { 10.0 } else { 12.0 };

    let entry = |ui: &mut egui::Ui, index: usize, category: &str, total: f64| {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(box_size), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, colors::chart_color(index));
            ui.label(
                egui::RichText::new(format!("{} ({})", category, format_currency(total)))
                    .size(font_size),
            );
        });
    };

    if compact {
        ui.horizontal_wrapped(|ui| {
            for (index, (category, total)) in totals.iter().enumerate() {
                entry(ui, index, category, *total);
            }
        });
    } else {
        for (index, (category, total)) in totals.iter().enumerate() {
            entry(ui, index, category, *total);
        }
    }
}

fn bar_chart(ui: &mut egui::Ui, months: &[f64; 12]) {
    let width = ui.available_width().max(240.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    let rect = response.rect;

    let label_band = 18.0;
    let value_band = 14.0;
    let plot_height = rect.height() - label_band - value_band;
    let baseline = rect.bottom() - label_band;
    let slot = rect.width() / 12.0;
    let font = FontId::proportional(10.0);

    painter.line_segment(
        [Pos2::new(rect.left(), baseline), Pos2::new(rect.right(), baseline)],
        Stroke::new(1.0, colors::SEPARATOR),
    );

    for (index, height) in bar_heights(months, plot_height).iter().enumerate() {
        let left = rect.left() + slot * index as f32 + slot * 0.15;
        let right = left + slot * 0.7;
        let slot_center = rect.left() + slot * (index as f32 + 0.5);

        if *height > 0.0 {
            let bar = Rect::from_min_max(Pos2::new(left, baseline - height), Pos2::new(right, baseline));
            painter.rect_filled(bar, 2.0, colors::BAR_FILL.gamma_multiply(0.6));
            painter.rect_stroke(bar, 2.0, Stroke::new(1.0, colors::BAR_FILL), egui::StrokeKind::Inside);
            painter.text(
                Pos2::new(slot_center, bar.top() - 2.0),
                Align2::CENTER_BOTTOM,
                format_currency(months[index]),
                font.clone(),
                colors::TEXT_SECONDARY,
            );
        }

        painter.text(
            Pos2::new(slot_center, baseline + 3.0),
            Align2::CENTER_TOP,
            MONTH_NAMES[index],
            font.clone(),
            Color32::from_gray(90),
        );
    }
}
