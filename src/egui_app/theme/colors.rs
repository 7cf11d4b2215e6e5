//! Color Constants for the Expense Tracker Theme
//!
//! Warm brown chrome around light content cards.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Dark background for the auth pages and tab strip
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Dashboard background - Off-white
pub const DASHBOARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Card background (form, list, charts)
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFC, 0xF8);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Summary sidebar background - Light tan
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for buttons and the active tab
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x6D, 0x4B, 0x3D);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Delete button
pub const DANGER: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD0, 0xC0, 0xB0);

/// Monthly bar chart fill
pub const BAR_FILL: Color32 = Color32::from_rgb(0x36, 0xA2, 0xEB);

/// Category slice colors, assigned in order and reused when exhausted
pub const CHART_PALETTE: [Color32; 7] = [
    Color32::from_rgb(0xE0, 0x7A, 0x5F),
    Color32::from_rgb(0x3D, 0x85, 0xC6),
    Color32::from_rgb(0x81, 0xB2, 0x9A),
    Color32::from_rgb(0xF2, 0xCC, 0x8F),
    Color32::from_rgb(0x9B, 0x5D, 0xE5),
    Color32::from_rgb(0xE5, 0x6B, 0x9C),
    Color32::from_rgb(0x8D, 0x99, 0xAE),
];

/// Color for the `index`-th category
pub fn chart_color(index: usize) -> Color32 {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}
