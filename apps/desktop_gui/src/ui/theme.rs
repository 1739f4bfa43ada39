//! Palette and sizing shared by the pathway screens.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(165, 180, 252);
pub const ERROR_FILL: Color32 = Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(175, 96, 96);
pub const BENEFIT: Color32 = Color32::from_rgb(110, 200, 150);
pub const ACTION: Color32 = Color32::from_rgb(240, 190, 100);

pub const CARD_MIN_WIDTH: f32 = 440.0;
pub const CONTENT_MAX_WIDTH: f32 = 880.0;
pub const LIST_INDENT: f32 = 18.0;

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.hyperlink_color = ACCENT_SOFT;
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}

pub fn card_fill(ui: &egui::Ui) -> Color32 {
    ui.visuals().faint_bg_color.gamma_multiply(0.55)
}

pub fn heading_size(level: u8) -> f32 {
    match level {
        1 => 24.0,
        2 => 20.0,
        3 => 17.0,
        _ => 15.0,
    }
}
