use client_core::BadgeKind;
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const PAGE_FILL: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(254, 242, 242);
pub const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(252, 165, 165);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);

/// Foreground and background of a brief badge.
pub fn badge_colors(kind: BadgeKind) -> (egui::Color32, egui::Color32) {
    match kind {
        BadgeKind::Intent => (egui::Color32::from_rgb(29, 78, 216), egui::Color32::from_rgb(219, 234, 254)),
        BadgeKind::WordCount => (egui::Color32::from_rgb(21, 128, 61), egui::Color32::from_rgb(220, 252, 231)),
        BadgeKind::Tone => (egui::Color32::from_rgb(126, 34, 206), egui::Color32::from_rgb(243, 232, 255)),
    }
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_FILL;
    visuals.window_fill = CARD_FILL;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(10);

    style.visuals = visuals;
    // Keep text inputs visibly outlined on the light page.
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, CARD_STROKE);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(16))
}
