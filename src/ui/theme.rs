use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::visuals::RelationToNow;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const NOW_LINE: Color32 = Color32::from_rgb(240, 75, 75);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const GUTTER_WIDTH: f32 = 48.0;
pub const BLOCK_ROUNDING: f32 = 4.0;
pub const BLOCK_INSET: f32 = 4.0;
pub const MARKER_HEIGHT: f32 = 2.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_block() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

// ── Relation styling ─────────────────────────────────────────────────────────

/// Fade finished tasks and outline the running one.
pub fn block_fill(background: Color32, relation: RelationToNow) -> Color32 {
    match relation {
        RelationToNow::Past => background.gamma_multiply(0.45),
        RelationToNow::Present | RelationToNow::Future => background,
    }
}

pub fn block_stroke(relation: RelationToNow) -> Stroke {
    match relation {
        RelationToNow::Present => Stroke::new(1.5, NOW_LINE),
        RelationToNow::Past | RelationToNow::Future => Stroke::NONE,
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);
}
