//! Redraw handler: draws the fixed label at the current horizontal offset.

use egui::{Align2, Color32, FontId, Pos2, Rect};

pub const PAINT_TEXT: &str = "paint done";
pub const PAINT_Y: f32 = 100.0;
pub const PAINT_FONT_SIZE: f32 = 16.0;

/// Baseline-left anchor of the label for offset `x`, relative to `origin`.
pub fn text_position(origin: Pos2, x: i32) -> Pos2 {
    origin + egui::vec2(x as f32, PAINT_Y)
}

pub fn paint_label(painter: &egui::Painter, origin: Pos2, x: i32, color: Color32) -> Rect {
    painter.text(
        text_position(origin, x),
        Align2::LEFT_BOTTOM,
        PAINT_TEXT,
        FontId::proportional(PAINT_FONT_SIZE),
        color,
    )
}

#[cfg(test)]
#[path = "tests/paint_tests.rs"]
mod tests;
