//! Static widget tree: a label and button side by side above a bordered panel.

use egui::{Color32, Rect, RichText, Stroke};

use crate::controller::events::{PanelSize, UiEvent};

pub const BUTTON_TEXT: &str = "Test";
pub const PANEL_BORDER_WIDTH: f32 = 5.0;
pub const PANEL_BORDER_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

#[derive(Debug, Clone)]
pub struct PanelLayout {
    border: Stroke,
    label_color: Color32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutResponse {
    pub clicked: bool,
    pub button_rect: Rect,
    pub panel_rect: Rect,
}

impl LayoutResponse {
    /// Measurement first, so a click in the same frame sees this frame's panel.
    pub fn events(&self) -> impl Iterator<Item = UiEvent> {
        let measured = UiEvent::PanelMeasured(PanelSize::from_rect(self.panel_rect));
        std::iter::once(measured).chain(self.clicked.then_some(UiEvent::ButtonClicked))
    }
}

impl PanelLayout {
    pub fn new(label_color: Color32) -> Self {
        Self {
            border: Stroke::new(PANEL_BORDER_WIDTH, PANEL_BORDER_COLOR),
            label_color,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, label_text: &str) -> LayoutResponse {
        ui.vertical(|ui| {
            let row = ui.horizontal(|ui| {
                ui.label(RichText::new(label_text).color(self.label_color));
                ui.button(BUTTON_TEXT)
            });
            let button = row.inner;

            let panel = egui::Frame::NONE.stroke(self.border).show(ui, |ui| {
                let fill = ui.available_size();
                ui.allocate_space(fill);
            });

            LayoutResponse {
                clicked: button.clicked(),
                button_rect: button.rect,
                panel_rect: panel.response.rect,
            }
        })
        .inner
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
