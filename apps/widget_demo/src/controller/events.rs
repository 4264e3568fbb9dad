//! Events raised by the widget layout during a frame.

/// Rendered panel dimensions in whole points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSize {
    pub width: u32,
    pub height: u32,
}

impl PanelSize {
    pub fn from_rect(rect: egui::Rect) -> Self {
        Self {
            width: whole_points(rect.width()),
            height: whole_points(rect.height()),
        }
    }
}

fn whole_points(extent: f32) -> u32 {
    if extent.is_finite() && extent > 0.0 {
        extent.round() as u32
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PanelMeasured(PanelSize),
    ButtonClicked,
}

pub fn format_dimensions(size: PanelSize) -> String {
    format!("height {} width {}", size.height, size.width)
}
