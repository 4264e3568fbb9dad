use crate::controller::events::{format_dimensions, PanelSize, UiEvent};

pub const INITIAL_LABEL: &str = "hello";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoState {
    label_text: String,
    panel_size: Option<PanelSize>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            label_text: INITIAL_LABEL.to_string(),
            panel_size: None,
        }
    }
}

impl DemoState {
    pub fn label_text(&self) -> &str {
        &self.label_text
    }
}

pub fn apply(state: &mut DemoState, event: UiEvent) {
    match event {
        UiEvent::PanelMeasured(size) => state.panel_size = Some(size),
        UiEvent::ButtonClicked => {
            let size = state.panel_size.unwrap_or_else(|| {
                tracing::debug!("button clicked before the panel was laid out");
                PanelSize::default()
            });
            state.label_text = format_dimensions(size);
            tracing::info!(height = size.height, width = size.width, "label updated from panel size");
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
