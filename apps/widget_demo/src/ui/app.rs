use egui::Color32;
use shared::{Settings, WindowPhase};

use crate::controller::reducer::{apply, DemoState};
use crate::ui::layout::{LayoutResponse, PanelLayout};

pub const WINDOW_TITLE: &str = "Swing Test";

pub fn window_defaults() -> Settings {
    Settings::titled(WINDOW_TITLE)
}

pub struct WidgetDemoApp {
    state: DemoState,
    layout: PanelLayout,
    phase: WindowPhase,
    background: Color32,
}

impl WidgetDemoApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: DemoState::default(),
            layout: PanelLayout::new(settings.foreground.into()),
            phase: WindowPhase::Created,
            background: settings.background.into(),
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Lays out one frame and applies the events it raised. Returns the layout response.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<LayoutResponse> {
        if self.phase.is_closed() {
            return None;
        }
        self.phase.advance_to(WindowPhase::Visible);

        let frame = egui::Frame::central_panel(&ctx.style()).fill(self.background);
        let response = egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| self.layout.show(ui, self.state.label_text()))
            .inner;

        for event in response.events() {
            apply(&mut self.state, event);
        }
        Some(response)
    }

    pub fn close(&mut self) {
        self.phase.advance_to(WindowPhase::Closed);
    }
}

impl eframe::App for WidgetDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl Drop for WidgetDemoApp {
    fn drop(&mut self) {
        self.close();
    }
}
