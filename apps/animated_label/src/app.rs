use animation::{AnimationError, AnimationHandle, AnimationLoop, SharedOffset};
use egui::Color32;
use shared::{Rgb, Settings, WindowPhase};

use crate::paint::paint_label;

pub const WINDOW_TITLE: &str = "Frame Test";

/// Cyan background with red text in a 400x400 window.
pub fn window_defaults() -> Settings {
    Settings {
        background: Rgb::CYAN,
        foreground: Rgb::RED,
        ..Settings::titled(WINDOW_TITLE)
    }
}

pub struct AnimatedLabelApp {
    offset: SharedOffset,
    animation: Option<AnimationHandle>,
    phase: WindowPhase,
    background: Color32,
    foreground: Color32,
}

impl AnimatedLabelApp {
    /// Starts the animation loop against `ctx`; the loop lives until the app is dropped.
    pub fn new(ctx: &egui::Context, settings: &Settings) -> Result<Self, AnimationError> {
        let offset = SharedOffset::default();
        let animation = AnimationLoop::new(offset.clone(), settings.tick()).spawn(ctx.clone())?;

        Ok(Self {
            offset,
            animation: Some(animation),
            phase: WindowPhase::Created,
            background: settings.background.into(),
            foreground: settings.foreground.into(),
        })
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn offset(&self) -> i32 {
        self.offset.get()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if self.phase.is_closed() {
            return;
        }
        self.phase.advance_to(WindowPhase::Visible);

        let x = self.offset();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.background))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                paint_label(ui.painter(), origin, x, self.foreground);
            });
    }

    /// Stops the animation loop and waits for its worker. Further calls are no-ops.
    pub fn close(&mut self) {
        tracing::debug!(phase = ?self.phase(), "closing animated label window");
        if let Some(handle) = self.animation.take() {
            if handle.is_finished() {
                tracing::warn!("animation loop ended before the window closed");
            }
            match handle.join() {
                Ok(exit) => tracing::debug!(?exit, "animation loop joined"),
                Err(err) => tracing::error!("animation loop did not shut down cleanly: {err}"),
            }
        }
        self.phase.advance_to(WindowPhase::Closed);
    }
}

impl eframe::App for AnimatedLabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl Drop for AnimatedLabelApp {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
