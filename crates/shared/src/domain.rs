use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(rgb: Rgb) -> Self {
        egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Lifecycle of a demo window. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Created,
    Visible,
    Closed,
}

impl WindowPhase {
    pub fn can_transition_to(self, next: WindowPhase) -> bool {
        matches!(
            (self, next),
            (WindowPhase::Created, WindowPhase::Visible)
                | (WindowPhase::Created, WindowPhase::Closed)
                | (WindowPhase::Visible, WindowPhase::Closed)
        )
    }

    /// Moves to `next` when the transition is legal, logging it. Returns whether the phase changed.
    pub fn advance_to(&mut self, next: WindowPhase) -> bool {
        if !self.can_transition_to(next) {
            return false;
        }
        tracing::debug!(from = ?*self, to = ?next, "window phase changed");
        *self = next;
        true
    }

    pub fn is_closed(self) -> bool {
        self == WindowPhase::Closed
    }
}
