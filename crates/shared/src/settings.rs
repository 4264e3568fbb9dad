use std::{str::FromStr, time::Duration};

use crate::{domain::Rgb, error::DemoError};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub background: Rgb,
    pub foreground: Rgb,
    pub tick_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Paint demo".into(),
            window_width: 400.0,
            window_height: 400.0,
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
            tick_ms: 2000,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            window_title: title.into(),
            ..Self::default()
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_width, self.window_height]
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.tick_ms == 0 {
            return Err(DemoError::invalid_setting(
                "tick_ms",
                "tick interval must be greater than zero",
            ));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(DemoError::invalid_setting(
                "window_size",
                format!(
                    "window size must be positive, got {}x{}",
                    self.window_width, self.window_height
                ),
            ));
        }
        Ok(())
    }
}

/// Starts from a window's own `defaults`, then applies `APP__*` environment overrides.
pub fn load_settings(defaults: Settings) -> Settings {
    load_settings_with(defaults, |name| std::env::var(name).ok())
}

pub fn load_settings_with(defaults: Settings, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = defaults;

    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = parsed(&lookup, "APP__WINDOW_WIDTH") {
        settings.window_width = v;
    }
    if let Some(v) = parsed(&lookup, "APP__WINDOW_HEIGHT") {
        settings.window_height = v;
    }
    if let Some(v) = parsed(&lookup, "APP__TICK_MS") {
        settings.tick_ms = v;
    }
    if let Some(raw) = lookup("APP__BACKGROUND") {
        match Rgb::parse_hex(&raw) {
            Some(color) => settings.background = color,
            None => tracing::warn!(value = %raw, "ignoring APP__BACKGROUND; expected #rrggbb"),
        }
    }
    if let Some(raw) = lookup("APP__FOREGROUND") {
        match Rgb::parse_hex(&raw) {
            Some(color) => settings.foreground = color,
            None => tracing::warn!(value = %raw, "ignoring APP__FOREGROUND; expected #rrggbb"),
        }
    }
    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG") {
        settings.log_filter = v;
    }

    settings
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable setting override");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
