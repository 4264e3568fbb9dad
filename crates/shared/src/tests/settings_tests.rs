use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_match_demo_window() {
    let settings = load_settings_with(Settings::titled("Frame Test"), lookup_from(&[]));
    assert_eq!(settings.window_title, "Frame Test");
    assert_eq!(settings.inner_size(), [400.0, 400.0]);
    assert_eq!(settings.tick(), Duration::from_millis(2000));
    assert_eq!(settings.log_filter, "info");
    settings.validate().expect("defaults are valid");
}

#[test]
fn window_defaults_survive_when_env_is_empty() {
    let defaults = Settings {
        background: Rgb::CYAN,
        foreground: Rgb::RED,
        ..Settings::titled("Frame Test")
    };
    let settings = load_settings_with(defaults.clone(), lookup_from(&[]));
    assert_eq!(settings, defaults);
}

#[test]
fn applies_env_overrides() {
    let settings = load_settings_with(
        Settings::titled("Widgets"),
        lookup_from(&[
            ("APP__TICK_MS", "250"),
            ("APP__WINDOW_WIDTH", "640"),
            ("APP__BACKGROUND", "#102030"),
            ("RUST_LOG", "warn"),
            ("APP__LOG", "debug"),
        ]),
    );
    assert_eq!(settings.tick_ms, 250);
    assert_eq!(settings.window_width, 640.0);
    assert_eq!(settings.window_height, 400.0);
    assert_eq!(settings.background, Rgb(0x10, 0x20, 0x30));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn ignores_unparsable_overrides() {
    let settings = load_settings_with(
        Settings::titled("Widgets"),
        lookup_from(&[("APP__TICK_MS", "soon"), ("APP__FOREGROUND", "red")]),
    );
    assert_eq!(settings.tick_ms, 2000);
    assert_eq!(settings.foreground, Rgb::BLACK);
}

#[test]
fn rejects_zero_tick() {
    let settings = load_settings_with(
        Settings::titled("Widgets"),
        lookup_from(&[("APP__TICK_MS", "0")]),
    );
    let err = settings.validate().expect_err("zero tick is invalid");
    assert!(matches!(err, DemoError::InvalidSetting { name: "tick_ms", .. }));
}

#[test]
fn rejects_non_positive_window_size() {
    let settings = Settings {
        window_height: 0.0,
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}
