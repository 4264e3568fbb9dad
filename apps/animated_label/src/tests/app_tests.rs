use super::*;

use std::time::{Duration, Instant};

use egui::{epaint::Shape, Context, RawInput};

fn fast_settings() -> Settings {
    Settings {
        tick_ms: 5,
        ..Settings::titled("test")
    }
}

fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn window_defaults_are_cyan_with_red_text() {
    let settings = window_defaults();
    assert_eq!(settings.window_title, "Frame Test");
    assert_eq!(settings.inner_size(), [400.0, 400.0]);
    assert_eq!(settings.background, Rgb::CYAN);
    assert_eq!(settings.foreground, Rgb::RED);
    assert_eq!(settings.tick_ms, 2000);
}

#[test]
fn paints_label_in_foreground_color() {
    let ctx = Context::default();
    let mut app = AnimatedLabelApp::new(&ctx, &window_defaults()).expect("start app");

    let output = ctx.run(RawInput::default(), |ctx| app.show(ctx));
    let text_color = output.shapes.iter().find_map(|clipped| match &clipped.shape {
        Shape::Text(text) => Some(text.fallback_color),
        _ => None,
    });
    assert_eq!(text_color, Some(Color32::RED));
}

#[test]
fn becomes_visible_on_first_frame_and_paints_label() {
    let ctx = Context::default();
    let mut app = AnimatedLabelApp::new(&ctx, &Settings::titled("test")).expect("start app");
    assert_eq!(app.phase(), WindowPhase::Created);

    let output = ctx.run(RawInput::default(), |ctx| app.show(ctx));
    assert_eq!(app.phase(), WindowPhase::Visible);

    let painted = output.shapes.iter().any(|clipped| {
        matches!(&clipped.shape, Shape::Text(text) if text.galley.text() == crate::paint::PAINT_TEXT)
    });
    assert!(painted);
}

#[test]
fn offset_advances_while_open() {
    let ctx = Context::default();
    let app = AnimatedLabelApp::new(&ctx, &fast_settings()).expect("start app");
    assert!(wait_for(|| app.offset() != animation::START_OFFSET));
}

#[test]
fn close_stops_animation() {
    let ctx = Context::default();
    let mut app = AnimatedLabelApp::new(&ctx, &fast_settings()).expect("start app");
    assert!(wait_for(|| app.offset() != animation::START_OFFSET));

    app.close();
    assert_eq!(app.phase(), WindowPhase::Closed);

    let frozen = app.offset();
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(app.offset(), frozen);

    // Closed windows do not come back.
    ctx.run(RawInput::default(), |ctx| app.show(ctx));
    assert_eq!(app.phase(), WindowPhase::Closed);
}
