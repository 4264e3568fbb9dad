use super::*;

use egui::{epaint::Shape, Context, RawInput};

fn painted_texts(ctx: &Context, x: i32) -> Vec<(String, Pos2)> {
    let output = ctx.run(RawInput::default(), |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                paint_label(ui.painter(), ui.max_rect().min, x, Color32::BLACK);
            });
    });
    output
        .shapes
        .into_iter()
        .filter_map(|clipped| match clipped.shape {
            Shape::Text(text) => Some((text.galley.text().to_string(), text.pos)),
            _ => None,
        })
        .collect()
}

#[test]
fn label_sits_at_offset_and_fixed_height() {
    let origin = Pos2::new(8.0, 4.0);
    assert_eq!(text_position(origin, 100), Pos2::new(108.0, 104.0));
    assert_eq!(text_position(origin, 250), Pos2::new(258.0, 104.0));
}

#[test]
fn redraw_always_renders_literal_text() {
    let ctx = Context::default();
    for x in [100, 180, 250] {
        let texts = painted_texts(&ctx, x);
        assert_eq!(texts.len(), 1, "one label per frame at x={x}");
        assert_eq!(texts[0].0, PAINT_TEXT);
    }
}

#[test]
fn label_moves_with_offset_only_horizontally() {
    let ctx = Context::default();
    let left = painted_texts(&ctx, 100)[0].1;
    let right = painted_texts(&ctx, 150)[0].1;
    assert!((right.x - left.x - 50.0).abs() < 0.5);
    assert!((right.y - left.y).abs() < f32::EPSILON);
    assert!(left.y < PAINT_Y);
}
