use timeline_rs::TimelineError;
use timeline_rs::api::{AxisStyle, AxisView, AxisViewConfig};
use timeline_rs::core::SurfaceSize;
use timeline_rs::render::{
    Color, DrawingSurface, LinePrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const NOON_2024_01_01_MS: i64 = 1_704_110_400_000;

fn default_view() -> AxisView<NullRenderer> {
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS);
    AxisView::new(NullRenderer::default(), config).expect("view init")
}

#[test]
fn frame_starts_with_full_width_baseline_near_the_bottom() {
    let view = default_view();
    let frame = view.build_render_frame();

    let baseline = frame.lines.first().expect("baseline");
    assert_eq!(view.baseline_y(), 52.0);
    assert_eq!(
        *baseline,
        LinePrimitive::new(0.0, 52.0, 960.0, 52.0, 6.0, Color::rgb(0.8, 0.8, 0.8))
    );
}

#[test]
fn every_marker_gets_a_tick_and_a_centered_label() {
    let view = default_view();
    let markers = view.markers();
    let frame = view.build_render_frame();

    assert_eq!(frame.lines.len(), markers.len() + 1);
    assert_eq!(frame.texts.len(), markers.len());

    for ((marker, tick), label) in markers.iter().zip(&frame.lines[1..]).zip(&frame.texts) {
        assert_eq!(tick.x1, marker.x_px);
        assert_eq!(tick.x2, marker.x_px);
        assert_eq!(tick.y1, 52.0);
        assert_eq!(tick.y2, 62.0);
        assert_eq!(tick.color, Color::rgb(0.0, 0.0, 1.0));

        assert_eq!(label.text, marker.label);
        assert_eq!(label.x, marker.x_px);
        assert_eq!(label.y, 64.0);
        assert_eq!(label.font_size_px, 10.0);
        assert_eq!(label.h_align, TextHAlign::Center);
    }
}

#[test]
fn frames_are_identical_for_unchanged_state() {
    let mut view = default_view();
    let first = view.build_render_frame();
    let second = view.build_render_frame();
    assert_eq!(first, second);

    view.zoom_in().expect("zoom in");
    assert_ne!(view.build_render_frame(), first);
    view.zoom_out().expect("zoom out");
    assert_eq!(view.build_render_frame(), first);
}

#[test]
fn repeated_redraws_replace_previous_content() {
    let mut view = default_view();
    let expected_lines = view.renderer().last_line_count;
    let expected_texts = view.renderer().last_text_count;

    for _ in 0..3 {
        view.render().expect("render");
    }

    let renderer = view.renderer();
    assert_eq!(renderer.clear_count, 4);
    assert_eq!(renderer.last_line_count, expected_lines);
    assert_eq!(renderer.last_text_count, expected_texts);
}

#[test]
fn style_offsets_drive_geometry() {
    let style = AxisStyle {
        baseline_offset_px: 10.0,
        tick_length_px: 4.0,
        label_offset_y_px: 5.0,
        ..AxisStyle::default()
    };
    let config =
        AxisViewConfig::new(SurfaceSize::new(480, 40), NOON_2024_01_01_MS).with_style(style);
    let view = AxisView::new(NullRenderer::default(), config).expect("view init");
    let frame = view.build_render_frame();

    assert_eq!(frame.lines[0].y1, 30.0);
    assert_eq!(frame.lines[1].y2, 34.0);
    assert_eq!(frame.texts[0].y, 35.0);
}

#[test]
fn renderer_rejects_invalid_primitives() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(SurfaceSize::new(100, 20)).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        10.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));

    let err = renderer.render(&frame).expect_err("empty text must fail");
    assert!(matches!(err, TimelineError::InvalidData(_)));
    assert_eq!(renderer.clear_count, 0);
}

#[test]
fn clear_resets_counters_on_the_drawing_surface() {
    let mut renderer = NullRenderer::default();
    renderer
        .draw_line(&LinePrimitive::horizontal(
            0.0,
            10.0,
            5.0,
            1.0,
            Color::rgb(0.0, 0.0, 0.0),
        ))
        .expect("draw line");
    assert_eq!(renderer.last_line_count, 1);

    renderer.clear().expect("clear");
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.clear_count, 1);
}
