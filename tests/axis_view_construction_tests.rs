use timeline_rs::TimelineError;
use timeline_rs::api::{AxisStyle, AxisView, AxisViewConfig};
use timeline_rs::core::SurfaceSize;
use timeline_rs::render::{Color, NullRenderer};

const NOON_2024_01_01_MS: i64 = 1_704_110_400_000;

#[test]
fn construction_draws_the_first_frame() {
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS);
    let view = AxisView::new(NullRenderer::default(), config).expect("view init");

    let markers = view.markers().len();
    let renderer = view.renderer();
    assert_eq!(renderer.clear_count, 1);
    assert_eq!(renderer.last_line_count, markers + 1);
    assert_eq!(renderer.last_text_count, markers);
}

#[test]
fn default_view_uses_one_hour_units_across_twenty_four_divisions() {
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS);
    let view = AxisView::new(NullRenderer::default(), config).expect("view init");

    let state = view.view_state();
    assert_eq!(state.focal_time_ms(), NOON_2024_01_01_MS);
    assert_eq!(state.unit_seconds(), 3_600.0);
    assert_eq!(state.unit_count(), 24);
}

#[test]
fn zero_sized_surface_is_rejected() {
    for surface in [SurfaceSize::new(0, 80), SurfaceSize::new(960, 0)] {
        let config = AxisViewConfig::new(surface, NOON_2024_01_01_MS);
        let err = AxisView::new(NullRenderer::default(), config)
            .err()
            .expect("zero dimension must fail");
        assert!(matches!(err, TimelineError::InvalidSurface { .. }));
    }
}

#[test]
fn zero_unit_count_is_rejected() {
    let config =
        AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS).with_unit_count(0);
    let err = AxisView::new(NullRenderer::default(), config)
        .err()
        .expect("zero unit count must fail");
    assert!(matches!(err, TimelineError::InvalidConfig(_)));
}

#[test]
fn unit_seconds_outside_zoom_range_are_rejected() {
    for unit_seconds in [0.5, 3_601.0, f64::NAN, f64::INFINITY] {
        let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS)
            .with_unit_seconds(unit_seconds);
        let err = AxisView::new(NullRenderer::default(), config)
            .err()
            .expect("out-of-range unit must fail");
        assert!(matches!(err, TimelineError::InvalidConfig(_)));
    }
}

#[test]
fn focal_time_outside_calendar_range_is_rejected() {
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), i64::MAX);
    let err = AxisView::new(NullRenderer::default(), config)
        .err()
        .expect("unrepresentable focal time must fail");
    assert!(matches!(err, TimelineError::InvalidConfig(_)));
}

#[test]
fn invalid_style_is_rejected() {
    let bad_styles = [
        AxisStyle {
            tick_width: 0.0,
            ..AxisStyle::default()
        },
        AxisStyle {
            baseline_offset_px: f64::NAN,
            ..AxisStyle::default()
        },
        AxisStyle {
            label_color: Color::rgb(1.5, 0.0, 0.0),
            ..AxisStyle::default()
        },
        AxisStyle {
            label_utc_offset_seconds: 86_400,
            ..AxisStyle::default()
        },
    ];

    for style in bad_styles {
        let config =
            AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS).with_style(style);
        let err = AxisView::new(NullRenderer::default(), config)
            .err()
            .expect("invalid style must fail");
        assert!(matches!(err, TimelineError::InvalidConfig(_)));
    }
}

#[test]
fn set_style_validates_and_redraws() {
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS);
    let mut view = AxisView::new(NullRenderer::default(), config).expect("view init");

    let err = view
        .set_style(AxisStyle {
            label_font_size_px: -1.0,
            ..AxisStyle::default()
        })
        .expect_err("negative font size must fail");
    assert!(matches!(err, TimelineError::InvalidConfig(_)));
    assert_eq!(view.renderer().clear_count, 1);

    view.set_style(AxisStyle {
        tick_length_px: 6.0,
        ..AxisStyle::default()
    })
    .expect("valid style");
    assert_eq!(view.style().tick_length_px, 6.0);
    assert_eq!(view.renderer().clear_count, 2);
}
