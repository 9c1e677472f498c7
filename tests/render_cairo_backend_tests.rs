#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use timeline_rs::TimelineError;
use timeline_rs::api::{AxisView, AxisViewConfig};
use timeline_rs::core::SurfaceSize;
use timeline_rs::render::{CairoRenderer, Color};

const NOON_2024_01_01_MS: i64 = 1_704_110_400_000;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 80).expect_err("invalid width must fail");
    assert!(matches!(err, TimelineError::InvalidSurface { .. }));
}

#[test]
fn cairo_renderer_draws_baseline_ticks_and_labels() {
    let renderer = CairoRenderer::new(960, 80).expect("renderer");
    let config = AxisViewConfig::new(SurfaceSize::new(960, 80), NOON_2024_01_01_MS);
    let view = AxisView::new(renderer, config).expect("view init");

    let markers = view.markers().len();
    let stats = view.into_renderer().last_stats();
    assert_eq!(stats.clears, 1);
    assert_eq!(stats.lines_drawn, markers + 1);
    assert_eq!(stats.texts_drawn, markers);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 60).expect("renderer");
    let config = AxisViewConfig::new(SurfaceSize::new(600, 60), NOON_2024_01_01_MS);
    let mut view = AxisView::new(renderer, config).expect("view init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 60).expect("surface");
    let context = Context::new(&surface).expect("context");
    view.render_on_cairo_context(&context)
        .expect("render on external context");

    let markers = view.markers().len();
    let stats = view.renderer().last_stats();
    assert_eq!(stats.lines_drawn, markers + 1);
    assert_eq!(stats.texts_drawn, markers);
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(320, 48).expect("renderer");
    let config = AxisViewConfig::new(SurfaceSize::new(320, 48), NOON_2024_01_01_MS);
    let view = AxisView::new(renderer, config).expect("view init");

    let path = std::env::temp_dir().join(format!("timeline-rs-{}.png", std::process::id()));
    view.renderer().write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    let _ = std::fs::remove_file(&path);

    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_paints_configured_background_on_external_context() {
    let mut renderer = CairoRenderer::new(200, 60).expect("renderer");
    let gray = Color::from_hex("#808080").expect("hex color");
    renderer.set_clear_color(gray).expect("valid clear color");
    renderer.set_font_family("Sans");
    assert_eq!(renderer.clear_color(), gray);
    assert_eq!(renderer.font_family(), "Sans");

    let config = AxisViewConfig::new(SurfaceSize::new(200, 60), NOON_2024_01_01_MS);
    let mut view = AxisView::new(renderer, config).expect("view init");

    let mut surface = ImageSurface::create(Format::ARgb32, 200, 60).expect("surface");
    {
        let context = Context::new(&surface).expect("context");
        view.render_on_cairo_context(&context)
            .expect("render on external context");
    }
    surface.flush();
    let data = surface.data().expect("surface data");
    // Top-left pixel sits above the baseline, so it only carries the background.
    assert_eq!(&data[0..4], &[0x80, 0x80, 0x80, 0xff]);
}

#[test]
fn cairo_renderer_rejects_out_of_range_clear_color() {
    let mut renderer = CairoRenderer::new(100, 40).expect("renderer");
    let err = renderer
        .set_clear_color(Color::rgb(1.5, 0.0, 0.0))
        .expect_err("channel above 1 must fail");
    assert!(matches!(err, TimelineError::InvalidData(_)));
    assert_eq!(renderer.clear_color(), Color::rgb(1.0, 1.0, 1.0));
}
