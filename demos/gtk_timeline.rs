use chrono::Utc;
use gtk4 as gtk;
use gtk4::prelude::*;
use timeline_rs::api::{AxisView, AxisViewConfig};
use timeline_rs::core::SurfaceSize;
use timeline_rs::platform_gtk::TimelineWidget;
use timeline_rs::render::{CairoRenderer, Color};

const WIDTH: u32 = 960;
const HEIGHT: u32 = 80;
const BACKGROUND_HEX: &str = "#f4f4f4";
const LABEL_FONT: &str = "Sans";

fn main() {
    let _ = timeline_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.timeline.demos.gtk_timeline")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let mut renderer = match CairoRenderer::new(WIDTH as i32, HEIGHT as i32) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create renderer: {err}");
            return;
        }
    };
    let background =
        Color::from_hex(BACKGROUND_HEX).and_then(|color| renderer.set_clear_color(color));
    if let Err(err) = background {
        eprintln!("keeping default background: {err}");
    }
    renderer.set_font_family(LABEL_FONT);

    let config = AxisViewConfig::starting_now(SurfaceSize::new(WIDTH, HEIGHT));
    let view = match AxisView::new(renderer, config) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("failed to initialize timeline: {err}");
            return;
        }
    };

    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    let status = gtk::Label::new(Some("scroll to zoom"));
    status.set_xalign(0.0);

    let timeline = TimelineWidget::attach(&root, view);

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let now_button = gtk::Button::with_label("Now");
    controls.append(&now_button);
    controls.append(&status);
    root.append(&controls);

    let timeline = std::rc::Rc::new(timeline);
    {
        let timeline = std::rc::Rc::clone(&timeline);
        let status = status.clone();
        now_button.connect_clicked(move |_| {
            match timeline.set_focal_time(Utc::now().timestamp_millis()) {
                Ok(()) => {
                    let state = timeline.view().borrow().view_state();
                    status.set_text(&format!("unit: {}s", state.unit_seconds()));
                }
                Err(err) => status.set_text(&format!("recenter failed: {err}")),
            }
        });
    }

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("timeline-rs")
        .child(&root)
        .build();
    window.present();
}
