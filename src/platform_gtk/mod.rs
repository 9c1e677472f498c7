use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::AxisView;
use crate::error::TimelineResult;
use crate::render::{CairoContextRenderer, Renderer};

type SharedView<R> = Rc<RefCell<AxisView<R>>>;

/// GTK4 host for an [`AxisView`].
///
/// Owns a fixed-size `DrawingArea` matching the view surface, replays frames
/// on its cairo context and turns scroll/pointer events into view intents.
/// The view's own renderer is no longer repainted on state changes; GTK
/// draws every frame. All access happens on the GTK main thread.
pub struct TimelineWidget<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    view: SharedView<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R> TimelineWidget<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    /// Creates the drawing area, wires input controllers and appends it to `container`.
    #[must_use]
    pub fn attach(container: &gtk::Box, mut view: AxisView<R>) -> Self {
        let surface = view.surface();
        view.set_redraw_on_change(false);
        let drawing_area = gtk::DrawingArea::builder()
            .content_width(i32::try_from(surface.width).unwrap_or(i32::MAX))
            .content_height(i32::try_from(surface.height).unwrap_or(i32::MAX))
            .halign(gtk::Align::Start)
            .valign(gtk::Align::Start)
            .build();
        let view = Rc::new(RefCell::new(view));

        {
            let view = Rc::clone(&view);
            drawing_area.set_draw_func(move |_area, context, width, height| {
                paint_hosted_frame(&view, context, width, height);
            });
        }
        attach_wheel_zoom(&drawing_area, &view);
        attach_pointer_handlers(&drawing_area, &view);

        container.append(&drawing_area);
        Self { view, drawing_area }
    }

    #[must_use]
    pub fn view(&self) -> SharedView<R> {
        Rc::clone(&self.view)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    pub fn set_focal_time(&self, focal_time_ms: i64) -> TimelineResult<()> {
        self.view.borrow_mut().set_focal_time(focal_time_ms)?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}

/// Replays the current frame on a GTK-owned context.
///
/// Skips empty allocations and draws requested while the view is already
/// borrowed. Returns whether a frame was painted.
fn paint_hosted_frame<R>(
    view: &RefCell<AxisView<R>>,
    context: &cairo::Context,
    width: i32,
    height: i32,
) -> bool
where
    R: Renderer + CairoContextRenderer,
{
    if width <= 0 || height <= 0 {
        return false;
    }
    let mut view = match view.try_borrow_mut() {
        Ok(view) => view,
        Err(_) => return false,
    };
    match view.render_on_cairo_context(context) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "timeline draw failed");
            false
        }
    }
}

fn attach_wheel_zoom<R>(drawing_area: &gtk::DrawingArea, view: &SharedView<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    let view = Rc::clone(view);
    let area = drawing_area.downgrade();
    scroll.connect_scroll(move |_controller, _dx, dy| {
        let Ok(mut view) = view.try_borrow_mut() else {
            return gtk::glib::Propagation::Proceed;
        };
        match view.on_wheel(dy) {
            Ok(true) => {
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
            }
            Ok(false) => {}
            Err(err) => warn!(error = %err, "wheel zoom failed"),
        }
        gtk::glib::Propagation::Stop
    });
    drawing_area.add_controller(scroll);
}

fn attach_pointer_handlers<R>(drawing_area: &gtk::DrawingArea, view: &SharedView<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let click = gtk::GestureClick::new();
    {
        let view = Rc::clone(view);
        click.connect_pressed(move |_gesture, _n_press, x, y| {
            report(view.borrow_mut().on_pointer_down(x, y));
        });
    }
    {
        let view = Rc::clone(view);
        click.connect_released(move |_gesture, _n_press, x, y| {
            report(view.borrow_mut().on_pointer_up(x, y));
        });
    }
    drawing_area.add_controller(click);

    let motion = gtk::EventControllerMotion::new();
    {
        let view = Rc::clone(view);
        motion.connect_motion(move |_controller, x, y| {
            report(view.borrow_mut().on_pointer_move(x, y));
        });
    }
    {
        let view = Rc::clone(view);
        motion.connect_enter(move |_controller, x, y| {
            report(view.borrow_mut().on_pointer_enter(x, y));
        });
    }
    {
        let view = Rc::clone(view);
        motion.connect_leave(move |_controller| {
            report(view.borrow_mut().on_pointer_leave());
        });
    }
    drawing_area.add_controller(motion);
}

fn report(result: TimelineResult<bool>) {
    if let Err(err) = result {
        warn!(error = %err, "pointer handler failed");
    }
}
