//! Canvas 2D renderer for the particle background.

use crate::dom;
use crate::events::SharedPointer;
use crate::frame::AnimationLoop;
use folio_core::{
    backing_scale, link_color, pulse_radius, FieldParams, ParticleField,
    FIELD_RESIZE_DEBOUNCE_MS, PARTICLE_FILL, PULSE_STOPS, REDUCED_MOTION_QUERY,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FieldPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl FieldPainter {
    /// Size the backing store to the viewport times the capped pixel ratio
    /// and draw in CSS pixels.
    fn resize(&self, width: f64, height: f64) {
        let dpr = backing_scale(dom::device_pixel_ratio());
        self.canvas.set_width((width * dpr).floor() as u32);
        self.canvas.set_height((height * dpr).floor() as u32);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{width}px"));
        _ = style.set_property("height", &format!("{height}px"));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn draw(&self, field: &ParticleField, pointer: Vec2, time_ms: f64) {
        let ctx = &self.ctx;
        let (w, h) = field.size();
        ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        ctx.set_fill_style(&JsValue::from_str(PARTICLE_FILL));
        for p in field.particles() {
            ctx.begin_path();
            _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            ctx.fill();
        }

        ctx.set_line_width(1.0);
        let ps = field.particles();
        for link in field.links() {
            let (a, b) = (ps[link.a].pos, ps[link.b].pos);
            ctx.set_stroke_style(&JsValue::from_str(&link_color(link.alpha)));
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        }

        let (px, py) = (pointer.x as f64, pointer.y as f64);
        let radius = pulse_radius(time_ms) as f64;
        let Ok(gradient) = ctx.create_radial_gradient(px, py, 0.0, px, py, radius) else {
            return;
        };
        for (offset, color) in PULSE_STOPS {
            _ = gradient.add_color_stop(offset, color);
        }
        ctx.set_fill_style(&gradient);
        ctx.begin_path();
        _ = ctx.arc(px, py, radius, 0.0, TAU);
        ctx.fill();
    }
}

/// Start the particle background on `#fx-canvas`. Skipped when the canvas is
/// absent or has no 2D context; hidden when reduced motion is preferred.
pub fn init(
    window: &web::Window,
    document: &web::Document,
    pointer: SharedPointer,
    params: FieldParams,
) -> anyhow::Result<()> {
    let Some(canvas) = document
        .get_element_by_id("fx-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[field] no #fx-canvas, skipping");
        return Ok(());
    };
    if dom::media_matches(REDUCED_MOTION_QUERY) {
        _ = canvas.style().set_property("display", "none");
        log::info!("[field] reduced motion, canvas hidden");
        return Ok(());
    }
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
        _ => {
            log::debug!("[field] no 2d context, skipping");
            return Ok(());
        }
    };

    let (width, height) = dom::viewport_size();
    let painter = Rc::new(FieldPainter { canvas, ctx });
    painter.resize(width, height);
    let field = Rc::new(RefCell::new(ParticleField::new(
        params,
        width as f32,
        height as f32,
        StdRng::from_entropy(),
    )));
    log::info!(
        "[field] {} particles at {}x{}",
        field.borrow().particles().len(),
        width,
        height
    );

    let animation = {
        let field = field.clone();
        let painter = painter.clone();
        AnimationLoop::new("field", move |time_ms| {
            let position = pointer.position();
            let mut field = field.borrow_mut();
            field.step(position);
            painter.draw(&field, position, time_ms);
        })
    };

    let pending_resize: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::add_listener(window, "resize", move |_: web::Event| {
        if let Some(id) = pending_resize.take() {
            dom::clear_timeout(id);
        }
        let field = field.clone();
        let painter = painter.clone();
        let timer = dom::set_timeout(
            move || {
                let (width, height) = dom::viewport_size();
                painter.resize(width, height);
                field.borrow_mut().resize(width as f32, height as f32);
            },
            FIELD_RESIZE_DEBOUNCE_MS,
        );
        pending_resize.set(timer);
    });

    animation.pause_when_hidden(document);
    animation.start();
    Ok(())
}
