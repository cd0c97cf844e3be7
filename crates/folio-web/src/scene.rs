//! Scroll-driven avatar scene mounted in `#student-3d-layer`.

use crate::dom;
use crate::frame::AnimationLoop;
use crate::render::SceneRenderer;
use folio_core::{
    backing_scale, AvatarMotion, Camera, FxError, MotionParams, Rig, ScrollPath,
    REDUCED_MOTION_QUERY, SCENE_MIN_WIDTH_QUERY,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const MOUNT_ID: &str = "student-3d-layer";

struct Scene {
    canvas: web::HtmlCanvasElement,
    motion: AvatarMotion,
    camera: Camera,
    renderer: SceneRenderer,
    render_failed: bool,
}

impl Scene {
    fn frame(&mut self, time_ms: f64) {
        let pose = self.motion.tick(time_ms);
        match self.renderer.render(&self.camera, &pose) {
            Ok(()) => self.render_failed = false,
            Err(e) if !self.render_failed => {
                log::error!("[scene] render error: {:?}", e);
                self.render_failed = true;
            }
            Err(_) => {}
        }
    }

    fn sync_scroll(&mut self, window: &web::Window, document: &web::Document) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let scroll_height = document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let (_, viewport_height) = dom::viewport_size();
        self.motion.set_scroll(scroll_y, scroll_height, viewport_height);
    }
}

/// Backing size of the scene canvas for the current viewport.
fn canvas_pixels() -> (f64, f64, u32, u32) {
    let (width, height) = dom::viewport_size();
    let dpr = backing_scale(dom::device_pixel_ratio());
    let px = ((width * dpr).floor() as u32).max(1);
    let py = ((height * dpr).floor() as u32).max(1);
    (width, height, px, py)
}

/// Build and start the scene. A missing mount is an error; reduced motion,
/// small viewports and WebGPU failures hide the mount and return `Ok`.
pub async fn init(window: web::Window, document: web::Document) -> anyhow::Result<()> {
    let mount =
        dom::html_element_by_id(&document, MOUNT_ID).ok_or(FxError::MissingMount(MOUNT_ID))?;
    if dom::media_matches(REDUCED_MOTION_QUERY) || dom::media_matches(SCENE_MIN_WIDTH_QUERY) {
        dom::hide(&mount);
        log::info!("[scene] skipped (reduced motion or small viewport)");
        return Ok(());
    }

    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (width, height, px, py) = canvas_pixels();
    canvas.set_width(px);
    canvas.set_height(py);
    for (property, value) in [("width", "100%"), ("height", "100%"), ("display", "block")] {
        _ = canvas.style().set_property(property, value);
    }
    mount
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let started = Instant::now();
    let renderer = match SceneRenderer::new(canvas.clone(), Rig::student()).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("[scene] WebGPU init error: {:?}", e);
            dom::hide(&mount);
            return Ok(());
        }
    };
    log::info!("[scene] WebGPU ready in {:?}", started.elapsed());

    let scene = Rc::new(RefCell::new(Scene {
        canvas,
        motion: AvatarMotion::new(ScrollPath::default(), MotionParams::default()),
        camera: Camera::avatar_view(width, height),
        renderer,
        render_failed: false,
    }));
    scene.borrow_mut().sync_scroll(&window, &document);

    {
        let scene = scene.clone();
        let (win, doc) = (window.clone(), document.clone());
        dom::add_listener(&window, "scroll", move |_: web::Event| {
            scene.borrow_mut().sync_scroll(&win, &doc);
        });
    }
    {
        let scene = scene.clone();
        let (win, doc) = (window.clone(), document.clone());
        dom::add_listener(&window, "resize", move |_: web::Event| {
            let (width, height, px, py) = canvas_pixels();
            let mut scene = scene.borrow_mut();
            scene.canvas.set_width(px);
            scene.canvas.set_height(py);
            scene.camera.set_viewport(width, height);
            scene.renderer.resize(px, py);
            scene.sync_scroll(&win, &doc);
        });
    }

    let animation = AnimationLoop::new("scene", move |time_ms| {
        scene.borrow_mut().frame(time_ms);
    });
    animation.pause_when_hidden(&document);
    animation.start();
    Ok(())
}
