use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `requestAnimationFrame` loop that can be stopped and restarted.
///
/// At most one frame is ever pending: `start` does nothing while a frame is
/// scheduled and `stop` cancels the pending one. The frame callback receives
/// the RAF timestamp in milliseconds.
pub struct AnimationLoop {
    name: &'static str,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl AnimationLoop {
    pub fn new(name: &'static str, mut on_frame: impl FnMut(f64) + 'static) -> Rc<Self> {
        let this = Rc::new(Self {
            name,
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&this);
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            let Some(this) = weak.upgrade() else {
                return;
            };
            this.pending.set(None);
            on_frame(time);
            this.request();
        }) as Box<dyn FnMut(f64)>));
        this
    }

    pub fn start(&self) {
        if self.pending.get().is_none() {
            self.request();
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("[{}] requestAnimationFrame failed: {:?}", self.name, e),
        }
    }

    /// Stop while the document is hidden and resume when it is shown again.
    /// The listener keeps the loop alive for the page lifetime.
    pub fn pause_when_hidden(self: &Rc<Self>, document: &web::Document) {
        let this = self.clone();
        let doc = document.clone();
        dom::add_listener(document, "visibilitychange", move |_: web::Event| {
            if doc.hidden() {
                log::debug!("[{}] hidden, pausing", this.name);
                this.stop();
            } else {
                this.start();
            }
        });
    }
}
