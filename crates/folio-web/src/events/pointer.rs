use crate::dom;
use folio_core::{css_px, PointerState};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read-only view of the latest pointer position, shared with the particle
/// field.
#[derive(Clone)]
pub struct SharedPointer(Rc<Cell<PointerState>>);

impl SharedPointer {
    pub fn position(&self) -> Vec2 {
        self.0.get().position()
    }
}

/// Track the pointer over the window: store it, mirror it into
/// `--cursor-x`/`--cursor-y` and move `#cursor-glow`.
pub fn wire_pointer(window: &web::Window, document: &web::Document) -> SharedPointer {
    let (width, height) = dom::viewport_size();
    let state = Rc::new(Cell::new(PointerState::centered(width, height)));
    let glow = dom::html_element_by_id(document, "cursor-glow");
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if glow.is_none() {
        log::debug!("[pointer] no #cursor-glow");
    }

    {
        let state = state.clone();
        let glow = glow.clone();
        dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            state.set(state.get().moved_to(x, y));
            let (left, top) = (css_px(x), css_px(y));
            if let Some(root) = &root {
                _ = root.style().set_property("--cursor-x", &left);
                _ = root.style().set_property("--cursor-y", &top);
            }
            if let Some(glow) = &glow {
                dom::set_style(glow, "left", &left);
                dom::set_style(glow, "top", &top);
            }
        });
    }

    for (event, inside) in [("pointerleave", false), ("pointerenter", true)] {
        let state = state.clone();
        let glow = glow.clone();
        dom::add_listener(window, event, move |_: web::Event| {
            let next = PointerState {
                inside,
                ..state.get()
            };
            state.set(next);
            if let Some(glow) = &glow {
                dom::set_style(glow, "opacity", &next.glow_opacity().to_string());
            }
        });
    }

    SharedPointer(state)
}
