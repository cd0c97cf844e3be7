#![cfg(target_arch = "wasm32")]
use folio_core::{FieldParams, TiltParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod contact;
mod dom;
mod events;
mod field;
mod frame;
mod observe;
mod render;
mod scene;
mod typing;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Wire every page effect. Each one degrades on its own; a failure is
/// logged and the rest still start.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = typing::init(&document) {
        log::warn!("[typing] {:#}", e);
    }
    contact::init(&document);
    if let Err(e) = observe::init_reveal(&document) {
        log::warn!("[reveal] {:#}", e);
    }
    if let Err(e) = observe::init_highlight(&document) {
        log::warn!("[highlight] {:#}", e);
    }

    let pointer = events::wire_pointer(&window, &document);
    if let Err(e) = events::wire_card_tilt(&document, TiltParams::default()) {
        log::warn!("[tilt] {:#}", e);
    }
    if let Err(e) = field::init(&window, &document, pointer, FieldParams::default()) {
        log::warn!("[field] {:#}", e);
    }

    spawn_local(async move {
        if let Err(e) = scene::init(window, document).await {
            log::error!("[scene] {:#}", e);
        }
    });
    Ok(())
}
