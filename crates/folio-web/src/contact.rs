use crate::dom;
use folio_core::{
    CONTACT_EMAIL, COPY_LABEL_DONE, COPY_LABEL_FAILED, COPY_LABEL_IDLE, COPY_LABEL_REVERT_MS,
};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Copy-email button and footer year.
pub fn init(document: &web::Document) {
    if let Some(year) = document.get_element_by_id("year") {
        let now = js_sys::Date::new_0();
        year.set_text_content(Some(&now.get_full_year().to_string()));
    }

    let Some(button) = document.get_element_by_id("copy-email") else {
        log::debug!("[contact] no #copy-email, skipping");
        return;
    };
    dom::add_click_listener(document, "copy-email", move || {
        spawn_local(copy_email(button.clone()));
    });
}

async fn copy_email(button: web::Element) {
    match write_clipboard(CONTACT_EMAIL).await {
        Ok(()) => {
            button.set_text_content(Some(COPY_LABEL_DONE));
            dom::set_timeout(
                move || button.set_text_content(Some(COPY_LABEL_IDLE)),
                COPY_LABEL_REVERT_MS,
            );
        }
        Err(e) => {
            log::warn!("[contact] clipboard write failed: {:?}", e);
            button.set_text_content(Some(COPY_LABEL_FAILED));
        }
    }
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically since the
/// clipboard is missing on insecure origins.
async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}
