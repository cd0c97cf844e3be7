use crate::dom;
use folio_core::{tilt_for, PanelRect, TiltParams, TILT_SELECTOR};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 3D tilt on the hero and content panels while the pointer moves over them.
/// Disabled below the tilt breakpoint, checked on every move so resizing
/// takes effect immediately.
pub fn wire_card_tilt(document: &web::Document, params: TiltParams) -> anyhow::Result<usize> {
    let nodes = document
        .query_selector_all(TILT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let params = Rc::new(params);
    let disable_query: Rc<str> = params.disable_query().into();
    let mut wired = 0;

    for i in 0..nodes.length() {
        let Some(card) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };

        {
            let card_ref = card.clone();
            let params = params.clone();
            let disable_query = disable_query.clone();
            dom::add_listener(&card, "pointermove", move |ev: web::PointerEvent| {
                if dom::media_matches(&disable_query) {
                    return;
                }
                let r = card_ref.get_bounding_client_rect();
                let rect = PanelRect {
                    left: r.left(),
                    top: r.top(),
                    width: r.width(),
                    height: r.height(),
                };
                if let Some(tilt) = tilt_for(rect, ev.client_x() as f64, ev.client_y() as f64, &params)
                {
                    dom::set_style(&card_ref, "transform", &tilt.to_css(&params));
                }
            });
        }

        let card_ref = card.clone();
        dom::add_listener(&card, "pointerleave", move |_: web::Event| {
            dom::set_style(&card_ref, "transform", "");
        });
        wired += 1;
    }

    log::debug!("[tilt] {} panels", wired);
    Ok(wired)
}
