//! IntersectionObserver wiring for one-shot reveals and the navigation
//! highlight.

use crate::dom;
use folio_core::{
    reachable_ratio, RevealTracker, SectionHighlighter, SectionHit, Visibility, ACTIVE_CLASS, REVEAL_CLASS,
    SECTION_THRESHOLD,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const REVEAL_ID_ATTR: &str = "data-reveal-id";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn new_observer(
    callback: &ObserverCallback,
    threshold: f64,
) -> anyhow::Result<web::IntersectionObserver> {
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))
}

fn entries(list: &js_sys::Array) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    list.iter()
        .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
}

/// Adds `show` to every `.reveal` element the first time it scrolls into
/// view, then stops observing it.
pub fn init_reveal(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(".reveal")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if nodes.length() == 0 {
        log::debug!("[reveal] no .reveal elements");
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    let threshold = tracker.borrow().threshold();
    let callback: ObserverCallback = {
        let tracker = tracker.clone();
        Closure::wrap(Box::new(move |list: js_sys::Array, observer: web::IntersectionObserver| {
            let mut batch = Vec::new();
            let mut targets = Vec::new();
            for entry in entries(&list) {
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| v.parse::<u32>().ok())
                else {
                    continue;
                };
                let (_, viewport_height) = dom::viewport_size();
                let element_height = target.get_bounding_client_rect().height();
                batch.push(Visibility {
                    id,
                    is_intersecting: entry.is_intersecting(),
                    ratio: reachable_ratio(
                        entry.intersection_ratio(),
                        element_height,
                        viewport_height,
                    ),
                });
                targets.push((id, target));
            }
            for id in tracker.borrow_mut().on_entries(&batch) {
                if let Some((_, el)) = targets.iter().find(|(t, _)| *t == id) {
                    _ = el.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(el);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
    };
    let observer = new_observer(&callback, threshold)?;
    callback.forget();

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        _ = el.set_attribute(REVEAL_ID_ATTR, &i.to_string());
        if tracker.borrow_mut().observe(i) {
            observer.observe(&el);
        }
    }
    log::info!("[reveal] watching {} elements", tracker.borrow().watching_count());
    Ok(())
}

/// Marks the `.nav-links a` entry of the topmost visible section active.
pub fn init_highlight(document: &web::Document) -> anyhow::Result<()> {
    let links = document
        .query_selector_all(".nav-links a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let links: Vec<web::Element> = (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();

    let highlighter = Rc::new(RefCell::new(SectionHighlighter::default()));
    let callback: ObserverCallback = {
        let highlighter = highlighter.clone();
        Closure::wrap(Box::new(move |list: js_sys::Array, _observer: web::IntersectionObserver| {
            let seen: Vec<(String, bool)> = entries(&list)
                .map(|e| (e.target().id(), e.is_intersecting()))
                .collect();
            let hits: Vec<SectionHit<'_>> = seen
                .iter()
                .map(|(id, is_intersecting)| SectionHit {
                    id: id.as_str(),
                    is_intersecting: *is_intersecting,
                })
                .collect();
            let mut highlighter = highlighter.borrow_mut();
            let Some(active) = highlighter.apply_batch(&hits) else {
                return;
            };
            let href = SectionHighlighter::href_for(active);
            for link in &links {
                _ = link.class_list().remove_1(ACTIVE_CLASS);
            }
            if let Some(link) = links
                .iter()
                .find(|l| l.get_attribute("href").as_deref() == Some(href.as_str()))
            {
                _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
    };
    let observer = new_observer(&callback, SECTION_THRESHOLD)?;
    callback.forget();

    let mut watched = 0;
    for id in highlighter.borrow().sections() {
        if let Some(section) = document.get_element_by_id(id) {
            observer.observe(&section);
            watched += 1;
        }
    }
    log::info!("[highlight] watching {} sections", watched);
    Ok(())
}
