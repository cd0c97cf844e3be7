use crate::dom;
use folio_core::{PhraseCycler, TITLE_PHRASES};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(target) = document.get_element_by_id("typing-target") else {
        log::debug!("[typing] no #typing-target, skipping");
        return Ok(());
    };
    let cycler = Rc::new(RefCell::new(PhraseCycler::new(TITLE_PHRASES)?));
    run(cycler, target);
    Ok(())
}

fn run(cycler: Rc<RefCell<PhraseCycler>>, target: web::Element) {
    let step = cycler.borrow_mut().step();
    target.set_text_content(Some(&step.text));
    dom::set_timeout(move || run(cycler, target), step.delay_ms as i32);
}
