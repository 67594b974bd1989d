use crate::constants::VISIBILITY_THRESHOLD;
use crate::core::Orchestrator;
use crate::page::PageHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every slide and feed intersection changes to the orchestrator.
pub fn wire_slide_observer(
    slides: Rc<RefCell<Orchestrator<PageHost>>>,
    elements: &[web::HtmlElement],
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let mut slides = slides.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let id = entry.target().id();
                slides.set_visible(&id, entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
