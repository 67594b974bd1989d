use crate::core::Orchestrator;
use crate::page::PageHost;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward viewport pointer positions to the orchestrator; only running
/// flocks pick them up.
pub fn wire_pointer_tracking(
    document: &web::Document,
    slides: Rc<RefCell<Orchestrator<PageHost>>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        slides.borrow_mut().pointer_moved(client);
    }) as Box<dyn FnMut(_)>);
    _ = document
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
