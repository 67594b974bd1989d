use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::core::Orchestrator;
use crate::page::PageHost;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Broadcast window resizes to every simulation, once the window has been
/// still for the debounce interval.
pub fn wire_debounced_resize(slides: Rc<RefCell<Orchestrator<PageHost>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let pending_fire = pending.clone();
    let fire = Closure::wrap(Box::new(move || {
        pending_fire.set(None);
        slides.borrow_mut().resize();
        log::debug!("[resize] overlays refit");
    }) as Box<dyn FnMut()>);

    let window_listener = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(handle) = pending.take() {
            window_listener.clear_timeout_with_handle(handle);
        }
        match window_listener.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::error!("[resize] setTimeout failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}
