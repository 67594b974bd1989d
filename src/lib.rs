//! Slide effects for the portfolio page: per-slide particle overlays, a
//! cursor flock, falling file icons and timed text effects, all started and
//! stopped as slides scroll in and out of view.
//!
//! The simulations in [`core`] are target-independent and tested on the
//! host. Everything that touches the DOM is compiled for `wasm32` only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slide-fx starting");

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Particle configuration for a slide element: the authored table entry,
/// adjusted by its `data-particles` overrides when those parse.
#[cfg(target_arch = "wasm32")]
fn particle_config_for(slide: &web_sys::HtmlElement) -> crate::core::ParticleConfig {
    let id = slide.id();
    let mut config = crate::core::slide_config(&id);
    if let Some(overrides) = slide.get_attribute(constants::PARTICLE_OVERRIDE_ATTR) {
        let mut overridden = config.clone();
        match overridden.apply_overrides(&overrides) {
            Ok(()) => config = overridden,
            Err(e) => log::warn!(
                "[slides] {}: ignoring {}: {}",
                id,
                constants::PARTICLE_OVERRIDE_ATTR,
                e
            ),
        }
    }
    config
}

#[cfg(target_arch = "wasm32")]
async fn init() -> anyhow::Result<()> {
    use std::cell::RefCell;
    use std::rc::Rc;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = page::PageHost::new(document.clone());
    let elements = host.slides().to_vec();
    if elements.is_empty() {
        log::warn!("no {} elements on the page", constants::SLIDE_SELECTOR);
        return Ok(());
    }

    let mut orchestrator = crate::core::Orchestrator::new(host);
    for slide in &elements {
        orchestrator.register(&slide.id(), particle_config_for(slide));
    }
    log::info!("registered {} slides", elements.len());

    // first slide is on screen before the observer reports anything
    orchestrator.set_visible(&elements[0].id(), true);

    let slides = Rc::new(RefCell::new(orchestrator));
    events::wire_slide_observer(slides.clone(), &elements)?;
    events::wire_pointer_tracking(&document, slides.clone());
    events::wire_debounced_resize(slides.clone());
    frame::start_loop(slides);
    Ok(())
}
