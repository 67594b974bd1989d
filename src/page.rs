use crate::constants::*;
use crate::core::text_fx::{runs_stat_counters, SlotNumber, StatCounter, TickText};
use crate::core::{Layer, SlideHost};
use crate::dom;
use crate::overlay::CanvasOverlay;
use fnv::FnvHashMap;
use rand::prelude::*;
use web_sys as web;

/// Text effects found inside one slide, collected on its first entry. Stat
/// counters are only collected on the stats slide.
#[derive(Default)]
struct SlideText {
    ticks: Vec<(web::Element, TickText)>,
    slots: Vec<(web::Element, SlotNumber)>,
    stats: Vec<(web::Element, StatCounter)>,
}

impl SlideText {
    fn collect(slide: &web::Element, with_stats: bool) -> Self {
        let ticks = dom::query_all::<web::Element>(slide, TICK_TEXT_SELECTOR)
            .into_iter()
            .map(|el| {
                let original = el
                    .get_attribute("data-text")
                    .or_else(|| el.text_content())
                    .unwrap_or_default();
                _ = el.set_attribute("data-text", &original);
                (el, TickText::new(original))
            })
            .collect();
        let slots = dom::query_all::<web::Element>(slide, SLOT_NUMBER_SELECTOR)
            .into_iter()
            .map(|el| (el, SlotNumber::default()))
            .collect();
        let stat_elements = if with_stats {
            dom::query_all::<web::Element>(slide, STAT_NUMBER_SELECTOR)
        } else {
            Vec::new()
        };
        let stats = stat_elements
            .into_iter()
            .map(|el| {
                let target = el
                    .get_attribute("data-target")
                    .and_then(|t| t.trim().parse::<f64>().ok())
                    .unwrap_or_else(|| {
                        log::warn!("[text] stat counter without a numeric data-target");
                        0.0
                    });
                (el, StatCounter::new(target))
            })
            .collect();
        Self {
            ticks,
            slots,
            stats,
        }
    }
}

/// Page side of the orchestrator: overlays, CSS classes, navigation dots and
/// the text effects of the visible slide.
pub struct PageHost {
    document: web::Document,
    slides: Vec<web::HtmlElement>,
    dots: Vec<web::Element>,
    rng: StdRng,
    text: FnvHashMap<String, SlideText>,
}

impl PageHost {
    pub fn new(document: web::Document) -> Self {
        let slides = dom::query_document(&document, SLIDE_SELECTOR);
        let dots = dom::query_document(&document, DOT_SELECTOR);
        Self {
            document,
            slides,
            dots,
            rng: StdRng::from_entropy(),
            text: FnvHashMap::default(),
        }
    }

    pub fn slides(&self) -> &[web::HtmlElement] {
        &self.slides
    }

    fn slide(&self, slide_id: &str) -> Option<(usize, &web::HtmlElement)> {
        self.slides.iter().enumerate().find(|(_, s)| s.id() == slide_id)
    }
}

impl SlideHost for PageHost {
    type Surface = CanvasOverlay;

    fn create_surface(&mut self, slide_id: &str, layer: Layer) -> Option<CanvasOverlay> {
        let (_, container) = self.slide(slide_id)?;
        match CanvasOverlay::attach(&self.document, container, layer) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::error!("[overlay] {} {:?}: {:?}", slide_id, layer, e);
                None
            }
        }
    }

    fn entered(&mut self, slide_id: &str) {
        let Some((index, slide)) = self.slide(slide_id) else {
            return;
        };
        let slide: web::Element = slide.clone().into();
        dom::set_class(&slide, VISIBLE_CLASS, true);
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_DOT_CLASS, i == index);
        }
        if let Some(body) = self.document.body() {
            let yellow = slide.class_list().contains(YELLOW_SLIDE_CLASS);
            dom::set_class(&body, ON_YELLOW_BODY_CLASS, yellow);
        }

        let rng = &mut self.rng;
        let text = self
            .text
            .entry(slide_id.to_string())
            .or_insert_with(|| SlideText::collect(&slide, runs_stat_counters(slide_id)));
        for (_, tick) in &mut text.ticks {
            tick.start();
        }
        for (_, slot) in &mut text.slots {
            slot.start(rng);
        }
        for (_, stat) in &mut text.stats {
            stat.start();
        }
    }

    fn left(&mut self, slide_id: &str) {
        if let Some((_, slide)) = self.slide(slide_id) {
            dom::set_class(slide, VISIBLE_CLASS, false);
        }
        let Some(text) = self.text.get_mut(slide_id) else {
            return;
        };
        for (el, tick) in &mut text.ticks {
            el.set_text_content(Some(tick.stop()));
        }
        for (_, slot) in &mut text.slots {
            slot.stop();
        }
        for (el, stat) in &mut text.stats {
            el.set_text_content(Some(stat.stop()));
        }
    }

    fn frame(&mut self, now_ms: f64) {
        let rng = &mut self.rng;
        for text in self.text.values_mut() {
            for (el, tick) in &mut text.ticks {
                if let Some(s) = tick.frame(now_ms, rng) {
                    el.set_text_content(Some(&s));
                }
            }
            for (el, slot) in &mut text.slots {
                if let Some(s) = slot.frame(now_ms, rng) {
                    el.set_text_content(Some(&s));
                }
            }
            for (el, stat) in &mut text.stats {
                if let Some(s) = stat.frame(now_ms) {
                    el.set_text_content(Some(&s));
                }
            }
        }
    }
}
