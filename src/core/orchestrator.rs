//! Slide visibility orchestration.
//!
//! The orchestrator is the only thing that starts or stops simulations. Every
//! registered slide owns a particle system; the designated slides also get a
//! companion simulation (falling icons or the cursor flock) built lazily the
//! first time they become visible and reused afterwards.
//!
//! Page-side effects (CSS classes, navigation dots, text effects) go through
//! [`SlideHost`], which also hands out the drawing surfaces.

use crate::constants::{FALLING_ICONS_SLIDE, FLOCK_SLIDE};
use crate::core::config::ParticleConfig;
use crate::core::falling::FallingIcons;
use crate::core::flock::Flock;
use crate::core::particles::ParticleSystem;
use crate::core::surface::Surface;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;

/// Which overlay a surface is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Particles,
    Companion,
}

pub trait SlideHost {
    type Surface: Surface;

    /// Create an overlay inside the slide's container. `None` when the slide
    /// has no usable container; the slide then runs without that layer.
    fn create_surface(&mut self, slide_id: &str, layer: Layer) -> Option<Self::Surface>;

    /// The slide became the visible one.
    fn entered(&mut self, _slide_id: &str) {}

    /// The slide left the viewport.
    fn left(&mut self, _slide_id: &str) {}

    /// Per-frame hook for host-side effects.
    fn frame(&mut self, _now_ms: f64) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompanionKind {
    FallingIcons,
    Flock,
}

/// Companion simulation designated for `slide_id`, if any.
pub fn companion_for(slide_id: &str) -> Option<CompanionKind> {
    match slide_id {
        FALLING_ICONS_SLIDE => Some(CompanionKind::FallingIcons),
        FLOCK_SLIDE => Some(CompanionKind::Flock),
        _ => None,
    }
}

pub enum Companion<S: Surface> {
    FallingIcons(FallingIcons<S>),
    Flock(Flock<S>),
}

impl<S: Surface> Companion<S> {
    fn build(kind: CompanionKind, surface: S, rng: StdRng) -> Self {
        match kind {
            CompanionKind::FallingIcons => {
                Companion::FallingIcons(FallingIcons::with_rng(surface, rng))
            }
            CompanionKind::Flock => Companion::Flock(Flock::with_rng(surface, rng)),
        }
    }

    pub fn kind(&self) -> CompanionKind {
        match self {
            Companion::FallingIcons(_) => CompanionKind::FallingIcons,
            Companion::Flock(_) => CompanionKind::Flock,
        }
    }

    pub fn start(&mut self) {
        match self {
            Companion::FallingIcons(sim) => sim.start(),
            Companion::Flock(sim) => sim.start(),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Companion::FallingIcons(sim) => sim.stop(),
            Companion::Flock(sim) => sim.stop(),
        }
    }

    pub fn resize(&mut self) {
        match self {
            Companion::FallingIcons(sim) => sim.resize(),
            Companion::Flock(sim) => sim.resize(),
        }
    }

    pub fn is_running(&self) -> bool {
        match self {
            Companion::FallingIcons(sim) => sim.is_running(),
            Companion::Flock(sim) => sim.is_running(),
        }
    }

    fn frame(&mut self, now_ms: f64) {
        match self {
            Companion::FallingIcons(sim) => sim.frame(now_ms),
            Companion::Flock(sim) => sim.frame(),
        }
    }
}

struct Slide<S: Surface> {
    config: ParticleConfig,
    particles: Option<ParticleSystem<S>>,
    visible: bool,
}

pub struct Orchestrator<H: SlideHost> {
    host: H,
    rng: StdRng,
    order: Vec<String>,
    slides: FnvHashMap<String, Slide<H::Surface>>,
    companions: FnvHashMap<String, Companion<H::Surface>>,
}

impl<H: SlideHost> Orchestrator<H> {
    pub fn new(host: H) -> Self {
        Self::with_rng(host, StdRng::from_entropy())
    }

    /// Each simulation gets its own generator seeded from `rng`.
    pub fn with_rng(host: H, rng: StdRng) -> Self {
        Self {
            host,
            rng,
            order: Vec::new(),
            slides: FnvHashMap::default(),
            companions: FnvHashMap::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn child_rng(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.rng.gen())
    }

    /// Register a slide and build its particle overlay. Returns `false` if
    /// the slide was already registered.
    pub fn register(&mut self, slide_id: &str, config: ParticleConfig) -> bool {
        if self.slides.contains_key(slide_id) {
            return false;
        }
        let particles = match self.host.create_surface(slide_id, Layer::Particles) {
            Some(surface) => Some(ParticleSystem::with_rng(surface, self.child_rng())),
            None => {
                log::warn!("[slides] {} has no particle overlay", slide_id);
                None
            }
        };
        self.order.push(slide_id.to_string());
        self.slides.insert(
            slide_id.to_string(),
            Slide {
                config,
                particles,
                visible: false,
            },
        );
        true
    }

    /// Registered slide ids in registration order.
    pub fn slide_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn is_visible(&self, slide_id: &str) -> bool {
        self.slides.get(slide_id).is_some_and(|s| s.visible)
    }

    pub fn visible_slides(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|id| self.is_visible(id))
            .map(String::as_str)
    }

    pub fn particles(&self, slide_id: &str) -> Option<&ParticleSystem<H::Surface>> {
        self.slides.get(slide_id)?.particles.as_ref()
    }

    pub fn companion(&self, slide_id: &str) -> Option<&Companion<H::Surface>> {
        self.companions.get(slide_id)
    }

    /// Apply a visibility change for one slide. Becoming visible first stops
    /// any other visible slide so exactly one effect set runs at a time.
    pub fn set_visible(&mut self, slide_id: &str, visible: bool) {
        let Some(slide) = self.slides.get(slide_id) else {
            log::debug!("[slides] visibility for unregistered {}", slide_id);
            return;
        };
        if slide.visible == visible {
            return;
        }
        if visible {
            let others: Vec<String> = self
                .visible_slides()
                .filter(|id| *id != slide_id)
                .map(str::to_string)
                .collect();
            for other in others {
                self.leave(&other);
            }
            self.enter(slide_id);
        } else {
            self.leave(slide_id);
        }
    }

    fn enter(&mut self, slide_id: &str) {
        log::debug!("[slides] enter {}", slide_id);
        self.host.entered(slide_id);
        if let Some(slide) = self.slides.get_mut(slide_id) {
            slide.visible = true;
            if let Some(ps) = slide.particles.as_mut() {
                ps.start(slide.config.clone());
            }
        }
        if let Some(kind) = companion_for(slide_id) {
            if !self.companions.contains_key(slide_id) {
                match self.host.create_surface(slide_id, Layer::Companion) {
                    Some(surface) => {
                        log::debug!("[slides] building {:?} for {}", kind, slide_id);
                        let rng = self.child_rng();
                        self.companions
                            .insert(slide_id.to_string(), Companion::build(kind, surface, rng));
                    }
                    None => log::warn!("[slides] {} has no {:?} overlay", slide_id, kind),
                }
            }
            if let Some(companion) = self.companions.get_mut(slide_id) {
                companion.start();
            }
        }
    }

    fn leave(&mut self, slide_id: &str) {
        log::debug!("[slides] leave {}", slide_id);
        if let Some(slide) = self.slides.get_mut(slide_id) {
            slide.visible = false;
            if let Some(ps) = slide.particles.as_mut() {
                ps.stop();
            }
        }
        if let Some(companion) = self.companions.get_mut(slide_id) {
            companion.stop();
        }
        self.host.left(slide_id);
    }

    /// Recompute overlay geometry for every simulation.
    pub fn resize(&mut self) {
        for slide in self.slides.values_mut() {
            if let Some(ps) = slide.particles.as_mut() {
                ps.resize();
            }
        }
        for companion in self.companions.values_mut() {
            companion.resize();
        }
    }

    /// Forward a viewport pointer position to running flocks.
    pub fn pointer_moved(&mut self, client: Vec2) {
        for companion in self.companions.values_mut() {
            if let Companion::Flock(flock) = companion {
                flock.pointer_moved(client);
            }
        }
    }

    /// One animation frame for every simulation; stopped ones return early.
    pub fn frame(&mut self, now_ms: f64) {
        for slide in self.slides.values_mut() {
            if let Some(ps) = slide.particles.as_mut() {
                ps.frame();
            }
        }
        for companion in self.companions.values_mut() {
            companion.frame(now_ms);
        }
        self.host.frame(now_ms);
    }
}
