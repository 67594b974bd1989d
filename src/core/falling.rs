//! File icons raining onto the slide headline.
//!
//! Icons fall under per-icon gravity and bounce once, inelastically, off the
//! headline's bounding box (the text zone).

use crate::constants::*;
use crate::core::surface::{polygon, Rect, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Doc,
    Folder,
    Image,
}

// Documents dominate the mix.
const ICON_MIX: [IconKind; 6] = [
    IconKind::Doc,
    IconKind::Doc,
    IconKind::Doc,
    IconKind::Folder,
    IconKind::Image,
    IconKind::Doc,
];

#[derive(Clone, Debug)]
pub struct Icon {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub size: f32,
    pub kind: IconKind,
    pub opacity: f32,
    pub bounced: bool,
}

impl Icon {
    pub fn spawn<R: Rng + ?Sized>(width: f32, rng: &mut R) -> Self {
        Icon {
            pos: Vec2::new(rng.gen::<f32>() * width, ICON_SPAWN_Y),
            vel: Vec2::new((rng.gen::<f32>() - 0.5) * 2.0, 1.0 + rng.gen::<f32>() * 2.0),
            gravity: 0.2 + rng.gen::<f32>() * 0.15,
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: (rng.gen::<f32>() - 0.5) * 0.1,
            size: 8.0 + rng.gen::<f32>() * 10.0,
            kind: *ICON_MIX.choose(rng).unwrap_or(&IconKind::Doc),
            opacity: 0.5 + rng.gen::<f32>() * 0.4,
            bounced: false,
        }
    }
}

/// Headline box used when the container has no headline element.
pub fn fallback_text_zone(bounds: Vec2) -> Rect {
    Rect::new(
        bounds.x * 0.2,
        bounds.y * 0.25,
        bounds.x * 0.6,
        bounds.y * 0.5,
    )
}

/// Whether `pos` is inside the bounce region around `zone`: widened
/// horizontally and raised slightly so icons bounce off the top of the text.
#[inline]
pub fn in_bounce_region(zone: &Rect, pos: Vec2) -> bool {
    pos.x > zone.x - TEXT_ZONE_MARGIN_X
        && pos.x < zone.right() + TEXT_ZONE_MARGIN_X
        && pos.y > zone.y - TEXT_ZONE_MARGIN_TOP
        && pos.y < zone.bottom()
}

/// Integrate one step; bounce off `zone` the first time the icon enters it.
pub fn step_icon<R: Rng + ?Sized>(icon: &mut Icon, zone: &Rect, rng: &mut R) {
    icon.vel.y += icon.gravity;
    icon.pos += icon.vel;
    icon.rotation += icon.rotation_speed;

    if !icon.bounced && in_bounce_region(zone, icon.pos) {
        icon.vel.y = -icon.vel.y.abs() * (0.3 + rng.gen::<f32>() * 0.3);
        icon.vel.x += (rng.gen::<f32>() - 0.5) * 6.0;
        icon.rotation_speed *= 2.0;
        icon.bounced = true;
    }
}

fn draw_icon<S: Surface + ?Sized>(surface: &mut S, kind: IconKind, size: f32) {
    let h = size / 2.0;
    let q = size / 4.0;
    let t = size / 3.0;
    surface.set_stroke_style("rgba(255,255,255,0.8)");
    surface.set_fill_style("rgba(255,255,255,0.2)");
    surface.set_line_width(1.0);

    match kind {
        IconKind::Doc => {
            polygon(surface, &[(-h, -h), (q, -h), (h, -q), (h, h), (-h, h)]);
            surface.fill();
            surface.stroke();
            // folded corner
            surface.begin_path();
            surface.move_to(q, -h);
            surface.line_to(q, -q);
            surface.line_to(h, -q);
            surface.stroke();
        }
        IconKind::Folder => {
            polygon(
                surface,
                &[(-h, -t), (-q, -h), (q, -h), (q, -t), (h, -t), (h, h), (-h, h)],
            );
            surface.fill();
            surface.stroke();
        }
        IconKind::Image => {
            surface.stroke_rect(-h, -h, size, size);
            surface.fill_rect(-h, -h, size, size);
            surface.begin_path();
            surface.move_to(-t, q);
            surface.line_to(0.0, -q);
            surface.line_to(t, q);
            surface.stroke();
        }
    }
}

pub struct FallingIcons<S: Surface> {
    surface: S,
    rng: StdRng,
    icons: Vec<Icon>,
    zone: Rect,
    next_spawn_ms: Option<f64>,
    running: bool,
}

impl<S: Surface> FallingIcons<S> {
    pub fn new(surface: S) -> Self {
        Self::with_rng(surface, StdRng::from_entropy())
    }

    pub fn with_rng(surface: S, rng: StdRng) -> Self {
        let mut sim = Self {
            surface,
            rng,
            icons: Vec::new(),
            zone: Rect::default(),
            next_spawn_ms: None,
            running: false,
        };
        sim.resize();
        sim
    }

    /// Refit the overlay and recompute the text zone.
    pub fn resize(&mut self) {
        self.surface.fit_to_container();
        self.zone = self
            .surface
            .headline_rect()
            .unwrap_or_else(|| fallback_text_zone(self.surface.size()));
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.icons.clear();
        self.resize();
        // first spawn happens on the first frame
        self.next_spawn_ms = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_spawn_ms = None;
        self.icons.clear();
        self.surface.clear();
    }

    /// Add one icon at the top edge unless the live cap is reached.
    pub fn spawn(&mut self) -> bool {
        if self.icons.len() >= ICON_MAX_LIVE {
            return false;
        }
        let width = self.surface.size().x;
        self.icons.push(Icon::spawn(width, &mut self.rng));
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    #[inline]
    pub fn text_zone(&self) -> Rect {
        self.zone
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Advance every icon once and drop the ones that fell off the bottom.
    pub fn step(&mut self) {
        let floor = self.surface.size().y + ICON_EXIT_MARGIN;
        let zone = self.zone;
        let rng = &mut self.rng;
        self.icons.retain_mut(|icon| {
            step_icon(icon, &zone, rng);
            icon.pos.y < floor
        });
    }

    /// One animation frame at host time `now_ms`: spawn on the fixed cadence,
    /// then clear, step and draw.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.running {
            return;
        }
        // fixed cadence: every deadline passed since the last frame spawns
        let mut next = self.next_spawn_ms.unwrap_or(now_ms);
        if now_ms - next > ICON_SPAWN_INTERVAL_MS * ICON_MAX_CATCH_UP as f64 {
            next = now_ms;
        }
        while next <= now_ms {
            self.spawn();
            next += ICON_SPAWN_INTERVAL_MS;
        }
        self.next_spawn_ms = Some(next);

        self.surface.clear();
        self.step();
        for icon in &self.icons {
            self.surface.save();
            self.surface.translate(icon.pos.x, icon.pos.y);
            self.surface.rotate(icon.rotation);
            self.surface.set_global_alpha(icon.opacity);
            draw_icon(&mut self.surface, icon.kind, icon.size);
            self.surface.restore();
        }
    }
}
