//! Boids that flock toward the pointer, drawn as upright arrow cursors.
//!
//! Neighbor search is a plain O(n²) scan: the flock is a couple of hundred
//! agents and only runs while its slide is on screen.

use crate::constants::*;
use crate::core::surface::{polygon, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Boid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// Rescale `vel` so its length does not exceed `max`.
#[inline]
pub fn clamp_speed(vel: Vec2, max: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max {
        vel / speed * max
    } else {
        vel
    }
}

/// Wrap a coordinate to the opposite edge once it is `margin` past either side.
#[inline]
fn wrap_with_margin(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// Flocking acceleration for `boids[i]` against every other boid, plus the
/// pointer pull when a pointer is tracked.
pub fn steering(boids: &[Boid], i: usize, pointer: Option<Vec2>) -> Vec2 {
    let b = boids[i];
    let mut separation = Vec2::ZERO;
    let mut sep_count = 0u32;
    let mut vel_sum = Vec2::ZERO;
    let mut pos_sum = Vec2::ZERO;
    let mut neighbors = 0u32;

    for (j, o) in boids.iter().enumerate() {
        if i == j {
            continue;
        }
        let d = o.pos - b.pos;
        let dist = d.length();
        if dist < FLOCK_PERCEPTION {
            vel_sum += o.vel;
            pos_sum += o.pos;
            neighbors += 1;
            if dist < FLOCK_SEPARATION_RADIUS && dist > 0.0 {
                separation -= d / dist;
                sep_count += 1;
            }
        }
    }

    let mut acc = Vec2::ZERO;
    if neighbors > 0 {
        let n = neighbors as f32;
        acc += (vel_sum / n - b.vel) * FLOCK_ALIGNMENT_WEIGHT;
        acc += (pos_sum / n - b.pos) * FLOCK_COHESION_WEIGHT;
    }
    if sep_count > 0 {
        acc += separation / sep_count as f32 * FLOCK_SEPARATION_WEIGHT;
    }
    if let Some(p) = pointer {
        let d = p - b.pos;
        let dist = d.length();
        if dist > 0.0 && dist < FLOCK_POINTER_RADIUS {
            acc += d / dist * FLOCK_POINTER_WEIGHT;
        }
    }
    acc
}

fn draw_boid<S: Surface + ?Sized>(surface: &mut S, b: &Boid) {
    let s = b.size;
    surface.save();
    surface.translate(b.pos.x, b.pos.y);
    polygon(
        surface,
        &[
            (0.0, 0.0),
            (0.0, s * 1.4),
            (s * 0.3, s * 1.05),
            (s * 0.55, s * 1.55),
            (s * 0.75, s * 1.4),
            (s * 0.45, s * 0.9),
            (s * 0.95, s * 0.9),
        ],
    );
    surface.set_fill_style("rgba(255,255,255,0.85)");
    surface.fill();
    surface.set_stroke_style("rgba(10,10,10,0.7)");
    surface.set_line_width(1.2);
    surface.set_line_join("round");
    surface.stroke();
    surface.restore();
}

pub struct Flock<S: Surface> {
    surface: S,
    rng: StdRng,
    boids: Vec<Boid>,
    pointer: Option<Vec2>,
    running: bool,
}

impl<S: Surface> Flock<S> {
    pub fn new(surface: S) -> Self {
        Self::with_rng(surface, StdRng::from_entropy())
    }

    pub fn with_rng(mut surface: S, rng: StdRng) -> Self {
        surface.fit_to_container();
        Self {
            surface,
            rng,
            boids: Vec::new(),
            pointer: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.surface.fit_to_container();
        let bounds = self.surface.size();
        let rng = &mut self.rng;
        self.boids = (0..FLOCK_SIZE)
            .map(|_| Boid {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                vel: Vec2::new((rng.gen::<f32>() - 0.5) * 8.0, (rng.gen::<f32>() - 0.5) * 8.0),
                size: 10.0 + rng.gen::<f32>() * 8.0,
            })
            .collect();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.boids.clear();
        self.pointer = None;
        self.surface.clear();
    }

    pub fn resize(&mut self) {
        self.surface.fit_to_container();
    }

    /// Track the pointer, given in viewport coordinates. Ignored while stopped.
    pub fn pointer_moved(&mut self, client: Vec2) {
        if self.running {
            self.pointer = Some(self.surface.to_local(client));
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Advance every boid once. Boids update in place, so later boids see
    /// the already-moved earlier ones.
    pub fn step(&mut self) {
        let bounds = self.surface.size();
        for i in 0..self.boids.len() {
            let acc = steering(&self.boids, i, self.pointer);
            let b = &mut self.boids[i];
            b.vel = clamp_speed(b.vel + acc, FLOCK_MAX_SPEED);
            b.pos += b.vel;
            b.pos.x = wrap_with_margin(b.pos.x, bounds.x, FLOCK_WRAP_MARGIN);
            b.pos.y = wrap_with_margin(b.pos.y, bounds.y, FLOCK_WRAP_MARGIN);
        }
    }

    pub fn frame(&mut self) {
        if !self.running {
            return;
        }
        self.surface.clear();
        self.step();
        for b in &self.boids {
            draw_boid(&mut self.surface, b);
        }
    }
}
