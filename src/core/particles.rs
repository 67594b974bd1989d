//! Per-slide particle engine.
//!
//! A [`ParticleSystem`] owns one overlay surface and a population of
//! particles created from a [`ParticleConfig`]. Each physics mode carries its
//! own state in [`Motion`]; creation and update dispatch on it in one place.

use crate::constants::{COORD_LABEL_CHANCE, DRIFT_REENTRY_X, PARTICLE_RESPAWN_MARGIN};
use crate::core::config::{ParticleConfig, Physics, Shape};
use crate::core::surface::{rgba, wrap, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

const TRIANGLE_HALF_BASE: f32 = 0.866;

#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    Float,
    Gravity {
        acceleration: f32,
    },
    Rise,
    Drift {
        wave: f32,
        wave_speed: f32,
        wave_amp: f32,
    },
    Orbit {
        center: Vec2,
        radius: f32,
        angle: f32,
        angle_speed: f32,
    },
    Pulse {
        base_opacity: f32,
        phase: f32,
        speed: f32,
    },
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub rgb: [u8; 3],
    pub rotation: f32,
    pub rotation_speed: f32,
    pub motion: Motion,
    pub show_coords: bool,
}

impl Particle {
    /// Randomize a particle for `cfg` on a `bounds`-sized canvas.
    pub fn spawn<R: Rng + ?Sized>(cfg: &ParticleConfig, bounds: Vec2, rng: &mut R) -> Self {
        let (w, h) = (bounds.x, bounds.y);
        let size_span = (cfg.size_max - cfg.size_min).max(0.0);
        let mut p = Particle {
            pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * cfg.speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * cfg.speed,
            ),
            size: rng.gen::<f32>() * size_span + cfg.size_min,
            opacity: rng.gen::<f32>() * 0.5 + 0.3,
            rgb: cfg.color.rgb(),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: (rng.gen::<f32>() - 0.5) * 0.02,
            motion: Motion::Float,
            show_coords: cfg.show_coords && rng.gen::<f32>() < COORD_LABEL_CHANCE,
        };

        p.motion = match cfg.physics {
            Physics::Float => Motion::Float,
            Physics::Gravity => {
                p.pos.y = -10.0 - rng.gen::<f32>() * 100.0;
                p.vel.y = rng.gen::<f32>() * 2.0 + 1.0;
                p.vel.x = (rng.gen::<f32>() - 0.5) * 0.5;
                Motion::Gravity {
                    acceleration: 0.02 + rng.gen::<f32>() * 0.03,
                }
            }
            Physics::Rise => {
                p.pos.y = h + 10.0 + rng.gen::<f32>() * 100.0;
                p.vel.y = -(rng.gen::<f32>() * 1.5 + 0.5);
                p.vel.x = (rng.gen::<f32>() - 0.5) * 0.3;
                Motion::Rise
            }
            Physics::Drift => {
                p.vel.x = (rng.gen::<f32>() * 0.5 + 0.2) * cfg.speed;
                p.vel.y = (rng.gen::<f32>() - 0.5) * 0.2;
                Motion::Drift {
                    wave: rng.gen::<f32>() * TAU,
                    wave_speed: rng.gen::<f32>() * 0.02 + 0.01,
                    wave_amp: rng.gen::<f32>() * 30.0 + 10.0,
                }
            }
            Physics::Orbit => {
                let radius = rng.gen::<f32>() * 200.0 + 100.0;
                let angle = rng.gen::<f32>() * TAU;
                let mut angle_speed = rng.gen::<f32>() * 0.01 + 0.005;
                if rng.gen::<f32>() <= 0.5 {
                    angle_speed = -angle_speed;
                }
                Motion::Orbit {
                    center: bounds * 0.5,
                    radius,
                    angle,
                    angle_speed,
                }
            }
            Physics::Pulse => Motion::Pulse {
                base_opacity: p.opacity,
                phase: rng.gen::<f32>() * TAU,
                speed: rng.gen::<f32>() * 0.05 + 0.02,
            },
        };
        p
    }
}

/// Outcome of one physics step for a single particle.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Keep,
    Respawn,
}

fn step_particle<R: Rng + ?Sized>(p: &mut Particle, bounds: Vec2, rng: &mut R) -> Step {
    let (w, h) = (bounds.x, bounds.y);
    let step = match &mut p.motion {
        Motion::Float => {
            p.pos += p.vel;
            p.pos = Vec2::new(wrap(p.pos.x, w), wrap(p.pos.y, h));
            Step::Keep
        }
        Motion::Gravity { acceleration } => {
            p.vel.y += *acceleration;
            p.pos += p.vel;
            if p.pos.y > h + PARTICLE_RESPAWN_MARGIN {
                Step::Respawn
            } else {
                Step::Keep
            }
        }
        Motion::Rise => {
            p.pos += p.vel;
            if p.pos.y < -PARTICLE_RESPAWN_MARGIN {
                Step::Respawn
            } else {
                Step::Keep
            }
        }
        Motion::Drift {
            wave, wave_speed, ..
        } => {
            *wave += *wave_speed;
            p.pos.x += p.vel.x;
            p.pos.y += wave.sin() * 0.5;
            if p.pos.x > w + PARTICLE_RESPAWN_MARGIN {
                p.pos.x = DRIFT_REENTRY_X;
                p.pos.y = rng.gen::<f32>() * h;
            }
            Step::Keep
        }
        Motion::Orbit {
            center,
            radius,
            angle,
            angle_speed,
        } => {
            *angle += *angle_speed;
            p.pos = *center + Vec2::new(angle.cos(), angle.sin()) * *radius;
            Step::Keep
        }
        Motion::Pulse {
            base_opacity,
            phase,
            speed,
        } => {
            *phase += *speed;
            p.opacity = *base_opacity + phase.sin() * 0.2;
            p.pos += p.vel * 0.3;
            p.pos = Vec2::new(wrap(p.pos.x, w), wrap(p.pos.y, h));
            Step::Keep
        }
    };
    p.rotation += p.rotation_speed;
    step
}

fn draw_particle<S: Surface + ?Sized>(surface: &mut S, p: &Particle, shape: Shape) {
    let color = rgba(p.rgb, p.opacity);
    let s = p.size;

    surface.save();
    surface.translate(p.pos.x, p.pos.y);
    surface.rotate(p.rotation);

    if shape.is_outline() {
        surface.set_stroke_style(&color);
        surface.set_line_width(1.0);
    } else {
        surface.set_fill_style(&color);
    }

    match shape {
        Shape::Square => surface.fill_rect(-s / 2.0, -s / 2.0, s, s),
        Shape::SquareOutline => surface.stroke_rect(-s / 2.0, -s / 2.0, s, s),
        Shape::Triangle | Shape::TriangleOutline => {
            surface.begin_path();
            surface.move_to(0.0, -s);
            surface.line_to(s * TRIANGLE_HALF_BASE, s * 0.5);
            surface.line_to(-s * TRIANGLE_HALF_BASE, s * 0.5);
            surface.close_path();
            if shape.is_outline() {
                surface.stroke();
            } else {
                surface.fill();
            }
        }
        Shape::Circle | Shape::CircleOutline => {
            surface.begin_path();
            surface.arc(0.0, 0.0, s);
            if shape.is_outline() {
                surface.stroke();
            } else {
                surface.fill();
            }
        }
    }

    if p.show_coords {
        // labels stay upright
        surface.rotate(-p.rotation);
        surface.set_font("8px monospace");
        surface.set_fill_style(&rgba(p.rgb, 0.6));
        let label = format!("{},{}", p.pos.x.round() as i32, p.pos.y.round() as i32);
        surface.fill_text(&label, s + 3.0, 3.0);
    }

    surface.restore();
}

pub struct ParticleSystem<S: Surface> {
    surface: S,
    rng: StdRng,
    config: ParticleConfig,
    particles: Vec<Particle>,
    running: bool,
}

impl<S: Surface> ParticleSystem<S> {
    pub fn new(surface: S) -> Self {
        Self::with_rng(surface, StdRng::from_entropy())
    }

    pub fn with_rng(mut surface: S, rng: StdRng) -> Self {
        surface.fit_to_container();
        Self {
            surface,
            rng,
            config: ParticleConfig::default(),
            particles: Vec::new(),
            running: false,
        }
    }

    pub fn start(&mut self, config: ParticleConfig) {
        if self.running {
            return;
        }
        self.running = true;
        self.config = config;
        let bounds = self.surface.size();
        self.particles = (0..self.config.count)
            .map(|_| Particle::spawn(&self.config, bounds, &mut self.rng))
            .collect();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.particles.clear();
        self.surface.clear();
    }

    pub fn resize(&mut self) {
        self.surface.fit_to_container();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Advance physics one step without drawing.
    pub fn step(&mut self) {
        let bounds = self.surface.size();
        for i in 0..self.particles.len() {
            if step_particle(&mut self.particles[i], bounds, &mut self.rng) == Step::Respawn {
                self.particles[i] = Particle::spawn(&self.config, bounds, &mut self.rng);
            }
        }
    }

    /// One animation frame: clear, step and draw. No-op once stopped.
    pub fn frame(&mut self) {
        if !self.running {
            return;
        }
        self.surface.clear();
        self.step();
        let shape = self.config.shape;
        for p in &self.particles {
            draw_particle(&mut self.surface, p, shape);
        }
    }
}
