//! Particle configuration and the per-slide configuration table.

use crate::constants::PARTICLE_MAX_COUNT;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("unknown physics mode `{0}`")]
    UnknownPhysics(String),
    #[error("unknown color `{0}`")]
    UnknownColor(String),
    #[error("unknown override key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("expected `key=value`, got `{0}`")]
    MalformedPair(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
    CircleOutline,
    SquareOutline,
    TriangleOutline,
}

impl Shape {
    /// Outline shapes are stroked, the rest are filled.
    pub fn is_outline(self) -> bool {
        matches!(
            self,
            Shape::CircleOutline | Shape::SquareOutline | Shape::TriangleOutline
        )
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Shape::Circle),
            "square" => Ok(Shape::Square),
            "triangle" => Ok(Shape::Triangle),
            "circleOutline" => Ok(Shape::CircleOutline),
            "squareOutline" => Ok(Shape::SquareOutline),
            "triangleOutline" => Ok(Shape::TriangleOutline),
            other => Err(ConfigError::UnknownShape(other.to_string())),
        }
    }
}

/// Physics mode tag as written in configuration. The per-particle state for
/// each mode lives in [`crate::core::particles::Motion`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Physics {
    #[default]
    Float,
    Gravity,
    Rise,
    Drift,
    Orbit,
    Pulse,
}

impl FromStr for Physics {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(Physics::Float),
            "gravity" => Ok(Physics::Gravity),
            "rise" => Ok(Physics::Rise),
            "drift" => Ok(Physics::Drift),
            "orbit" => Ok(Physics::Orbit),
            "pulse" => Ok(Physics::Pulse),
            other => Err(ConfigError::UnknownPhysics(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticleColor {
    #[default]
    White,
    Black,
    Yellow,
}

impl ParticleColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ParticleColor::White => [255, 255, 255],
            ParticleColor::Black => [10, 10, 10],
            ParticleColor::Yellow => [255, 214, 0],
        }
    }
}

impl FromStr for ParticleColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(ParticleColor::White),
            "black" => Ok(ParticleColor::Black),
            "yellow" => Ok(ParticleColor::Yellow),
            other => Err(ConfigError::UnknownColor(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub shape: Shape,
    pub physics: Physics,
    pub color: ParticleColor,
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub speed: f32,
    pub show_coords: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Circle,
            physics: Physics::Float,
            color: ParticleColor::White,
            count: 30,
            size_min: 2.0,
            size_max: 6.0,
            speed: 1.0,
            show_coords: false,
        }
    }
}

impl ParticleConfig {
    const fn entry(
        shape: Shape,
        physics: Physics,
        color: ParticleColor,
        count: usize,
        size_min: f32,
        size_max: f32,
    ) -> Self {
        Self {
            shape,
            physics,
            color,
            count,
            size_min,
            size_max,
            speed: 1.0,
            show_coords: false,
        }
    }

    const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    const fn with_coords(mut self) -> Self {
        self.show_coords = true;
        self
    }

    /// Apply whitespace-separated `key=value` overrides, e.g.
    /// `shape=square physics=drift count=12`.
    pub fn apply_overrides(&mut self, pairs: &str) -> Result<(), ConfigError> {
        for pair in pairs.split_whitespace() {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedPair(pair.to_string()))?;
            let invalid = || ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };
            match key {
                "shape" => self.shape = value.parse()?,
                "physics" => self.physics = value.parse()?,
                "color" => self.color = value.parse()?,
                "count" => {
                    self.count = value
                        .parse::<usize>()
                        .ok()
                        .filter(|c| *c <= PARTICLE_MAX_COUNT)
                        .ok_or_else(invalid)?
                }
                "sizeMin" => self.size_min = parse_positive(value).ok_or_else(invalid)?,
                "sizeMax" => self.size_max = parse_positive(value).ok_or_else(invalid)?,
                "speed" => self.speed = parse_positive(value).ok_or_else(invalid)?,
                "showCoords" => self.show_coords = value.parse().map_err(|_| invalid())?,
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        if self.size_max < self.size_min {
            std::mem::swap(&mut self.size_min, &mut self.size_max);
        }
        Ok(())
    }
}

fn parse_positive(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

use ParticleColor::{Black, White, Yellow};
use Physics::{Drift, Float, Gravity, Orbit, Pulse, Rise};
use Shape::{Circle, CircleOutline, Square, SquareOutline, Triangle, TriangleOutline};

static SLIDE_CONFIGS: [(&str, ParticleConfig); 26] = [
    ("slide-0", ParticleConfig::entry(Circle, Float, White, 25, 1.0, 3.0)),
    ("slide-1", ParticleConfig::entry(Square, Gravity, White, 40, 1.0, 3.0)),
    ("slide-2", ParticleConfig::entry(Triangle, Gravity, White, 50, 1.0, 3.0).with_speed(0.8)),
    ("slide-3", ParticleConfig::entry(CircleOutline, Rise, White, 35, 2.0, 6.0)),
    ("slide-stats", ParticleConfig::entry(Circle, Rise, Yellow, 20, 1.5, 4.0)),
    ("slide-4", ParticleConfig::entry(SquareOutline, Drift, White, 30, 1.0, 3.0).with_coords()),
    ("slide-5", ParticleConfig::entry(Square, Float, White, 25, 1.0, 3.0)),
    ("slide-6", ParticleConfig::entry(TriangleOutline, Pulse, Yellow, 20, 3.0, 7.0)),
    ("slide-7", ParticleConfig::entry(Circle, Drift, White, 30, 1.0, 3.0)),
    ("slide-8", ParticleConfig::entry(SquareOutline, Float, White, 25, 1.0, 3.0)),
    ("slide-9", ParticleConfig::entry(Triangle, Orbit, White, 20, 2.0, 5.0)),
    ("slide-10", ParticleConfig::entry(SquareOutline, Drift, Yellow, 20, 2.0, 5.0)),
    ("slide-11", ParticleConfig::entry(SquareOutline, Float, White, 15, 1.0, 3.0)),
    ("slide-12", ParticleConfig::entry(Triangle, Float, White, 20, 1.0, 3.0)),
    ("slide-13", ParticleConfig::entry(Square, Drift, Yellow, 25, 1.0, 2.0)),
    ("slide-14", ParticleConfig::entry(SquareOutline, Drift, Yellow, 20, 1.0, 3.0)),
    ("slide-15", ParticleConfig::entry(CircleOutline, Rise, White, 30, 2.0, 5.0)),
    ("slide-16", ParticleConfig::entry(SquareOutline, Drift, Yellow, 20, 1.0, 3.0)),
    ("slide-17", ParticleConfig::entry(Circle, Pulse, White, 15, 1.0, 3.0)),
    ("slide-18", ParticleConfig::entry(Circle, Float, White, 20, 1.0, 3.0)),
    ("slide-19", ParticleConfig::entry(TriangleOutline, Pulse, Yellow, 15, 2.0, 5.0)),
    ("slide-20", ParticleConfig::entry(TriangleOutline, Orbit, Yellow, 20, 2.0, 5.0)),
    ("slide-21", ParticleConfig::entry(Circle, Rise, White, 25, 1.5, 4.0)),
    ("slide-22", ParticleConfig::entry(SquareOutline, Float, White, 20, 1.0, 3.0)),
    ("slide-23", ParticleConfig::entry(Circle, Drift, White, 20, 1.0, 3.0)),
    ("slide-24", ParticleConfig::entry(Circle, Rise, Black, 30, 1.5, 4.0)),
];

/// Particle configuration bound to `slide_id`; unknown slides get the
/// default white floating circles.
pub fn slide_config(slide_id: &str) -> ParticleConfig {
    SLIDE_CONFIGS
        .iter()
        .find(|(id, _)| *id == slide_id)
        .map(|(_, cfg)| cfg.clone())
        .unwrap_or_default()
}

/// Every slide id with an authored configuration, in page order.
pub fn configured_slides() -> impl Iterator<Item = &'static str> {
    SLIDE_CONFIGS.iter().map(|(id, _)| *id)
}
