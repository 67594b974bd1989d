pub mod config;
pub mod falling;
pub mod flock;
pub mod orchestrator;
pub mod particles;
pub mod surface;
pub mod text_fx;

pub use config::{slide_config, ConfigError, ParticleColor, ParticleConfig, Physics, Shape};
pub use falling::{FallingIcons, Icon, IconKind};
pub use flock::{Boid, Flock};
pub use orchestrator::{Companion, CompanionKind, Layer, Orchestrator, SlideHost};
pub use particles::{Motion, Particle, ParticleSystem};
pub use surface::{Rect, Surface};
