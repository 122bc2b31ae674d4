//! Decorative background and pointer effects

pub mod cursor;
pub mod particles;

pub use cursor::MouseTrail;
pub use particles::ParticleLayer;
