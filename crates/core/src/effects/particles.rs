//! Floating background particles
//!
//! Each spawn draws a size, colour, horizontal position and float duration.
//! The frontend turns a [`ParticleSpec`] into a positioned element and removes
//! it once its lifetime is over.

use rand::Rng;

pub const PALETTE: [&str; 4] = ["#ff6b35", "#00d4ff", "#ff4081", "#7c3aed"];

pub const MIN_SIZE_PX: f64 = 2.0;
pub const SIZE_SPREAD_PX: f64 = 4.0;
pub const MIN_DURATION_S: f64 = 10.0;
pub const DURATION_SPREAD_S: f64 = 10.0;

/// Inline style of the full-viewport container behind the page
pub const CONTAINER_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    pointer-events: none; z-index: -1;";

pub const PARTICLE_KEYFRAMES: &str = "@keyframes particle-float-up { \
    0% { transform: translateY(0) rotate(0deg); opacity: 1; } \
    100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; } }";

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub color: &'static str,
    /// Horizontal position, percent of the viewport width
    pub left_pct: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen::<f64>().mul_add(SIZE_SPREAD_PX, MIN_SIZE_PX),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            left_pct: rng.gen::<f64>() * 100.0,
            duration_s: rng.gen::<f64>().mul_add(DURATION_SPREAD_S, MIN_DURATION_S),
        }
    }

    pub fn to_css(&self) -> String {
        let Self {
            size_px,
            color,
            left_pct,
            duration_s,
        } = self;
        let glow = size_px * 2.0;
        format!(
            "position: absolute; width: {size_px}px; height: {size_px}px; background: {color}; \
             border-radius: 50%; left: {left_pct}%; top: 100%; box-shadow: 0 0 {glow}px {color}; \
             animation: particle-float-up {duration_s}s linear forwards;"
        )
    }
}

/// Spawner owning its random source
pub struct ParticleField<R> {
    rng: R,
    spawned: u64,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, spawned: 0 }
    }

    pub fn spawn(&mut self) -> ParticleSpec {
        self.spawned += 1;
        ParticleSpec::random(&mut self.rng)
    }

    /// Total particles spawned so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}
