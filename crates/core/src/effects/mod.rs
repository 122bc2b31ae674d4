//! State and geometry behind the page's decorative effects
//!
//! None of this touches the DOM; the frontend feeds in pointer and scroll
//! positions and applies the strings and numbers that come back.

pub mod particles;
pub mod ripple;
pub mod scroll;
pub mod trail;
pub mod typewriter;

pub use particles::{ParticleField, ParticleSpec};
pub use ripple::{Ripple, Rect};
pub use scroll::FrameGate;
pub use trail::Trail;
pub use typewriter::Typewriter;

/// Project card transform while hovered
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
/// Project card transform at rest
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
