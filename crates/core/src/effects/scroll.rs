//! Scroll-linked transforms
//!
//! The hero visual drifts up at half the scroll speed; floating elements drift
//! faster the later they appear and rotate with the page.

use std::cell::Cell;

const HERO_RATE: f64 = -0.5;
const FLOAT_SPEED_STEP: f64 = 0.5;
const FLOAT_ROTATION_PER_PX: f64 = 0.1;

pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_RATE
}

pub fn hero_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", hero_offset(scroll_y))
}

/// Transform of the `index`-th `.floating-element`
pub fn floating_transform(index: usize, scroll_y: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let speed = (index + 1) as f64 * FLOAT_SPEED_STEP;
    format!(
        "translateY({}px) rotate({}deg)",
        hero_offset(scroll_y) * speed,
        scroll_y * FLOAT_ROTATION_PER_PX
    )
}

/// At most one pending animation-frame update
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the caller should schedule a frame
    pub fn request(&self) -> bool {
        !self.ticking.replace(true)
    }

    /// Mark the scheduled frame as run
    pub fn complete(&self) {
        self.ticking.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_transform() {
        assert_eq!(hero_transform(10.0), "translateY(-5px)");
        assert_eq!(hero_transform(100.0), "translateY(-50px)");
    }

    #[test]
    fn test_floating_transform_scales_with_index() {
        assert_eq!(floating_transform(0, 100.0), "translateY(-25px) rotate(10deg)");
        assert_eq!(floating_transform(1, 100.0), "translateY(-50px) rotate(10deg)");
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(gate.request());
    }
}
