//! Bounded mouse trail

use std::collections::VecDeque;

/// Default number of trail dots kept on screen
pub const MAX_TRAIL_LEN: usize = 20;
/// Dot diameter in CSS pixels
pub const DOT_SIZE_PX: f64 = 6.0;

/// FIFO of live trail dots; pushing past capacity evicts the oldest
#[derive(Debug)]
pub struct Trail<T> {
    dots: VecDeque<T>,
    max_len: usize,
}

impl<T> Trail<T> {
    pub fn new(max_len: usize) -> Self {
        let max_len = max_len.max(1);
        Self {
            dots: VecDeque::with_capacity(max_len + 1),
            max_len,
        }
    }

    /// Add a dot, returning the evicted one if the trail was full
    pub fn push(&mut self, dot: T) -> Option<T> {
        self.dots.push_back(dot);
        if self.dots.len() > self.max_len {
            self.dots.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Self::new(MAX_TRAIL_LEN)
    }
}

/// Inline style of a dot centred on the pointer, fading out over `lifetime_ms`
pub fn dot_css(client_x: f64, client_y: f64, lifetime_ms: u32) -> String {
    let half = DOT_SIZE_PX / 2.0;
    let fade_s = f64::from(lifetime_ms) / 1000.0;
    format!(
        "position: fixed; width: {DOT_SIZE_PX}px; height: {DOT_SIZE_PX}px; \
         background: radial-gradient(circle, rgba(255,107,53,0.8), transparent); \
         border-radius: 50%; left: {}px; top: {}px; pointer-events: none; \
         z-index: 1000; animation: trail-fade {fade_s}s ease-out forwards;",
        client_x - half,
        client_y - half,
    )
}

pub const TRAIL_KEYFRAMES: &str = "@keyframes trail-fade { \
    0% { opacity: 1; transform: scale(1); } \
    100% { opacity: 0; transform: scale(0); } }";
