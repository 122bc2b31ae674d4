//! Page configuration
//!
//! Storage keys, limits and timings used by the page. The host serves these
//! as `window.PORTFOLIO_CONFIG`; any missing field takes its default.

use serde::{Deserialize, Serialize};

/// Storage key of the persisted feedback log
pub const COMMENTS_KEY: &str = "portfolioComments";
/// Storage key of the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub comments_key: String,
    pub theme_key: String,
    pub max_comments: usize,
    pub ack_duration_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_char_delay_ms: u32,
    pub typing_cursor_linger_ms: u32,
    pub particle_interval_ms: u32,
    pub particle_lifetime_ms: u32,
    pub trail_max_len: usize,
    pub trail_lifetime_ms: u32,
    pub ripple_duration_ms: u32,
    /// Turns off particles, trail and parallax
    pub effects_enabled: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            comments_key: COMMENTS_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            max_comments: crate::feedback::MAX_ENTRIES,
            ack_duration_ms: crate::feedback::ACK_DURATION_MS,
            typing_start_delay_ms: 1000,
            typing_char_delay_ms: 100,
            typing_cursor_linger_ms: 1000,
            particle_interval_ms: 2000,
            particle_lifetime_ms: 20_000,
            trail_max_len: crate::effects::trail::MAX_TRAIL_LEN,
            trail_lifetime_ms: 1000,
            ripple_duration_ms: 600,
            effects_enabled: true,
        }
    }
}

impl PageConfig {
    /// Decode from JSON, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid page config, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = PageConfig::from_json_or_default(r#"{"ack_duration_ms": 5000}"#);
        assert_eq!(cfg.ack_duration_ms, 5000);
        assert_eq!(cfg.max_comments, 60);
        assert_eq!(cfg.comments_key, "portfolioComments");
    }

    #[test]
    fn test_invalid_json_is_default() {
        assert_eq!(PageConfig::from_json_or_default("not json"), PageConfig::default());
    }

    #[test]
    fn test_toml_section() {
        let cfg: PageConfig = toml::from_str("trail_max_len = 5\neffects_enabled = false\n").unwrap();
        assert_eq!(cfg.trail_max_len, 5);
        assert!(!cfg.effects_enabled);
        assert_eq!(cfg.theme_key, "theme");
    }
}
