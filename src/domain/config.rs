//! UiConfig - Window and Layout Configuration

use serde::{Deserialize, Serialize};

/// Minimum share of the body width given to the navigation pane
pub const NAV_SPLIT_MIN: f32 = 0.15;
/// Maximum share of the body width given to the navigation pane
pub const NAV_SPLIT_MAX: f32 = 0.5;

/// UI configuration loaded from local storage
///
/// Only presentation settings live here; there is no business data to
/// persist. Missing or unreadable config falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Share of the body width given to the navigation pane (0.15 - 0.5)
    pub nav_split: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            nav_split: 0.3,
        }
    }
}

impl UiConfig {
    /// Navigation split clamped to the supported range
    pub fn nav_split_clamped(&self) -> f32 {
        self.nav_split.clamp(NAV_SPLIT_MIN, NAV_SPLIT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let config = UiConfig::default();
        assert!((config.nav_split_clamped() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_split_clamping() {
        let mut config = UiConfig::default();
        config.nav_split = 0.05;
        assert!((config.nav_split_clamped() - NAV_SPLIT_MIN).abs() < f32::EPSILON);
        config.nav_split = 0.9;
        assert!((config.nav_split_clamped() - NAV_SPLIT_MAX).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_round_trip() {
        let config = UiConfig {
            window_width: 1400.0,
            window_height: 900.0,
            nav_split: 0.33,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: UiConfig = serde_json::from_str(&json).expect("deserialize");
        assert!((back.nav_split - 0.33).abs() < f32::EPSILON);
        assert!((back.window_width - 1400.0).abs() < f32::EPSILON);
    }
}
