//! Scroll configuration helpers
//!
//! Configuration types live in showroom-core; this adds the derived values
//! the animator needs.

use std::time::Duration;

pub use showroom_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;

    /// Points moved by one scroll step given the row height in points
    fn step_points(&self, points_per_row: f64) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    #[inline]
    fn step_points(&self, points_per_row: f64) -> f64 {
        self.scroll_lines.max(1) as f64 * points_per_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 220);
        assert_eq!(config.easing, EasingType::EaseOut);
        assert_eq!(config.scroll_lines, 1);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_step_points() {
        let config = ScrollConfig {
            scroll_lines: 3,
            ..Default::default()
        };
        assert_eq!(config.step_points(20.0), 60.0);

        let zero = ScrollConfig {
            scroll_lines: 0,
            ..Default::default()
        };
        assert_eq!(zero.step_points(20.0), 20.0);
    }
}
