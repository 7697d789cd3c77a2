//! Collapsing detail header
//!
//! A single vertical scroll offset drives the header height, the hero
//! image transform and the collapsed title, all clamped.

use serde::{Deserialize, Serialize};

use super::interpolate::interpolate_clamped;

/// Pull distance at which the hero image reaches full stretch
pub const OVERSCROLL_STRETCH: f64 = 100.0;

/// Header geometry in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderLayout {
    pub max_height: f64,
    pub min_height: f64,
    /// How far past the top the content may be pulled
    #[serde(default = "default_overscroll")]
    pub overscroll: f64,
}

fn default_overscroll() -> f64 {
    100.0
}

/// Derived header style for one scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub height: f64,
    pub image_scale: f64,
    pub image_translate_y: f64,
    pub image_opacity: f64,
    pub title_opacity: f64,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            max_height: 300.0,
            min_height: 100.0,
            overscroll: default_overscroll(),
        }
    }
}

impl HeaderLayout {
    /// Scroll distance over which the header collapses
    #[inline]
    pub fn collapse_distance(&self) -> f64 {
        (self.max_height - self.min_height).max(0.0)
    }

    /// Whether the header has reached its minimum height
    pub fn is_collapsed(&self, offset: f64) -> bool {
        offset >= self.collapse_distance()
    }

    pub fn style(&self, offset: f64) -> HeaderStyle {
        let d = self.collapse_distance();
        let image_scale = if d > 0.0 {
            interpolate_clamped(offset, &[-OVERSCROLL_STRETCH, 0.0, d], &[1.3, 1.0, 0.9])
        } else {
            // Nothing to collapse; only the pull stretches the image
            interpolate_clamped(offset, &[-OVERSCROLL_STRETCH, 0.0], &[1.3, 1.0])
        };
        HeaderStyle {
            height: interpolate_clamped(offset, &[0.0, d], &[self.max_height, self.min_height]),
            image_scale,
            image_translate_y: interpolate_clamped(offset, &[0.0, d], &[0.0, 30.0]),
            image_opacity: interpolate_clamped(offset, &[0.0, d], &[1.0, 0.7]),
            title_opacity: interpolate_clamped(offset, &[0.0, d * 0.5], &[0.0, 1.0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_at_rest() {
        let layout = HeaderLayout::default();
        let style = layout.style(0.0);
        assert_eq!(style.height, 300.0);
        assert_eq!(style.image_scale, 1.0);
        assert_eq!(style.image_translate_y, 0.0);
        assert_eq!(style.image_opacity, 1.0);
        assert_eq!(style.title_opacity, 0.0);
    }

    #[test]
    fn test_collapsed_past_threshold() {
        let layout = HeaderLayout::default();
        assert_eq!(layout.collapse_distance(), 200.0);
        for offset in [200.0, 500.0, 10_000.0] {
            let style = layout.style(offset);
            assert_eq!(style.height, 100.0);
            assert_eq!(style.image_scale, 0.9);
            assert_eq!(style.image_translate_y, 30.0);
            assert_eq!(style.image_opacity, 0.7);
            assert_eq!(style.title_opacity, 1.0);
        }
        assert!(layout.is_collapsed(200.0));
        assert!(!layout.is_collapsed(199.0));
    }

    #[test]
    fn test_overscroll_stretch() {
        let layout = HeaderLayout::default();
        assert_eq!(layout.style(-100.0).image_scale, 1.3);
        assert_eq!(layout.style(-400.0).image_scale, 1.3);
        assert!((layout.style(-50.0).image_scale - 1.15).abs() < 1e-9);
        // Height does not grow past max
        assert_eq!(layout.style(-50.0).height, 300.0);
    }

    #[test]
    fn test_title_fades_in_first_half() {
        let layout = HeaderLayout::default();
        assert!((layout.style(50.0).title_opacity - 0.5).abs() < 1e-9);
        assert_eq!(layout.style(100.0).title_opacity, 1.0);
        assert_eq!(layout.style(150.0).title_opacity, 1.0);
    }

    #[test]
    fn test_degenerate_layout() {
        let layout = HeaderLayout {
            max_height: 100.0,
            min_height: 100.0,
            overscroll: 100.0,
        };
        let style = layout.style(50.0);
        assert_eq!(style.height, 100.0);
        assert_eq!(style.image_scale, 1.0);
        assert_eq!(layout.style(0.0).image_scale, 1.0);
        assert!((layout.style(-50.0).image_scale - 1.15).abs() < 1e-9);
        assert!(style.title_opacity.is_finite());
    }

    #[test]
    fn test_stretch_independent_of_pull_limit() {
        for overscroll in [0.0, 50.0, 250.0] {
            let layout = HeaderLayout {
                overscroll,
                ..HeaderLayout::default()
            };
            assert_eq!(layout.style(0.0).image_scale, 1.0);
            assert!((layout.style(-50.0).image_scale - 1.15).abs() < 1e-9);
            assert_eq!(layout.style(-100.0).image_scale, 1.3);
        }
    }
}
