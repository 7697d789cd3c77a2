//! Scroll animation controller
//!
//! Drives one scroll offset (in layout points) toward a target with an
//! eased, fixed-duration animation. The carousel uses it to settle on snap
//! positions; the detail screen uses it for line and page steps.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::timing::{progress_at, EasingTypeExt};
use showroom_core::motion::lerp;
use showroom_core::EasingType;

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()`/`scroll_by()` to begin an animation, then `update()`
/// each frame to get the current interpolated offset. Offsets are clamped
/// to `[0, max]`.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    /// Scroll deltas received since the last update, applied together
    pending_delta: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
        }
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frames need a high tick rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Offset the current animation will end on
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Shown at zero with nothing moving it forward
    pub fn at_start(&self) -> bool {
        self.current <= 0.0 && self.target() + self.pending_delta <= 0.0
    }

    /// Jump to an offset (no animation), e.g. while a drag follows the pointer
    pub fn set(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
        self.pending_delta = 0.0;
    }

    /// Animate to `target`, starting from the visible position
    pub fn scroll_to(&mut self, target: f64, max: f64) {
        self.scroll_to_at(target, max, Instant::now());
    }

    pub fn scroll_to_at(&mut self, target: f64, max: f64, now: Instant) {
        let target = target.clamp(0.0, max.max(0.0));
        self.pending_delta = 0.0;

        if !self.config.is_smooth() || self.current == target {
            self.current = target;
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = forward); batched until the next update
    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        if !self.config.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, max.max(0.0));
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, max: f64) -> f64 {
        self.update_at(max, Instant::now())
    }

    pub fn update_at(&mut self, max: f64, now: Instant) -> f64 {
        let max = max.max(0.0);

        if self.pending_delta != 0.0 {
            let new_target = (self.target() + self.pending_delta).clamp(0.0, max);
            self.pending_delta = 0.0;
            if new_target != self.current {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            let t = progress_at(anim.start, anim.duration, now);
            if t >= 1.0 {
                self.current = anim.to.min(max);
                self.animation = None;
            } else {
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t)).min(max);
            }
        }

        self.current
    }

    pub fn reset(&mut self) {
        self.animation = None;
        self.current = 0.0;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100.0, 200.0);
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());

        animator.scroll_by(500.0, 200.0);
        assert_eq!(animator.current(), 200.0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::new(smooth());
        let start = Instant::now();
        animator.scroll_to_at(100.0, 200.0, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100.0);

        let mid = animator.update_at(200.0, start + Duration::from_millis(50));
        assert!((mid - 50.0).abs() < 1e-9);

        let end = animator.update_at(200.0, start + Duration::from_millis(150));
        assert_eq!(end, 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        animator.scroll_by(10.0, 200.0);
        assert!(animator.needs_update());

        animator.update_at(200.0, Instant::now());
        assert_eq!(animator.target(), 30.0);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.set(50.0);
        animator.scroll_to(300.0, 100.0);
        assert_eq!(animator.target(), 100.0);

        animator.scroll_to(-40.0, 100.0);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn test_set_cancels_animation() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.scroll_to(100.0, 200.0);
        animator.set(42.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.current(), 42.0);
        animator.reset();
        assert_eq!(animator.current(), 0.0);
    }

    #[test]
    fn test_at_start_waits_for_motion() {
        let mut animator = ScrollAnimator::new(smooth());
        assert!(animator.at_start());

        // Batched forward delta still pending
        animator.scroll_by(20.0, 100.0);
        assert!(!animator.at_start());

        let start = Instant::now();
        animator.update_at(100.0, start);
        animator.update_at(100.0, start + Duration::from_millis(100));
        assert_eq!(animator.current(), 20.0);

        // Heading back to zero but not there yet
        animator.scroll_to_at(0.0, 100.0, start + Duration::from_millis(100));
        animator.update_at(100.0, start + Duration::from_millis(150));
        assert_eq!(animator.target(), 0.0);
        assert!(!animator.at_start());

        animator.update_at(100.0, start + Duration::from_millis(200));
        assert!(animator.at_start());
    }
}
