//! Easing curves and time-based tweens
//!
//! Used for everything that runs for a fixed duration: scroll snapping,
//! filter chip colour transitions and entrance fades.

use std::time::{Duration, Instant};

use showroom_core::motion::lerp;
use showroom_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Map progress in [0, 1] onto eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            // Exponential ease-out: fast start, long soft landing
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Animation progress (0.0 to 1.0) at `now`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// A value moving between two points over a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    /// A tween already resting on `value`
    pub fn settled(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
            easing: EasingType::Linear,
        }
    }

    pub fn new(from: f64, to: f64, start: Instant, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Restart toward `to` from wherever the tween currently is
    pub fn retarget(&mut self, to: f64, now: Instant, duration: Duration, easing: EasingType) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.easing = easing;
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let t = self.easing.apply(progress_at(self.start, self.duration, now));
        lerp(self.from, self.to, t)
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_decelerates() {
        // Most of the distance is covered in the first half
        assert!(EasingType::EaseOut.apply(0.5) > 0.95);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress_at(start, Duration::ZERO, start), 1.0);
    }

    #[test]
    fn test_tween() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, start, Duration::from_millis(250), EasingType::Linear);
        assert_eq!(tween.value_at(start), 0.0);
        assert!((tween.value_at(start + Duration::from_millis(125)) - 0.5).abs() < 1e-9);
        assert_eq!(tween.value_at(start + Duration::from_millis(400)), 1.0);
        assert!(tween.is_complete(start + Duration::from_millis(250)));
        assert!(!tween.is_complete(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_tween_retarget_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::new(0.0, 1.0, start, Duration::from_millis(200), EasingType::Linear);
        let mid = start + Duration::from_millis(100);
        tween.retarget(0.0, mid, Duration::from_millis(200), EasingType::Linear);
        assert!((tween.value_at(mid) - 0.5).abs() < 1e-9);
        assert_eq!(tween.value_at(mid + Duration::from_millis(200)), 0.0);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn test_settled_tween() {
        let now = Instant::now();
        let tween = Tween::settled(1.0, now);
        assert_eq!(tween.value_at(now), 1.0);
        assert!(tween.is_complete(now));
    }
}
