//! Damped spring integrated per frame tick
//!
//! Transitions are physically parameterized, so settle time follows from
//! stiffness/damping/mass rather than a fixed duration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Integration step; frame deltas are split into sub-steps of this size
const SUB_STEP_SECS: f64 = 1.0 / 240.0;
/// Longest delta integrated in one call, so a stalled frame cannot explode
const MAX_STEP_SECS: f64 = 0.25;
const REST_DISPLACEMENT: f64 = 0.0005;
const REST_SPEED: f64 = 0.005;

/// Spring coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Damping ratio; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(180.0, 14.0)
    }
}

/// A value moving toward a target under a damped spring
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// A spring at rest on `value`
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget the motion; current velocity carries over
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Retarget with different coefficients
    pub fn animate_to(&mut self, target: f64, config: SpringConfig) {
        self.target = target;
        self.config = config;
    }

    /// Jump to a value and stop
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` and return the new value
    pub fn step(&mut self, dt: Duration) -> f64 {
        if self.is_settled() {
            return self.value;
        }

        let mut remaining = dt.as_secs_f64().min(MAX_STEP_SECS);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let mass = if mass > 0.0 { mass } else { 1.0 };

        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP_SECS);
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_SPEED
        {
            self.snap_to(self.target);
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn test_new_spring_is_settled() {
        let mut spring = Spring::new(1.0, SpringConfig::default());
        assert!(spring.is_settled());
        assert_eq!(spring.step(FRAME), 1.0);
    }

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(1.0, SpringConfig::new(180.0, 14.0));
        spring.set_target(0.93);
        run(&mut spring, 200);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.93);
    }

    #[test]
    fn test_underdamped_overshoots() {
        let config = SpringConfig::new(180.0, 14.0);
        assert!(config.damping_ratio() < 1.0);

        let mut spring = Spring::new(1.0, config);
        spring.set_target(0.93);
        let mut lowest = f64::MAX;
        for _ in 0..120 {
            lowest = lowest.min(spring.step(FRAME));
        }
        assert!(lowest < 0.93);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(1.0, SpringConfig::new(180.0, 14.0));
        spring.set_target(0.93);
        run(&mut spring, 3);
        let velocity = spring.velocity();
        assert!(velocity < 0.0);

        spring.animate_to(1.0, SpringConfig::new(160.0, 14.0));
        assert_eq!(spring.velocity(), velocity);
        run(&mut spring, 200);
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_large_delta_is_bounded() {
        let mut spring = Spring::new(0.0, SpringConfig::new(180.0, 14.0));
        spring.set_target(1.0);
        let v = spring.step(Duration::from_secs(30));
        assert!(v.is_finite());
        assert!(v > 0.0 && v < 2.0);
    }
}
