use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::spring::{Spring, SpringConfig};

/// Phase of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Resting,
    Pressed,
}

/// Scale target and springs for one kind of pressable element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressConfig {
    /// Scale while held down
    pub pressed_scale: f64,
    /// Spring toward `pressed_scale`
    pub press_in: SpringConfig,
    /// Spring back to 1.0
    pub release: SpringConfig,
}

impl PressConfig {
    /// Carousel card
    pub const CARD: PressConfig = PressConfig {
        pressed_scale: 0.93,
        press_in: SpringConfig::new(180.0, 14.0),
        release: SpringConfig::new(160.0, 14.0),
    };

    /// Detail screen buttons
    pub const BUTTON: PressConfig = PressConfig {
        pressed_scale: 0.95,
        press_in: SpringConfig::new(180.0, 14.0),
        release: SpringConfig::new(160.0, 14.0),
    };
}

impl Default for PressConfig {
    fn default() -> Self {
        Self::CARD
    }
}

/// Two-state press feedback with spring-driven scale
///
/// `press_begin` never fires the action. `press_confirm` reports `true`
/// at most once per `press_begin`, and only if the element is still
/// pressed (release inside bounds). A new event retargets the spring
/// mid-flight.
#[derive(Debug, Clone)]
pub struct PressAffordance {
    phase: PressPhase,
    scale: Spring,
    config: PressConfig,
}

impl PressAffordance {
    pub fn new(config: PressConfig) -> Self {
        Self {
            phase: PressPhase::Resting,
            scale: Spring::new(1.0, config.press_in),
            config,
        }
    }

    pub fn card() -> Self {
        Self::new(PressConfig::CARD)
    }

    pub fn button() -> Self {
        Self::new(PressConfig::BUTTON)
    }

    #[inline]
    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.phase == PressPhase::Pressed
    }

    /// Current rendered scale
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Whether the scale still needs frame ticks
    pub fn is_animating(&self) -> bool {
        !self.scale.is_settled()
    }

    /// Finger/key down
    pub fn press_begin(&mut self) {
        if self.phase == PressPhase::Pressed {
            return;
        }
        self.phase = PressPhase::Pressed;
        self.scale
            .animate_to(self.config.pressed_scale, self.config.press_in);
    }

    /// Release outside bounds; no action
    pub fn press_end(&mut self) {
        self.release();
    }

    /// Gesture taken over by something else (a drag); no action
    pub fn press_cancel(&mut self) {
        self.release();
    }

    /// Release inside bounds; returns `true` when the action should fire
    pub fn press_confirm(&mut self) -> bool {
        if self.phase != PressPhase::Pressed {
            return false;
        }
        self.release();
        true
    }

    /// Advance the scale spring
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.scale.step(dt)
    }

    fn release(&mut self) {
        self.phase = PressPhase::Resting;
        self.scale.animate_to(1.0, self.config.release);
    }
}

impl Default for PressAffordance {
    fn default() -> Self {
        Self::card()
    }
}
