use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::interpolate::lerp;

/// Fade-in entrance, optionally delayed per list index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    /// Delay before the first item starts
    pub delay_ms: u64,
    /// Extra delay added for each following index
    pub stagger_ms: u64,
    pub duration_ms: u64,
    /// Starting vertical offset in points (0 for a plain fade)
    pub rise: f64,
}

/// Style of an entering element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

impl Entrance {
    /// Cards: each index 120ms after the previous, 500ms each
    pub const CARDS: Entrance = Entrance {
        delay_ms: 0,
        stagger_ms: 120,
        duration_ms: 500,
        rise: 25.0,
    };

    /// Screen header fade
    pub const HEADER: Entrance = Entrance {
        delay_ms: 0,
        stagger_ms: 0,
        duration_ms: 600,
        rise: 0.0,
    };

    /// Filter bar, after the header has started
    pub const FILTER_BAR: Entrance = Entrance {
        delay_ms: 200,
        stagger_ms: 0,
        duration_ms: 500,
        rise: 25.0,
    };

    /// Linear progress in `[0, 1]` of item `index` after `elapsed`
    pub fn progress(&self, elapsed: Duration, index: usize) -> f64 {
        let start = self.delay_ms + self.stagger_ms.saturating_mul(index as u64);
        let elapsed_ms = elapsed.as_micros() as f64 / 1000.0;
        if self.duration_ms == 0 {
            return if elapsed_ms >= start as f64 { 1.0 } else { 0.0 };
        }
        ((elapsed_ms - start as f64) / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Style for an already eased progress value
    pub fn style_at(&self, progress: f64) -> EntranceStyle {
        let p = progress.clamp(0.0, 1.0);
        EntranceStyle {
            opacity: p,
            translate_y: lerp(-self.rise, 0.0, p),
        }
    }

    /// Whether every one of `count` items has finished entering
    pub fn is_complete(&self, elapsed: Duration, count: usize) -> bool {
        self.progress(elapsed, count.saturating_sub(1)) >= 1.0
    }
}
