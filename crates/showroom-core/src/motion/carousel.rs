//! Carousel focus effect
//!
//! One horizontal scroll offset drives every card and pagination dot. For
//! item `i` the breakpoints are `[(i-1)·S, i·S, (i+1)·S]` with `S` the snap
//! interval, so exactly one card sits at full scale at any resting position.

use super::interpolate::interpolate_clamped;

/// Fraction of the viewport one card occupies
pub const CARD_WIDTH_RATIO: f64 = 0.82;
/// Horizontal margin on each side of a card, in points
pub const CARD_MARGIN: f64 = 10.0;

const SCALE_RANGE: [f64; 3] = [0.88, 1.0, 0.88];
const OPACITY_RANGE: [f64; 3] = [0.5, 1.0, 0.5];
const TRANSLATE_Y_RANGE: [f64; 3] = [10.0, 0.0, 10.0];
const DOT_WIDTH_RANGE: [f64; 3] = [8.0, 28.0, 8.0];
const DOT_OPACITY_RANGE: [f64; 3] = [0.3, 1.0, 0.3];
const DOT_ACTIVE_THRESHOLD: f64 = 0.5;

/// Card geometry in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub viewport_width: f64,
    pub card_width: f64,
    pub card_margin: f64,
}

/// Derived style of one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub scale: f64,
    pub opacity: f64,
    pub translate_y: f64,
}

/// Derived style of one pagination dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub width: f64,
    pub opacity: f64,
    /// Selects the highlight colour instead of the idle one
    pub active: bool,
}

impl CarouselLayout {
    /// Standard layout for a viewport width
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            card_width: viewport_width * CARD_WIDTH_RATIO,
            card_margin: CARD_MARGIN,
        }
    }

    /// Distance between consecutive resting positions
    #[inline]
    pub fn snap_interval(&self) -> f64 {
        self.card_width + self.card_margin * 2.0
    }

    /// Content padding that centers the first and last cards
    pub fn side_padding(&self) -> f64 {
        (self.viewport_width - self.card_width) / 2.0 - self.card_margin
    }

    /// Offset at which item `index` is centered
    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.snap_interval()
    }

    /// Largest reachable offset for `count` items
    pub fn max_offset(&self, count: usize) -> f64 {
        self.offset_for(count.saturating_sub(1))
    }

    /// Index of the resting position nearest to `offset`
    pub fn snap_index(&self, offset: f64, count: usize) -> usize {
        let interval = self.snap_interval();
        if count == 0 || interval <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let raw = (offset / interval).round();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(count - 1)
        }
    }

    /// Nearest multiple of the snap interval, clamped to the content
    pub fn nearest_snap(&self, offset: f64, count: usize) -> f64 {
        self.offset_for(self.snap_index(offset, count))
    }

    /// Left edge of item `index` relative to the viewport at `offset`
    pub fn card_left(&self, index: usize, offset: f64) -> f64 {
        self.side_padding() + self.card_margin + self.offset_for(index) - offset
    }

    fn breakpoints(&self, index: usize) -> [f64; 3] {
        let interval = self.snap_interval();
        let center = index as f64 * interval;
        [center - interval, center, center + interval]
    }

    /// Focus style of card `index`
    pub fn card_style(&self, offset: f64, index: usize) -> CardStyle {
        let input = self.breakpoints(index);
        CardStyle {
            scale: interpolate_clamped(offset, &input, &SCALE_RANGE),
            opacity: interpolate_clamped(offset, &input, &OPACITY_RANGE),
            translate_y: interpolate_clamped(offset, &input, &TRANSLATE_Y_RANGE),
        }
    }

    /// Pagination dot style for `index`
    pub fn dot_style(&self, offset: f64, index: usize) -> DotStyle {
        let input = self.breakpoints(index);
        let opacity = interpolate_clamped(offset, &input, &DOT_OPACITY_RANGE);
        DotStyle {
            width: interpolate_clamped(offset, &input, &DOT_WIDTH_RANGE),
            opacity,
            active: opacity > DOT_ACTIVE_THRESHOLD,
        }
    }
}
