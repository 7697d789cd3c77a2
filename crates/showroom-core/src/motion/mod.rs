//! Animation math for the showroom screens
//!
//! Everything here is a pure function of a scroll offset, elapsed time or a
//! frame delta; rendering layers call into it on each update.
//!
//! ## Atomic layer
//! - `interpolate` - Piecewise-linear mapping with clamping
//! - `spring` - Damped spring integration
//! - `stagger` - Delayed/staggered entrance progress
//!
//! ## Controllers
//! - `carousel` - Card focus and pagination styles from a horizontal offset
//! - `header` - Collapsing header styles from a vertical offset
//! - `press` - Two-state press feedback driven by a spring

pub mod interpolate;
pub mod spring;
pub mod stagger;

pub mod carousel;
pub mod header;
pub mod press;

pub use carousel::{CardStyle, CarouselLayout, DotStyle};
pub use header::{HeaderLayout, HeaderStyle};
pub use interpolate::{interpolate, interpolate_clamped, lerp, try_interpolate, Extrapolation};
pub use press::{PressAffordance, PressConfig, PressPhase};
pub use spring::{Spring, SpringConfig};
pub use stagger::{Entrance, EntranceStyle};
