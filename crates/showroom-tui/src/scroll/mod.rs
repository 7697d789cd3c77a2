//! Timed scrolling and transitions
//!
//! - `config` - Derived values from the core `ScrollConfig`
//! - `timing` - Easing curves, progress and `Tween`
//! - `animation` - `ScrollAnimator` combining both for scroll offsets
//!
//! ```ignore
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.scroll_to(layout.offset_for(2), layout.max_offset(count));
//! // every frame
//! let offset = animator.update(layout.max_offset(count));
//! ```

pub mod config;
pub mod timing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
pub use timing::{EasingTypeExt, Tween};
