//! Reusable UI widgets - composable components without business logic
//!
//! Widgets use generic message types or callback functions; they must not
//! import `crate::app` directly.

pub mod counter_icon;
pub mod sliding_counter;

pub use counter_icon::{CounterIcon, Glyph};
pub use sliding_counter::{SlideAction, SlidingCounter, sliding_counter};
