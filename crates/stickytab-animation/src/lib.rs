//! Tick-driven animation math for the sticky tab widget
//!
//! Time-based tweens with easing curves, spring physics, fling projection
//! and velocity tracking. Nothing here owns a clock: every operation that
//! needs time takes an explicit timestamp, so the widget can be driven by
//! a display-refresh callback in production and by hand in tests.

mod animation;
mod fling;
mod velocity_tracker;

pub use animation::*;
pub use fling::*;
pub use velocity_tracker::*;
