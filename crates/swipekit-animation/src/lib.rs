//! Animation system for SwipeKit
//!
//! A single-scalar animator with tween and spring curves, advanced by the
//! host's frame callbacks. Hosts own the clock; the animator only ever sees
//! monotonically increasing frame timestamps in nanoseconds.

mod animation;
mod animator;
mod frame_ticker;

pub use animation::*;
pub use animator::*;
pub use frame_ticker::*;
