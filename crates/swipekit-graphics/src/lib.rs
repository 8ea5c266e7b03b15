//! Pure math/data for SwipeKit
//!
//! Geometry primitives and colors shared by the animation, gesture and
//! cell crates. Nothing here holds mutable state.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
