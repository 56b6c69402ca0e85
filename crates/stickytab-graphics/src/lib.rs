//! Pure math/data for drawing the sticky tab widget
//!
//! Geometry primitives, color definitions, brushes and the vector path
//! type the shape generator emits every frame. No dependencies on the
//! interaction layer or any rendering backend.

mod brush;
mod color;
mod geometry;
mod path;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use path::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Size};
    pub use crate::path::{Path, PathSegment};
}
