//! Geometry engine: points, rectangles, and derived computations
//!
//! Every operation is a pure function of its inputs; values are plain
//! `Copy` structs with no shared state, so concurrent callers need no
//! coordination.

pub mod bounds;
pub mod clip;
pub mod point;
pub mod rect;
pub mod scalar;

pub use point::Point;
pub use rect::Rect;
pub use scalar::Scalar;
