//! Axis-aligned rectangle and point geometry
//!
//! Generic [`Point`] and [`Rect`] value types over two numeric
//! domains (`i32` and `f32`), with emptiness and containment tests,
//! rectangle intersection and union, line-segment clipping, and
//! minimal-bounding-rectangle computation over point sets.
//!
//! Intermediate coordinate arithmetic runs in a widened
//! representation, so queries near the numeric limits never wrap;
//! results that cannot be represented are reported through
//! [`GeometryError`] (or an absent result, where absence is the
//! contract).
//!
//! ```rust
//! use planerect::{Point, Rect};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 10, 10);
//! assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
//! assert!(a.contains_point(Point::new(9, 9)));
//! ```

pub mod error;
pub mod geom;

pub use error::GeometryError;
pub use geom::{Point, Rect, Scalar};
