//! Axis-aligned rectangles and the core overlap operations
//!
//! A rectangle is an origin plus an extent and denotes the half-open
//! region `[x, x+w) × [y, y+h)`. Edge coordinates (`x + w`, `y + h`)
//! are always formed in the widened domain so a rectangle near the
//! numeric limits never wraps during a query.

use num_traits::AsPrimitive;

use crate::error::GeometryError;
use crate::geom::point::Point;
use crate::geom::scalar::{Scalar, wide_max, wide_min};

/// An axis-aligned rectangle in one of the two coordinate domains
///
/// `(x, y)` is the top-left origin, `(w, h)` the extent. A rectangle
/// with zero or negative extent on either axis is degenerate: it
/// denotes the empty region, contains no point, and intersects
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T: Scalar> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T: Scalar + Eq> Eq for Rect<T> {}

impl<T: Scalar + std::hash::Hash> std::hash::Hash for Rect<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.w.hash(state);
        self.h.hash(state);
    }
}

/// Widened edges of a rectangle: left, top, right, bottom.
pub(crate) struct Edges<T: Scalar> {
    pub left: T::Wide,
    pub top: T::Wide,
    pub right: T::Wide,
    pub bottom: T::Wide,
}

impl<T: Scalar> Rect<T> {
    /// Creates a new rectangle from origin and extent
    pub const fn new(x: T, y: T, w: T, h: T) -> Self {
        Self { x, y, w, h }
    }

    /// Converts all four fields to the other numeric domain
    ///
    /// Pure representation change with `as`-cast semantics. Does not
    /// clip, round, or validate; the caller owns precision loss when
    /// narrowing.
    pub fn cast<U>(self) -> Rect<U>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Rect::new(self.x.as_(), self.y.as_(), self.w.as_(), self.h.as_())
    }

    /// Returns true if the rectangle denotes the empty region
    ///
    /// Emptiness is a property of the extent alone: zero or negative
    /// width or height. The origin plays no part.
    pub fn is_empty(&self) -> bool {
        !(self.w > T::zero()) || !(self.h > T::zero())
    }

    /// Widened edge coordinates, exact even at the numeric limits.
    pub(crate) fn edges(&self) -> Edges<T> {
        Edges {
            left: self.x.widen(),
            top: self.y.widen(),
            right: self.x.widen() + self.w.widen(),
            bottom: self.y.widen() + self.h.widen(),
        }
    }

    /// Returns true if the point lies inside the rectangle
    ///
    /// Bounds are half-open: left/top edges are inside, right/bottom
    /// edges are outside. A NaN coordinate is never contained.
    pub fn contains_point(&self, point: Point<T>) -> bool {
        let e = self.edges();
        let px = point.x.widen();
        let py = point.y.widen();
        px >= e.left && px < e.right && py >= e.top && py < e.bottom
    }

    /// Returns true if the two rectangles overlap
    ///
    /// A degenerate rectangle intersects nothing, including itself.
    /// Kept consistent with [`Rect::intersection`]: this is true
    /// exactly when that returns `Some`.
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        let a = self.edges();
        let b = other.edges();
        wide_max(a.left, b.left) < wide_min(a.right, b.right)
            && wide_max(a.top, b.top) < wide_min(a.bottom, b.bottom)
    }

    /// Returns the overlap region of two rectangles, or `None`
    ///
    /// The result is never degenerate: a shared edge or corner alone
    /// is not an overlap.
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let a = self.edges();
        let b = other.edges();
        let left = wide_max(a.left, b.left);
        let top = wide_max(a.top, b.top);
        let right = wide_min(a.right, b.right);
        let bottom = wide_min(a.bottom, b.bottom);

        if left < right && top < bottom {
            // The overlap origin is one of the input origins and the
            // extent is bounded by the smaller input extent, so
            // narrowing cannot fail on representable inputs.
            Some(Rect::new(
                T::narrow(left).ok()?,
                T::narrow(top).ok()?,
                T::narrow(right - left).ok()?,
                T::narrow(bottom - top).ok()?,
            ))
        } else {
            None
        }
    }

    /// Returns the smallest rectangle enclosing both inputs
    ///
    /// A degenerate input contributes nothing: the union of a
    /// rectangle with an empty one is the rectangle itself. Fails with
    /// [`GeometryError`] when the enclosing extent is not
    /// representable in the coordinate domain.
    pub fn union(&self, other: &Rect<T>) -> Result<Rect<T>, GeometryError> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => {
                return Ok(Rect::new(T::zero(), T::zero(), T::zero(), T::zero()));
            }
            (true, false) => return Ok(*other),
            (false, true) => return Ok(*self),
            (false, false) => {}
        }

        let a = self.edges();
        let b = other.edges();
        let left = wide_min(a.left, b.left);
        let top = wide_min(a.top, b.top);
        let right = wide_max(a.right, b.right);
        let bottom = wide_max(a.bottom, b.bottom);

        Ok(Rect::new(
            T::narrow(left)?,
            T::narrow(top)?,
            T::narrow(right - left)?,
            T::narrow(bottom - top)?,
        ))
    }
}
