//! 2-D coordinate pairs

use num_traits::AsPrimitive;

use crate::geom::scalar::Scalar;

/// A 2-D point in one of the two coordinate domains
///
/// Plain structurally-comparable value type: two fields, no hidden
/// ownership, copied by value across API boundaries. Points carry no
/// arithmetic of their own; all derived computation lives on
/// [`Rect`](crate::geom::rect::Rect).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar + Eq> Eq for Point<T> {}

impl<T: Scalar + std::hash::Hash> std::hash::Hash for Point<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Scalar> Point<T> {
    /// Creates a new point
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Converts both coordinates to the other numeric domain
    ///
    /// Pure representation change with `as`-cast semantics; narrowing
    /// conversions truncate and the caller owns any precision loss.
    pub fn cast<U>(self) -> Point<U>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Point::new(self.x.as_(), self.y.as_())
    }
}
