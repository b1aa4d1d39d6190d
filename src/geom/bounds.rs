//! Minimal bounding rectangle over a point set
//!
//! The clip filter here uses closed bounds on all four edges, unlike
//! point containment: a point sitting exactly on the clip rectangle's
//! far edge still contributes to the bound.

use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::scalar::{Scalar, wide_max, wide_min};

impl<T: Scalar> Rect<T> {
    /// Computes the minimal rectangle enclosing a set of points
    ///
    /// When `clip` is given, only points inside its closed bounds
    /// (`clip.x <= p.x <= clip.x + clip.w`, likewise for y) are
    /// considered, and a degenerate clip rectangle yields `None`
    /// outright. Returns `None` for an empty slice or when no point
    /// survives the filter. A single contributing point yields a
    /// zero-extent rectangle at that point, not `None`.
    pub fn from_enclosed_points(
        points: &[Point<T>],
        clip: Option<Rect<T>>,
    ) -> Option<Rect<T>> {
        if points.is_empty() {
            return None;
        }
        let clip_edges = match clip {
            Some(c) if c.is_empty() => return None,
            Some(c) => Some(c.edges()),
            None => None,
        };

        let mut bounds: Option<(T::Wide, T::Wide, T::Wide, T::Wide)> = None;
        for point in points {
            let px = point.x.widen();
            let py = point.y.widen();
            if let Some(e) = &clip_edges {
                let inside = px >= e.left && px <= e.right && py >= e.top && py <= e.bottom;
                if !inside {
                    continue;
                }
            }
            bounds = Some(match bounds {
                None => (px, py, px, py),
                Some((min_x, min_y, max_x, max_y)) => (
                    wide_min(min_x, px),
                    wide_min(min_y, py),
                    wide_max(max_x, px),
                    wide_max(max_y, py),
                ),
            });
        }

        let (min_x, min_y, max_x, max_y) = bounds?;
        Some(Rect::new(
            T::narrow(min_x).ok()?,
            T::narrow(min_y).ok()?,
            T::narrow(max_x - min_x).ok()?,
            T::narrow(max_y - min_y).ok()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_unclipped_points() {
        let points = [Point::new(1, 1), Point::new(5, 5), Point::new(3, 9)];
        assert_eq!(
            Rect::from_enclosed_points(&points, None),
            Some(Rect::new(1, 1, 4, 8))
        );
    }

    #[test]
    fn clip_filter_uses_closed_bounds() {
        let points = [Point::new(1, 1), Point::new(5, 5), Point::new(3, 9)];
        let clip = Rect::new(0, 0, 4, 4);
        // Only (1,1) lies within [0,4] x [0,4].
        assert_eq!(
            Rect::from_enclosed_points(&points, Some(clip)),
            Some(Rect::new(1, 1, 0, 0))
        );

        // A point exactly on the clip's far edge still contributes,
        // even though contains_point would exclude it.
        let edge = [Point::new(4, 4)];
        assert!(!clip.contains_point(edge[0]));
        assert_eq!(
            Rect::from_enclosed_points(&edge, Some(clip)),
            Some(Rect::new(4, 4, 0, 0))
        );
    }

    #[test]
    fn empty_point_set_is_absent() {
        let none: [Point<i32>; 0] = [];
        assert_eq!(Rect::from_enclosed_points(&none, None), None);
        assert_eq!(
            Rect::from_enclosed_points(&none, Some(Rect::new(0, 0, 10, 10))),
            None
        );
    }

    #[test]
    fn degenerate_clip_is_absent_regardless_of_points() {
        let points = [Point::new(1, 1), Point::new(2, 2)];
        let clip = Rect::new(0, 0, 0, 10);
        assert_eq!(Rect::from_enclosed_points(&points, Some(clip)), None);
    }

    #[test]
    fn fully_filtered_points_are_absent() {
        let points = [Point::new(100, 100), Point::new(200, 200)];
        let clip = Rect::new(0, 0, 10, 10);
        assert_eq!(Rect::from_enclosed_points(&points, Some(clip)), None);
    }

    #[test]
    fn single_point_yields_degenerate_rect() {
        let points = [Point::new(5, 5)];
        assert_eq!(
            Rect::from_enclosed_points(&points, None),
            Some(Rect::new(5, 5, 0, 0))
        );
    }

    #[test]
    fn float_bounds() {
        let points = [Point::new(1.5f32, -2.5), Point::new(-0.5, 4.0)];
        assert_eq!(
            Rect::from_enclosed_points(&points, None),
            Some(Rect::new(-0.5, -2.5, 2.0, 6.5))
        );
    }

    #[test]
    fn integer_extent_overflow_is_absent() {
        // Spread wider than i32 can express as an extent.
        let points = [Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)];
        assert_eq!(Rect::from_enclosed_points(&points, None), None);
    }

    #[test]
    fn nan_point_is_never_filtered_in() {
        let points = [Point::new(f32::NAN, 1.0), Point::new(2.0, 3.0)];
        let clip = Rect::new(0.0f32, 0.0, 10.0, 10.0);
        // The NaN point fails the closed-bound filter; the finite one remains.
        assert_eq!(
            Rect::from_enclosed_points(&points, Some(clip)),
            Some(Rect::new(2.0, 3.0, 0.0, 0.0))
        );
    }
}
