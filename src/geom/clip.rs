//! Line-segment clipping against a rectangle boundary
//!
//! Cohen–Sutherland clipping. Endpoints are classified against the
//! closed box `[x, x+w] × [y, y+h]` with a 4-bit outcode; an endpoint
//! is only ever clipped against an axis on which the segment has
//! nonzero extent, so the slope division cannot divide by zero.

use crate::geom::point::Point;
use crate::geom::rect::{Edges, Rect};
use crate::geom::scalar::Scalar;

const OUT_LEFT: u8 = 0b0001;
const OUT_RIGHT: u8 = 0b0010;
const OUT_ABOVE: u8 = 0b0100;
const OUT_BELOW: u8 = 0b1000;

/// Outcode of a point against the closed clip box.
///
/// NaN coordinates compare false everywhere and classify as inside;
/// the final narrowing step rejects them.
fn outcode<T: Scalar>(x: T::Wide, y: T::Wide, e: &Edges<T>) -> u8 {
    let mut code = 0;
    if x < e.left {
        code |= OUT_LEFT;
    } else if x > e.right {
        code |= OUT_RIGHT;
    }
    if y < e.top {
        code |= OUT_ABOVE;
    } else if y > e.bottom {
        code |= OUT_BELOW;
    }
    code
}

impl<T: Scalar> Rect<T> {
    /// Clips a line segment to the rectangle boundary
    ///
    /// Returns the portion of the segment inside the closed box
    /// `[x, x+w] × [y, y+h]`, or `None` when the segment lies entirely
    /// outside (or the rectangle is degenerate). Endpoints already
    /// inside are returned unchanged; a crossing endpoint is replaced
    /// by the boundary-intersection point. In the integer domain the
    /// intersection coordinate is truncated toward zero.
    pub fn clip_line(&self, line: [Point<T>; 2]) -> Option<[Point<T>; 2]> {
        if self.is_empty() {
            return None;
        }
        let e = self.edges();
        let [p0, p1] = line;
        let (mut x0, mut y0) = (p0.x.widen(), p0.y.widen());
        let (mut x1, mut y1) = (p1.x.widen(), p1.y.widen());
        let mut code0 = outcode::<T>(x0, y0, &e);
        let mut code1 = outcode::<T>(x1, y1, &e);

        // At most four clips per endpoint in exact arithmetic; integer
        // truncation can force a re-clip, so the bound carries slack.
        for _ in 0..16 {
            if code0 | code1 == 0 {
                let a = Point::new(T::narrow(x0).ok()?, T::narrow(y0).ok()?);
                let b = Point::new(T::narrow(x1).ok()?, T::narrow(y1).ok()?);
                return Some([a, b]);
            }
            if code0 & code1 != 0 {
                return None;
            }

            let code = if code0 != 0 { code0 } else { code1 };
            let (x, y) = if code & OUT_LEFT != 0 {
                (e.left, y0 + T::mul_div(y1 - y0, e.left - x0, x1 - x0))
            } else if code & OUT_RIGHT != 0 {
                (e.right, y0 + T::mul_div(y1 - y0, e.right - x0, x1 - x0))
            } else if code & OUT_ABOVE != 0 {
                (x0 + T::mul_div(x1 - x0, e.top - y0, y1 - y0), e.top)
            } else {
                (x0 + T::mul_div(x1 - x0, e.bottom - y0, y1 - y0), e.bottom)
            };

            if code == code0 {
                x0 = x;
                y0 = y;
                code0 = outcode::<T>(x0, y0, &e);
            } else {
                x1 = x;
                y1 = y;
                code1 = outcode::<T>(x1, y1, &e);
            }
        }
        None
    }
}
