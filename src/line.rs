// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::{Point, Vec2};

/// A single line segment.
///
/// Shapes expose their edges as `Line`s; the closest-point and ray queries
/// of polygons are built on [`Line::nearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

/// The result of [`Line::nearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// The squared distance from the query point to the segment.
    pub distance_sq: f64,
    /// The segment parameter of the nearest point, in `[0, 1]`.
    pub t: f64,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The point at parameter `t`; `0` is `p0` and `1` is `p1`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    /// The length of the line.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The parameter and squared distance of the point on the segment
    /// nearest to `p`.
    #[inline]
    pub fn nearest(&self, p: Point) -> Nearest {
        let d = self.p1 - self.p0;
        let v = p - self.p0;

        // Projection parameter of `p` onto s(t) = (1-t) * p0 + t * p1.
        //
        // Note this will be infinite or nan when the segment has 0 length; see the clamping below.
        let t = d.dot(v) / d.hypot2();

        // Clamp the parameter to be on the line segment. This clamps `-inf` and `nan` to `0`, and `inf` to `1`.
        #[expect(
            clippy::manual_clamp,
            reason = "`clamp` would propagate the NaN of a zero-length segment"
        )]
        let t = { t.max(0.).min(1.) };

        let distance_sq = (v - t * d).hypot2();

        Nearest { distance_sq, t }
    }

    /// The point on the segment nearest to `p`.
    #[inline]
    pub fn nearest_point(&self, p: Point) -> Point {
        self.eval(self.nearest(p).t)
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(self, v: Vec2) -> Line {
        Line::new(self.p0 - v, self.p1 - v)
    }
}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.p0.hash(state);
        self.p1.hash(state);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Line(p0=")?;
        fmt::Display::fmt(&self.p0, formatter)?;
        write!(formatter, ", p1=")?;
        fmt::Display::fmt(&self.p1, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, Point};

    #[test]
    fn nearest_clamps_to_segment() {
        let l = Line::new((0.0, 0.0), (4.0, 0.0));

        let n = l.nearest(Point::new(1.0, 3.0));
        assert_eq!(n.t, 0.25);
        assert_eq!(n.distance_sq, 9.0);

        let n = l.nearest(Point::new(-2.0, 0.0));
        assert_eq!(n.t, 0.0);
        assert_eq!(n.distance_sq, 4.0);

        let n = l.nearest(Point::new(7.0, 4.0));
        assert_eq!(n.t, 1.0);
        assert_eq!(n.distance_sq, 25.0);

        assert_eq!(l.nearest_point(Point::new(1.0, 3.0)), Point::new(1.0, 0.0));
    }

    #[test]
    fn nearest_on_degenerate_segment() {
        let l = Line::new((1.0, 1.0), (1.0, 1.0));
        let n = l.nearest(Point::new(4.0, 5.0));
        assert_eq!(n.t, 0.0);
        assert_eq!(n.distance_sq, 25.0);
    }

    #[test]
    fn length_and_midpoint() {
        let l = Line::new((1.0, 1.0), (4.0, 5.0));
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.midpoint(), Point::new(2.5, 3.0));
        assert_eq!(l.reversed().p0, l.p1);
    }
}
