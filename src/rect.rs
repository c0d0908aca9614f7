// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::common::hash_f64;
use crate::{Point, Vec2};

/// An axis-aligned rectangle, as returned by
/// [`Shape::bounding_box`](crate::Shape::bounding_box).
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (bottom edge in y-up spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (top edge in y-up spaces).
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from minimum and maximum coordinates.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y).abs()
    }

    /// A new square rectangle centered on `center`, extending `half_extent`
    /// in each direction.
    #[inline]
    pub fn from_center_half_extent(center: Point, half_extent: f64) -> Rect {
        Rect::new(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }

    /// The smallest rectangle enclosing all of `points`.
    ///
    /// Returns [`Rect::ZERO`] for an empty slice.
    pub fn from_point_slice(points: &[Point]) -> Rect {
        let Some((first, rest)) = points.split_first() else {
            return Rect::ZERO;
        };
        rest.iter()
            .fold(Rect::new(first.x, first.y, first.x, first.y), |rect, pt| {
                rect.union_pt(*pt)
            })
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Rect {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    #[inline]
    #[must_use]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Whether `point` lies inside the rectangle or on its edges.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Whether the two rectangles share at least one point.
    #[inline]
    pub fn overlaps(&self, other: Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.x1.is_finite() && self.y0.is_finite() && self.y1.is_finite()
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect::new(self.x0 + v.x, self.y0 + v.y, self.x1 + v.x, self.y1 + v.y)
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        Rect::new(self.x0 - v.x, self.y0 - v.y, self.x1 - v.x, self.y1 - v.y)
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x0, state);
        hash_f64(self.y0, state);
        hash_f64(self.x1, state);
        hash_f64(self.y1, state);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect(x0=")?;
        fmt::Display::fmt(&self.x0, f)?;
        write!(f, ", y0=")?;
        fmt::Display::fmt(&self.y0, f)?;
        write!(f, ", x1=")?;
        fmt::Display::fmt(&self.x1, f)?;
        write!(f, ", y1=")?;
        fmt::Display::fmt(&self.y1, f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect, Vec2};

    #[test]
    fn from_points_is_normalized() {
        let r = Rect::from_points((3.0, 4.0), (-1.0, 2.0));
        assert_eq!(r, Rect::new(-1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.area(), 8.0);
        assert_eq!(r.center(), Point::new(1.0, 3.0));
    }

    #[test]
    fn point_slice_bounds() {
        let points = [
            Point::new(1.0, -2.0),
            Point::new(-3.0, 0.5),
            Point::new(2.0, 4.0),
        ];
        assert_eq!(
            Rect::from_point_slice(&points),
            Rect::new(-3.0, -2.0, 2.0, 4.0)
        );
        assert_eq!(Rect::from_point_slice(&[]), Rect::ZERO);
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert!(r.contains(Point::new(2.0, 1.0)));
        assert!(r.contains(Point::new(1.0, 0.5)));
        assert!(!r.contains(Point::new(2.01, 0.5)));
    }

    #[test]
    fn overlap_and_translate() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = a + Vec2::new(2.0, 2.0);
        assert!(a.overlaps(b));
        assert!(!a.overlaps(b + Vec2::new(0.5, 0.0)));
        assert_eq!(a.union(b), Rect::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Rect::new(0.0, 1.0, 2.0, 3.5)),
            "Rect(x0=0, y0=1, x1=2, y1=3.5)"
        );
    }
}
