// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triangle shape
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::{
    Circle, Complex, Contains, Interpolate, Intersects, Line, Point, Ray, Rect, Shape, Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Triangle
//     C
//     *
//    / \
//   /   \
//  *-----*
//  A     B
///
/// The vertices may come in either winding order, and nothing stops them from
/// being collinear. A collinear triangle has zero area and contains only the
/// points of its edges; its circumcenter and orthocenter are not finite.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Triangle {
    /// vertex a
    pub a: Point,
    /// vertex b
    pub b: Point,
    /// vertex c
    pub c: Point,
}

impl Triangle {
    /// A new [`Triangle`] from three vertices.
    #[inline]
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// A new [`Triangle`] from three float vertex coordinates.
    #[inline]
    pub const fn from_coords(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self {
            a: Point::new(a.0, a.1),
            b: Point::new(b.0, b.1),
            c: Point::new(c.0, c.1),
        }
    }

    /// Replace all three vertices.
    #[inline]
    pub fn set(&mut self, a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) {
        *self = Triangle::new(a, b, c);
    }

    /// A copy with vertex `a` moved.
    #[inline]
    #[must_use]
    pub fn with_a(self, a: impl Into<Point>) -> Self {
        Self { a: a.into(), ..self }
    }

    /// A copy with vertex `b` moved.
    #[inline]
    #[must_use]
    pub fn with_b(self, b: impl Into<Point>) -> Self {
        Self { b: b.into(), ..self }
    }

    /// A copy with vertex `c` moved.
    #[inline]
    #[must_use]
    pub fn with_c(self, c: impl Into<Point>) -> Self {
        Self { c: c.into(), ..self }
    }

    /// The vertices, in the order [`Triangle::new`] takes them.
    #[inline]
    pub fn to_components(self) -> (Point, Point, Point) {
        (self.a, self.b, self.c)
    }

    /// The centroid of the [`Triangle`]
    #[inline]
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// The position of the triangle, its centroid.
    #[inline]
    pub fn position(&self) -> Point {
        self.centroid()
    }

    /// The direction from the centroid to vertex `a`, as a unit rotation.
    ///
    /// [`Complex::ONE`] if `a` is the centroid.
    #[inline]
    pub fn orientation(&self) -> Complex {
        Complex::from_vec2(self.a - self.centroid()).calibrated()
    }

    /// Twice the signed area; positive when `a`, `b`, `c` run counter-clockwise.
    #[inline]
    fn signed_area2(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// The area of the [`Triangle`]
    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.signed_area2().abs()
    }

    /// The length of side `ab`.
    #[inline]
    pub fn side_ab(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// The length of side `bc`.
    #[inline]
    pub fn side_bc(&self) -> f64 {
        self.b.distance(self.c)
    }

    /// The length of side `ca`.
    #[inline]
    pub fn side_ca(&self) -> f64 {
        self.c.distance(self.a)
    }

    /// The sum of the side lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.side_ab() + self.side_bc() + self.side_ca()
    }

    /// The center of the circle through all three vertices.
    pub fn circumcenter(&self) -> Point {
        let Triangle { a, b, c } = *self;
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let a2 = a.to_vec2().hypot2();
        let b2 = b.to_vec2().hypot2();
        let c2 = c.to_vec2().hypot2();
        Point::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        )
    }

    /// The center of the inscribed circle.
    ///
    /// Each vertex is weighted by the length of the side opposite it.
    pub fn incenter(&self) -> Point {
        let wa = self.side_bc();
        let wb = self.side_ca();
        let wc = self.side_ab();
        let sum = wa + wb + wc;
        Point::new(
            (wa * self.a.x + wb * self.b.x + wc * self.c.x) / sum,
            (wa * self.a.y + wb * self.b.y + wc * self.c.y) / sum,
        )
    }

    /// The intersection of the three altitudes.
    pub fn orthocenter(&self) -> Point {
        // Euler line: H = A + B + C - 2O.
        let o = self.circumcenter().to_vec2();
        (self.a.to_vec2() + self.b.to_vec2() + self.c.to_vec2() - 2.0 * o).to_point()
    }

    /// The three sides: `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// The point of the triangle closest to `point`.
    ///
    /// Points inside are returned unchanged; others project onto the nearest
    /// edge.
    pub fn closest_point(&self, point: Point) -> Point {
        if self.contains(point) {
            return point;
        }
        let mut best = (f64::INFINITY, point);
        for edge in self.edges() {
            let nearest = edge.nearest(point);
            if nearest.distance_sq < best.0 {
                best = (nearest.distance_sq, edge.eval(nearest.t));
            }
        }
        best.1
    }

    /// Is this triangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Is this triangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl From<(Point, Point, Point)> for Triangle {
    fn from(points: (Point, Point, Point)) -> Triangle {
        Triangle::new(points.0, points.1, points.2)
    }
}

impl Shape for Triangle {
    #[inline]
    fn position(&self) -> Point {
        self.centroid()
    }

    #[inline]
    fn orientation(&self) -> Complex {
        Triangle::orientation(self)
    }

    #[inline]
    fn area(&self) -> f64 {
        Triangle::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        Triangle::perimeter(self)
    }

    #[inline]
    fn closest_point(&self, point: Point) -> Point {
        Triangle::closest_point(self, point)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_point_slice(&[self.a, self.b, self.c])
    }
}

impl Contains<Point> for Triangle {
    fn contains(&self, point: Point) -> bool {
        if self.signed_area2() == 0.0 {
            return self
                .edges()
                .iter()
                .any(|edge| edge.nearest(point).distance_sq == 0.0);
        }
        let d_ab = (self.b - self.a).cross(point - self.a);
        let d_bc = (self.c - self.b).cross(point - self.b);
        let d_ca = (self.a - self.c).cross(point - self.c);
        let has_neg = d_ab < 0.0 || d_bc < 0.0 || d_ca < 0.0;
        let has_pos = d_ab > 0.0 || d_bc > 0.0 || d_ca > 0.0;
        !(has_neg && has_pos)
    }
}

impl Intersects<Circle> for Triangle {
    #[inline]
    fn intersects(&self, circle: Circle) -> bool {
        circle.intersects(*self)
    }
}

impl Intersects<Ray> for Triangle {
    #[inline]
    fn intersects(&self, ray: Ray) -> bool {
        ray.intersects(*self)
    }
}

impl Interpolate for Triangle {
    /// Lerps each vertex.
    fn interpolated(&self, to: &Triangle, t: f64) -> Triangle {
        Triangle {
            a: self.a.lerp(to.a, t),
            b: self.b.lerp(to.b, t),
            c: self.c.lerp(to.c, t),
        }
    }
}

impl Add<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn add(self, v: Vec2) -> Triangle {
        Triangle::new(self.a + v, self.b + v, self.c + v)
    }
}

impl Sub<Vec2> for Triangle {
    type Output = Triangle;

    #[inline]
    fn sub(self, v: Vec2) -> Triangle {
        Triangle::new(self.a - v, self.b - v, self.c - v)
    }
}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.hash(state);
        self.b.hash(state);
        self.c.hash(state);
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(a=")?;
        fmt::Display::fmt(&self.a, f)?;
        write!(f, ", b=")?;
        fmt::Display::fmt(&self.b, f)?;
        write!(f, ", c=")?;
        fmt::Display::fmt(&self.c, f)?;
        write!(f, ")")
    }
}
