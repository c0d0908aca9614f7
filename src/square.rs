// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of square shape.

use core::f64::consts::SQRT_2;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::common::{hash_f64, lerp};
use crate::error::check_size;
use crate::{
    Angle, Circle, Complex, Contains, Interpolate, Intersects, Line, Point, Ray, Rect, Shape,
    ShapeError, Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A square, rotated about its center.
///
/// The orientation is stored at unit length, so the corners sit exactly
/// `side_length / 2` from the center along each local axis.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Square {
    center: Point,
    orientation: Complex,
    side_length: f64,
}

impl Square {
    /// The number of sides.
    pub const SIDE_COUNT: usize = 4;

    /// The angle between two adjacent sides, inside the square.
    pub const INTERIOR_ANGLE: Angle = Angle::QUARTER_TURN;

    /// The turn made at each corner when walking the boundary.
    pub const EXTERIOR_ANGLE: Angle = Angle::QUARTER_TURN;

    /// A new square. The orientation is calibrated to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeSize`] if `side_length` is negative and
    /// [`ShapeError::NonFinite`] if it is NaN or infinite.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        orientation: Complex,
        side_length: f64,
    ) -> Result<Square, ShapeError> {
        Ok(Square {
            center: center.into(),
            orientation: orientation.calibrated(),
            side_length: check_size("side_length", side_length)?,
        })
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The unit orientation.
    #[inline]
    pub fn orientation(&self) -> Complex {
        self.orientation
    }

    /// The length of each side.
    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// The position of the square, its center.
    #[inline]
    pub fn position(&self) -> Point {
        self.center
    }

    /// The extent along the square's local x axis.
    #[inline]
    pub fn width(&self) -> f64 {
        self.side_length
    }

    /// The extent along the square's local y axis.
    #[inline]
    pub fn height(&self) -> f64 {
        self.side_length
    }

    /// The area, `s²`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    /// The perimeter, `4s`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        4.0 * self.side_length
    }

    /// The radius of the inscribed circle.
    #[inline]
    pub fn inradius(&self) -> f64 {
        0.5 * self.side_length
    }

    /// The radius of the circumscribed circle.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        0.5 * SQRT_2 * self.side_length
    }

    /// The number of sides.
    #[inline]
    pub fn side_count(&self) -> usize {
        Self::SIDE_COUNT
    }

    /// The interior angle at every corner.
    #[inline]
    pub fn interior_angle(&self) -> Angle {
        Self::INTERIOR_ANGLE
    }

    /// The exterior angle at every corner.
    #[inline]
    pub fn exterior_angle(&self) -> Angle {
        Self::EXTERIOR_ANGLE
    }

    #[inline]
    fn half(&self) -> f64 {
        0.5 * self.side_length
    }

    #[inline]
    fn corner(&self, sx: f64, sy: f64) -> Point {
        let h = self.half();
        self.center + self.orientation.rotate(Vec2::new(sx * h, sy * h))
    }

    /// The corner at local `(+h, +h)`.
    #[inline]
    pub fn point_a(&self) -> Point {
        self.corner(1.0, 1.0)
    }

    /// The corner at local `(-h, +h)`.
    #[inline]
    pub fn point_b(&self) -> Point {
        self.corner(-1.0, 1.0)
    }

    /// The corner at local `(-h, -h)`.
    #[inline]
    pub fn point_c(&self) -> Point {
        self.corner(-1.0, -1.0)
    }

    /// The corner at local `(+h, -h)`.
    #[inline]
    pub fn point_d(&self) -> Point {
        self.corner(1.0, -1.0)
    }

    /// All four corners, counter-clockwise from [`Square::point_a`].
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [self.point_a(), self.point_b(), self.point_c(), self.point_d()]
    }

    /// The four sides, each running counter-clockwise from one corner to the
    /// next.
    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.corners();
        [
            Line::new(a, b),
            Line::new(b, c),
            Line::new(c, d),
            Line::new(d, a),
        ]
    }

    /// `point` in the square's own frame: centered on the origin, sides
    /// parallel to the axes.
    #[inline]
    pub fn local_point(&self, point: Point) -> Vec2 {
        self.orientation.conj().rotate(point - self.center)
    }

    /// The inverse of [`Square::local_point`].
    #[inline]
    pub fn world_point(&self, local: Vec2) -> Point {
        self.center + self.orientation.rotate(local)
    }

    /// Replace every field at once.
    ///
    /// # Errors
    ///
    /// See [`Square::new`]. On error `self` is left untouched.
    pub fn set(
        &mut self,
        center: impl Into<Point>,
        orientation: Complex,
        side_length: f64,
    ) -> Result<(), ShapeError> {
        *self = Square::new(center, orientation, side_length)?;
        Ok(())
    }

    /// Move the square.
    #[inline]
    pub fn set_center(&mut self, center: impl Into<Point>) {
        self.center = center.into();
    }

    /// Rotate the square to `orientation`, calibrated.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Complex) {
        self.orientation = orientation.calibrated();
    }

    /// Resize the square.
    ///
    /// # Errors
    ///
    /// See [`Square::new`]. On error `self` is left untouched.
    #[inline]
    pub fn set_side_length(&mut self, side_length: f64) -> Result<(), ShapeError> {
        self.side_length = check_size("side_length", side_length)?;
        Ok(())
    }

    /// A copy with a different center.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: impl Into<Point>) -> Square {
        Square {
            center: center.into(),
            ..self
        }
    }

    /// A copy with a different orientation, calibrated.
    #[inline]
    #[must_use]
    pub fn with_orientation(self, orientation: Complex) -> Square {
        Square {
            orientation: orientation.calibrated(),
            ..self
        }
    }

    /// A copy with a different side length.
    ///
    /// # Errors
    ///
    /// See [`Square::new`].
    #[inline]
    pub fn with_side_length(self, side_length: f64) -> Result<Square, ShapeError> {
        Ok(Square {
            side_length: check_size("side_length", side_length)?,
            ..self
        })
    }

    /// The constructor fields, in the order [`Square::new`] takes them.
    #[inline]
    pub fn to_components(self) -> (Point, Complex, f64) {
        (self.center, self.orientation, self.side_length)
    }

    /// The point of the square closest to `point`.
    ///
    /// Points inside are returned unchanged; others are clamped onto the
    /// boundary in the square's local frame.
    pub fn closest_point(&self, point: Point) -> Point {
        if self.contains(point) {
            return point;
        }
        let h = self.half();
        let local = self.local_point(point);
        self.world_point(Vec2::new(local.x.clamp(-h, h), local.y.clamp(-h, h)))
    }

    /// Is this square finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.orientation.is_finite() && self.side_length.is_finite()
    }

    /// Is this square NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.orientation.is_nan() || self.side_length.is_nan()
    }
}

impl Shape for Square {
    #[inline]
    fn position(&self) -> Point {
        self.center
    }

    #[inline]
    fn orientation(&self) -> Complex {
        self.orientation
    }

    #[inline]
    fn area(&self) -> f64 {
        Square::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        Square::perimeter(self)
    }

    #[inline]
    fn closest_point(&self, point: Point) -> Point {
        Square::closest_point(self, point)
    }

    fn bounding_box(&self) -> Rect {
        // Half extent of the rotated square along each world axis.
        let h = self.half() * (self.orientation.re.abs() + self.orientation.im.abs());
        Rect::new(
            self.center.x - h,
            self.center.y - h,
            self.center.x + h,
            self.center.y + h,
        )
    }
}

impl Contains<Point> for Square {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        let h = self.half();
        let local = self.local_point(point);
        local.x.abs() <= h && local.y.abs() <= h
    }
}

impl Intersects<Circle> for Square {
    #[inline]
    fn intersects(&self, circle: Circle) -> bool {
        circle.intersects(*self)
    }
}

impl Intersects<Ray> for Square {
    #[inline]
    fn intersects(&self, ray: Ray) -> bool {
        ray.intersects(*self)
    }
}

impl Interpolate for Square {
    /// Lerps the center and side length, slerps the orientation.
    fn interpolated(&self, to: &Square, t: f64) -> Square {
        Square {
            center: self.center.lerp(to.center, t),
            orientation: self.orientation.slerp(to.orientation, t).calibrated(),
            side_length: lerp(self.side_length, to.side_length, t).max(0.0),
        }
    }
}

impl Add<Vec2> for Square {
    type Output = Square;

    #[inline]
    fn add(self, v: Vec2) -> Square {
        Square {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for Square {
    type Output = Square;

    #[inline]
    fn sub(self, v: Vec2) -> Square {
        Square {
            center: self.center - v,
            ..self
        }
    }
}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.orientation.hash(state);
        hash_f64(self.side_length, state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(center=")?;
        fmt::Display::fmt(&self.center, f)?;
        write!(f, ", orientation=")?;
        fmt::Display::fmt(&self.orientation, f)?;
        write!(f, ", side_length=")?;
        fmt::Display::fmt(&self.side_length, f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Angle, Circle, Complex, Contains, Interpolate, Intersects, Point, Rect, Shape, ShapeError,
        Square, Vec2,
    };
    use std::f64::consts::SQRT_2;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-6, "{x} != {y}");
    }

    fn assert_point_near(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6,
            "{p} != ({x}, {y})"
        );
    }

    fn degrees(d: f64) -> Complex {
        Complex::from_angle(Angle::from_degrees(d))
    }

    /// A square rotated by 60°, with side `2√3`.
    fn tilted() -> Square {
        Square::new(
            (2.9019237886466844, 1.3660254037844386),
            degrees(60.0),
            2.0 * 3.0_f64.sqrt(),
        )
        .unwrap()
    }

    #[test]
    fn corners_of_unrotated_square() {
        let s = Square::new((0.0, 0.0), Complex::ONE, 3.0).unwrap();
        assert_eq!(s.point_a(), Point::new(1.5, 1.5));
        assert_eq!(s.point_b(), Point::new(-1.5, 1.5));
        assert_eq!(s.point_c(), Point::new(-1.5, -1.5));
        assert_eq!(s.point_d(), Point::new(1.5, -1.5));
        assert_eq!(s.edges()[3].p1, s.point_a());
    }

    #[test]
    fn derived_measures() {
        let s = Square::new((1.0, 1.0), Complex::ONE, 4.0).unwrap();
        assert_eq!(s.area(), 16.0);
        assert_eq!(s.perimeter(), 16.0);
        assert_eq!(s.width(), 4.0);
        assert_eq!(s.height(), 4.0);
        assert_eq!(s.side_count(), 4);
        assert_approx_eq(s.interior_angle().degrees(), 90.0);
        assert_approx_eq(s.exterior_angle().degrees(), 90.0);
        assert_eq!(s.inradius(), 2.0);
        assert_approx_eq(s.circumradius(), 2.0 * SQRT_2);
        assert_eq!(s.position(), Point::new(1.0, 1.0));
        assert_eq!(s.bounding_box(), Rect::new(-1.0, -1.0, 3.0, 3.0));
    }

    #[test]
    fn rotated_corners() {
        let s = tilted();
        assert_point_near(s.point_a(), 2.267949, 3.732051);
        assert_point_near(s.point_c(), 3.535898, -1.0);

        let bbox = Square::new((0.0, 0.0), degrees(45.0), 2.0)
            .unwrap()
            .bounding_box();
        assert_approx_eq(bbox.x0, -SQRT_2);
        assert_approx_eq(bbox.y1, SQRT_2);
    }

    #[test]
    fn validation() {
        assert!(matches!(
            Square::new((0.0, 0.0), Complex::ONE, -1.0),
            Err(ShapeError::NegativeSize {
                field: "side_length",
                ..
            })
        ));
        assert!(Square::new((0.0, 0.0), Complex::ONE, 0.0).is_ok());

        let mut s = Square::new((0.0, 0.0), Complex::ONE, 1.0).unwrap();
        assert!(s.set_side_length(-2.0).is_err());
        assert!(s.set((0.0, 0.0), Complex::ONE, -2.0).is_err());
        assert!(s.with_side_length(-2.0).is_err());
        assert_eq!(s.side_length(), 1.0);
    }

    #[test]
    fn orientation_is_calibrated() {
        let s = Square::new((0.0, 0.0), Complex::new(0.0, 3.0), 1.0).unwrap();
        assert_eq!(s.orientation(), Complex::I);
        let s = Square::new((0.0, 0.0), Complex::ZERO, 1.0).unwrap();
        assert_eq!(s.orientation(), Complex::ONE);
    }

    #[test]
    fn copy_and_components() {
        let s = Square::new((3.0, -1.0), Complex::I, 2.5).unwrap();
        let (center, orientation, side) = s.to_components();
        assert_eq!(Square::new(center, orientation, side).unwrap(), s);

        let mut t = s.with_center((0.0, 0.0));
        assert_eq!(t.orientation(), s.orientation());
        t.set_orientation(Complex::ONE);
        t.set_center((1.0, 2.0));
        t.set_side_length(5.0).unwrap();
        assert_eq!(t.to_components(), (Point::new(1.0, 2.0), Complex::ONE, 5.0));
        assert_eq!(t.with_orientation(Complex::I).orientation(), Complex::I);
    }

    #[test]
    fn contains_in_local_frame() {
        let s = tilted();
        assert!(s.contains(Point::new(3.9823222, 2.7014322)));
        assert!(!s.contains(Point::new(4.017678, 2.7626696)));
        assert!(s.contains(s.center()));

        let axis = Square::new((0.0, 0.0), Complex::ONE, 2.0).unwrap();
        assert!(axis.contains(Point::new(1.0, 1.0)));
        assert!(axis.contains(Point::new(-1.0, 0.3)));
        assert!(!axis.contains(Point::new(1.001, 0.0)));
    }

    #[test]
    fn closest_point() {
        let s = Square::new((0.0, 0.0), Complex::ONE, 2.0).unwrap();
        assert_eq!(s.closest_point(Point::new(0.5, 0.5)), Point::new(0.5, 0.5));
        assert_eq!(s.closest_point(Point::new(3.0, 0.5)), Point::new(1.0, 0.5));
        assert_eq!(s.closest_point(Point::new(3.0, -4.0)), Point::new(1.0, -1.0));

        let diamond = Square::new((0.0, 0.0), degrees(45.0), SQRT_2).unwrap();
        assert_point_near(diamond.closest_point(Point::new(3.0, 0.0)), 1.0, 0.0);
        assert_point_near(diamond.closest_point(Point::new(1.0, 1.0)), 0.5, 0.5);
    }

    #[test]
    fn intersects_circle() {
        let s = Square::new((0.0, 0.0), Complex::ONE, 2.0).unwrap();
        let touching = Circle::from_center_radius((3.0, 0.0), 2.0).unwrap();
        assert!(s.intersects(touching));
        let apart = Circle::from_center_radius((3.0, 3.0), 2.0).unwrap();
        assert!(!s.intersects(apart));
        let inside = Circle::from_center_radius((0.0, 0.0), 0.1).unwrap();
        assert!(s.intersects(inside));
    }

    #[test]
    fn interpolation() {
        let from = Square::new((0.0, 0.0), degrees(90.0), 2.0).unwrap();
        let to = Square::new((4.0, 2.0), degrees(244.0), 4.0).unwrap();
        let mid = from.interpolated(&to, 0.5);
        assert_eq!(mid.center(), Point::new(2.0, 1.0));
        assert_eq!(mid.side_length(), 3.0);
        assert_approx_eq(mid.orientation().angle().degrees(), 167.0);
        assert_approx_eq(mid.orientation().abs(), 1.0);

        let mut s = Square::default();
        s.interpolate(&from, &to, 0.0);
        assert_eq!(s.center(), from.center());
        assert_eq!(s.side_length(), from.side_length());
    }

    #[test]
    fn display_and_translate() {
        let s = Square::new((0.0, 0.0), Complex::ONE, 3.0).unwrap();
        assert_eq!(
            s.to_string(),
            "Square(center=(0, 0), orientation=1+0i, side_length=3)"
        );
        assert_eq!((s + Vec2::new(1.0, 1.0)).center(), Point::new(1.0, 1.0));
        assert_eq!((s - Vec2::new(1.0, 1.0)).center(), Point::new(-1.0, -1.0));
    }
}
