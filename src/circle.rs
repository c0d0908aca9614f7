// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::f64::consts::PI;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::common::{hash_f64, lerp};
use crate::error::check_size;
use crate::{
    Annulus, Complex, Contains, Interpolate, Intersects, Point, Ray, Rect, Shape, ShapeError,
    Square, Triangle, Vec2,
};

/// A circle.
///
/// The orientation does not take part in any geometric query, since a circle
/// looks the same at every rotation. It is stored as given; use
/// [`Circle::calibrate`] to bring it back to unit length.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    orientation: Complex,
    radius: f64,
}

impl Circle {
    /// A new circle from center, orientation and radius.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeSize`] if `radius` is negative and
    /// [`ShapeError::NonFinite`] if it is NaN or infinite.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        orientation: Complex,
        radius: f64,
    ) -> Result<Circle, ShapeError> {
        Ok(Circle {
            center: center.into(),
            orientation,
            radius: check_size("radius", radius)?,
        })
    }

    /// A new unrotated circle from center and radius.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`].
    #[inline]
    pub fn from_center_radius(center: impl Into<Point>, radius: f64) -> Result<Circle, ShapeError> {
        Circle::new(center, Complex::ONE, radius)
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The orientation, as stored.
    #[inline]
    pub fn orientation(&self) -> Complex {
        self.orientation
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The position of the circle, its center.
    #[inline]
    pub fn position(&self) -> Point {
        self.center
    }

    /// The diameter.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// The area, `πr²`.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// The perimeter, `2πr`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// The circumference; the same as [`Circle::perimeter`].
    #[inline]
    pub fn circumference(&self) -> f64 {
        self.perimeter()
    }

    /// Replace every field at once.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`]. On error `self` is left untouched.
    pub fn set(
        &mut self,
        center: impl Into<Point>,
        orientation: Complex,
        radius: f64,
    ) -> Result<(), ShapeError> {
        *self = Circle::new(center, orientation, radius)?;
        Ok(())
    }

    /// Move the circle.
    #[inline]
    pub fn set_center(&mut self, center: impl Into<Point>) {
        self.center = center.into();
    }

    /// Rotate the circle to `orientation`.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Complex) {
        self.orientation = orientation;
    }

    /// Resize the circle.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`]. On error `self` is left untouched.
    #[inline]
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = check_size("radius", radius)?;
        Ok(())
    }

    /// A copy with a different center.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: impl Into<Point>) -> Circle {
        Circle {
            center: center.into(),
            ..self
        }
    }

    /// A copy with a different orientation.
    #[inline]
    #[must_use]
    pub fn with_orientation(self, orientation: Complex) -> Circle {
        Circle {
            orientation,
            ..self
        }
    }

    /// A copy with a different radius.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`].
    #[inline]
    pub fn with_radius(self, radius: f64) -> Result<Circle, ShapeError> {
        Ok(Circle {
            radius: check_size("radius", radius)?,
            ..self
        })
    }

    /// The constructor fields, in the order [`Circle::new`] takes them.
    #[inline]
    pub fn to_components(self) -> (Point, Complex, f64) {
        (self.center, self.orientation, self.radius)
    }

    /// Bring the orientation back to unit length; a zero orientation becomes
    /// [`Complex::ONE`].
    #[inline]
    pub fn calibrate(&mut self) {
        self.orientation = self.orientation.calibrated();
    }

    /// A copy with its orientation calibrated.
    #[inline]
    #[must_use]
    pub fn calibrated(mut self) -> Circle {
        self.calibrate();
        self
    }

    /// The point on the circle's boundary closest to `point`.
    ///
    /// Every boundary point is equally close to the center, so the center
    /// itself is returned for it.
    #[inline]
    pub fn closest_point(&self, point: Point) -> Point {
        if point == self.center {
            return self.center;
        }
        self.center + (point - self.center).normalize() * self.radius
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.orientation.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.orientation.is_nan() || self.radius.is_nan()
    }
}

impl Shape for Circle {
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
        Circle::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        Circle::perimeter(self)
    }

    #[inline]
    fn closest_point(&self, point: Point) -> Point {
        Circle::closest_point(self, point)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_center_half_extent(self.center, self.radius)
    }
}

impl Contains<Point> for Circle {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        point.distance(self.center) <= self.radius
    }
}

impl Contains<Circle> for Circle {
    #[inline]
    fn contains(&self, other: Circle) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius
    }
}

impl Contains<Annulus> for Circle {
    #[inline]
    fn contains(&self, annulus: Annulus) -> bool {
        self.center.distance(annulus.center()) + annulus.outer_radius() <= self.radius
    }
}

impl Intersects<Circle> for Circle {
    #[inline]
    fn intersects(&self, other: Circle) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }
}

impl Intersects<Annulus> for Circle {
    #[inline]
    fn intersects(&self, annulus: Annulus) -> bool {
        annulus.intersects(*self)
    }
}

impl Intersects<Ray> for Circle {
    #[inline]
    fn intersects(&self, ray: Ray) -> bool {
        ray.intersects(*self)
    }
}

impl Intersects<Square> for Circle {
    #[inline]
    fn intersects(&self, square: Square) -> bool {
        self.contains(square.closest_point(self.center))
    }
}

impl Intersects<Triangle> for Circle {
    #[inline]
    fn intersects(&self, triangle: Triangle) -> bool {
        self.contains(triangle.closest_point(self.center))
    }
}

impl Interpolate for Circle {
    /// Lerps the center and radius, slerps the orientation.
    fn interpolated(&self, to: &Circle, t: f64) -> Circle {
        Circle {
            center: self.center.lerp(to.center, t),
            orientation: self.orientation.slerp(to.orientation, t),
            radius: lerp(self.radius, to.radius, t).max(0.0),
        }
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            ..self
        }
    }
}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.orientation.hash(state);
        hash_f64(self.radius, state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center=")?;
        fmt::Display::fmt(&self.center, f)?;
        write!(f, ", orientation=")?;
        fmt::Display::fmt(&self.orientation, f)?;
        write!(f, ", radius=")?;
        fmt::Display::fmt(&self.radius, f)?;
        write!(f, ")")
    }
}
