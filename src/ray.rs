// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rays, half-lines with an origin and a direction.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::common::epsilon_for_value;
use crate::{
    Annulus, Circle, Complex, Contains, Interpolate, Intersects, Line, Point, ShapeError, Square,
    Triangle, Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A half-line starting at `origin` and extending forever along `direction`.
///
/// The direction is stored as given. Queries work with its unit-length
/// counterpart, so the ray parameter `t` used by [`Ray::point_at`] and the
/// intersection methods is a distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vec2,
    unit: Vec2,
}

/// The unit vector along `direction`.
fn check_direction(direction: Vec2) -> Result<Vec2, ShapeError> {
    let length = direction.hypot();
    if length == 0.0 || !length.is_finite() {
        return Err(ShapeError::DegenerateDirection(direction));
    }
    Ok(direction / length)
}

impl Ray {
    /// A new ray.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DegenerateDirection`] if `direction` has zero
    /// length or is not finite.
    #[inline]
    pub fn new(origin: impl Into<Point>, direction: Vec2) -> Result<Ray, ShapeError> {
        Ok(Ray {
            origin: origin.into(),
            direction,
            unit: check_direction(direction)?,
        })
    }

    /// A new ray pointing the way `orientation` rotates the x axis.
    ///
    /// A degenerate orientation points along the x axis.
    #[inline]
    pub fn from_orientation(origin: impl Into<Point>, orientation: Complex) -> Ray {
        let unit = orientation.calibrated().to_vec2();
        Ray {
            origin: origin.into(),
            direction: unit,
            unit,
        }
    }

    /// The start of the ray.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The direction, as it was given.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// The direction scaled to unit length.
    #[inline]
    pub fn unit_direction(&self) -> Vec2 {
        self.unit
    }

    /// The position of the ray, its origin.
    #[inline]
    pub fn position(&self) -> Point {
        self.origin
    }

    /// The direction as a rotation of the x axis.
    #[inline]
    pub fn orientation(&self) -> Complex {
        Complex::from_vec2(self.unit)
    }

    /// Replace both fields.
    ///
    /// # Errors
    ///
    /// See [`Ray::new`]. On error `self` is left untouched.
    pub fn set(&mut self, origin: impl Into<Point>, direction: Vec2) -> Result<(), ShapeError> {
        *self = Ray::new(origin, direction)?;
        Ok(())
    }

    /// Move the origin.
    #[inline]
    pub fn set_origin(&mut self, origin: impl Into<Point>) {
        self.origin = origin.into();
    }

    /// Point the ray along `direction`.
    ///
    /// # Errors
    ///
    /// See [`Ray::new`]. On error `self` is left untouched.
    #[inline]
    pub fn set_direction(&mut self, direction: Vec2) -> Result<(), ShapeError> {
        self.unit = check_direction(direction)?;
        self.direction = direction;
        Ok(())
    }

    /// A copy with a different origin.
    #[inline]
    #[must_use]
    pub fn with_origin(self, origin: impl Into<Point>) -> Ray {
        Ray {
            origin: origin.into(),
            ..self
        }
    }

    /// A copy with a different direction.
    ///
    /// # Errors
    ///
    /// See [`Ray::new`].
    #[inline]
    pub fn with_direction(self, direction: Vec2) -> Result<Ray, ShapeError> {
        Ok(Ray {
            direction,
            unit: check_direction(direction)?,
            ..self
        })
    }

    /// The constructor fields, in the order [`Ray::new`] takes them.
    #[inline]
    pub fn to_components(self) -> (Point, Vec2) {
        (self.origin, self.direction)
    }

    /// The point at distance `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.unit * t
    }

    /// The point of the ray closest to `point`.
    ///
    /// Points behind the origin project onto the origin itself.
    #[inline]
    pub fn closest_point(&self, point: Point) -> Point {
        let t = (point - self.origin).dot(self.unit);
        if t <= 0.0 {
            self.origin
        } else {
            self.point_at(t)
        }
    }

    /// Rounding allowance for comparing `point` against points computed
    /// along the ray.
    fn slack(&self, point: Point) -> f64 {
        let magnitude = self
            .origin
            .x
            .abs()
            .max(self.origin.y.abs())
            .max(point.x.abs())
            .max(point.y.abs());
        if magnitude.is_finite() {
            epsilon_for_value(magnitude)
        } else {
            0.0
        }
    }

    /// Parameters where the line through the ray crosses the circle boundary,
    /// ascending. `None` if the line passes the circle by.
    ///
    /// A line within rounding slack of the circle counts as tangent, so a
    /// zero-radius circle is hit exactly when the ray contains its center.
    fn circle_crossings(&self, circle: &Circle) -> Option<(f64, f64)> {
        let center = circle.center();
        let to_center = center - self.origin;
        let t_mid = to_center.dot(self.unit);
        let d = to_center.cross(self.unit).abs();
        let r = circle.radius();
        if d > r + self.slack(center) {
            return None;
        }
        let half_chord = ((r - d) * (r + d)).max(0.0).sqrt();
        Some((t_mid - half_chord, t_mid + half_chord))
    }

    /// The ray parameters at which the ray crosses the boundary of `circle`.
    ///
    /// The result is ascending, and a tangent ray reports its single touching
    /// point once. Crossings behind the origin are left out, so a ray
    /// starting inside the circle has exactly one.
    pub fn circle_intersections(&self, circle: &Circle) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if let Some((t1, t2)) = self.circle_crossings(circle) {
            if t1 >= 0.0 {
                result.push(t1);
            }
            if t2 >= 0.0 && t2 != t1 {
                result.push(t2);
            }
        }
        result
    }

    /// The ray parameter of the first point shared with the segment `line`.
    ///
    /// When the segment lies along the ray, this is where the overlap starts
    /// (`0` if it covers the origin).
    pub fn line_intersection(&self, line: &Line) -> Option<f64> {
        let r = self.unit;
        let s = line.p1 - line.p0;
        let w = line.p0 - self.origin;
        let denom = r.cross(s);
        if denom == 0.0 {
            // Parallel; only a segment on the ray's own line can touch it.
            if w.cross(r) != 0.0 {
                return None;
            }
            let t0 = w.dot(r);
            let t1 = (line.p1 - self.origin).dot(r);
            return (t0.max(t1) >= 0.0).then_some(t0.min(t1).max(0.0));
        }
        let t = w.cross(s) / denom;
        let u = w.cross(r) / denom;
        (t >= 0.0 && (0.0..=1.0).contains(&u)).then_some(t)
    }

    fn hits_any(&self, edges: &[Line]) -> bool {
        edges
            .iter()
            .any(|edge| self.line_intersection(edge).is_some())
    }

    /// Is this ray finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.direction.is_finite()
    }

    /// Is this ray NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.origin.is_nan() || self.direction.is_nan()
    }
}

impl Default for Ray {
    /// A ray from the origin along the x axis.
    fn default() -> Self {
        let unit = Vec2::new(1.0, 0.0);
        Ray {
            origin: Point::ORIGIN,
            direction: unit,
            unit,
        }
    }
}

impl Contains<Point> for Ray {
    /// Whether `point` lies on the ray, up to rounding.
    ///
    /// The tolerance scales with the largest coordinate of the origin and
    /// `point`; see [`epsilon_for_value`].
    fn contains(&self, point: Point) -> bool {
        let projected = self.closest_point(point);
        projected == point || projected.distance(point) <= self.slack(point)
    }
}

impl Intersects<Circle> for Ray {
    #[inline]
    fn intersects(&self, circle: Circle) -> bool {
        self.circle_crossings(&circle)
            .is_some_and(|(_, far)| far >= 0.0)
    }
}

impl Intersects<Annulus> for Ray {
    #[inline]
    fn intersects(&self, annulus: Annulus) -> bool {
        annulus.intersects(*self)
    }
}

impl Intersects<Line> for Ray {
    #[inline]
    fn intersects(&self, line: Line) -> bool {
        self.line_intersection(&line).is_some()
    }
}

impl Intersects<Square> for Ray {
    fn intersects(&self, square: Square) -> bool {
        square.contains(self.origin) || self.hits_any(&square.edges())
    }
}

impl Intersects<Triangle> for Ray {
    fn intersects(&self, triangle: Triangle) -> bool {
        triangle.contains(self.origin) || self.hits_any(&triangle.edges())
    }
}

impl Interpolate for Ray {
    /// Lerps the origin, slerps the direction.
    fn interpolated(&self, to: &Ray, t: f64) -> Ray {
        Ray::from_orientation(
            self.origin.lerp(to.origin, t),
            self.orientation().slerp(to.orientation(), t),
        )
    }
}

impl Add<Vec2> for Ray {
    type Output = Ray;

    #[inline]
    fn add(self, v: Vec2) -> Ray {
        self.with_origin(self.origin + v)
    }
}

impl Sub<Vec2> for Ray {
    type Output = Ray;

    #[inline]
    fn sub(self, v: Vec2) -> Ray {
        self.with_origin(self.origin - v)
    }
}

impl Hash for Ray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.direction.hash(state);
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray(origin=")?;
        fmt::Display::fmt(&self.origin, f)?;
        write!(f, ", direction=")?;
        fmt::Display::fmt(&self.direction, f)?;
        write!(f, ")")
    }
}
