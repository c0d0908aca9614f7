// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of annulus shape.

use core::f64::consts::PI;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::common::{hash_f64, lerp};
use crate::error::check_size;
use crate::{
    Circle, Complex, Contains, Interpolate, Intersects, Point, Ray, Rect, Shape, ShapeError, Vec2,
};

/// A ring: the region between two concentric circles.
///
/// Both boundaries belong to the annulus. As with [`Circle`], the orientation
/// does not affect any query except [`Annulus::closest_point`] at the exact
/// center, where it picks the inner boundary point to return.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Annulus {
    center: Point,
    orientation: Complex,
    outer_radius: f64,
    inner_radius: f64,
}

fn check_radii(outer_radius: f64, inner_radius: f64) -> Result<(f64, f64), ShapeError> {
    let outer = check_size("outer_radius", outer_radius)?;
    let inner = check_size("inner_radius", inner_radius)?;
    if inner > outer {
        return Err(ShapeError::InvertedRadii { inner, outer });
    }
    Ok((outer, inner))
}

impl Annulus {
    /// A new annulus.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeSize`] or [`ShapeError::NonFinite`] for
    /// an unusable radius, and [`ShapeError::InvertedRadii`] if
    /// `inner_radius` exceeds `outer_radius`.
    pub fn new(
        center: impl Into<Point>,
        orientation: Complex,
        outer_radius: f64,
        inner_radius: f64,
    ) -> Result<Annulus, ShapeError> {
        let (outer_radius, inner_radius) = check_radii(outer_radius, inner_radius)?;
        Ok(Annulus {
            center: center.into(),
            orientation,
            outer_radius,
            inner_radius,
        })
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

    /// The radius of the outer boundary.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// The radius of the hole.
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// The position, its center.
    #[inline]
    pub fn position(&self) -> Point {
        self.center
    }

    /// The outer diameter.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.outer_radius
    }

    /// The width of the ring.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// The area of the ring, `π(R² - r²)`.
    #[inline]
    pub fn area(&self) -> f64 {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }

    /// The combined length of both boundaries, `2π(R + r)`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * (self.outer_radius + self.inner_radius)
    }

    /// The outer boundary as a circle.
    #[inline]
    pub fn outer_circle(&self) -> Circle {
        Circle::new(self.center, self.orientation, self.outer_radius).unwrap_or_default()
    }

    /// The boundary of the hole as a circle.
    #[inline]
    pub fn inner_circle(&self) -> Circle {
        Circle::new(self.center, self.orientation, self.inner_radius).unwrap_or_default()
    }

    /// Replace every field at once.
    ///
    /// # Errors
    ///
    /// See [`Annulus::new`]. On error `self` is left untouched.
    pub fn set(
        &mut self,
        center: impl Into<Point>,
        orientation: Complex,
        outer_radius: f64,
        inner_radius: f64,
    ) -> Result<(), ShapeError> {
        *self = Annulus::new(center, orientation, outer_radius, inner_radius)?;
        Ok(())
    }

    /// Move the annulus.
    #[inline]
    pub fn set_center(&mut self, center: impl Into<Point>) {
        self.center = center.into();
    }

    /// Rotate the annulus to `orientation`.
    #[inline]
    pub fn set_orientation(&mut self, orientation: Complex) {
        self.orientation = orientation;
    }

    /// Change the outer radius.
    ///
    /// # Errors
    ///
    /// See [`Annulus::new`]. On error `self` is left untouched.
    pub fn set_outer_radius(&mut self, outer_radius: f64) -> Result<(), ShapeError> {
        (self.outer_radius, self.inner_radius) = check_radii(outer_radius, self.inner_radius)?;
        Ok(())
    }

    /// Change the inner radius.
    ///
    /// # Errors
    ///
    /// See [`Annulus::new`]. On error `self` is left untouched.
    pub fn set_inner_radius(&mut self, inner_radius: f64) -> Result<(), ShapeError> {
        (self.outer_radius, self.inner_radius) = check_radii(self.outer_radius, inner_radius)?;
        Ok(())
    }

    /// A copy with a different center.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: impl Into<Point>) -> Annulus {
        Annulus {
            center: center.into(),
            ..self
        }
    }

    /// A copy with a different orientation.
    #[inline]
    #[must_use]
    pub fn with_orientation(self, orientation: Complex) -> Annulus {
        Annulus {
            orientation,
            ..self
        }
    }

    /// A copy with a different outer radius.
    ///
    /// # Errors
    ///
    /// See [`Annulus::new`].
    pub fn with_outer_radius(mut self, outer_radius: f64) -> Result<Annulus, ShapeError> {
        self.set_outer_radius(outer_radius)?;
        Ok(self)
    }

    /// A copy with a different inner radius.
    ///
    /// # Errors
    ///
    /// See [`Annulus::new`].
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Result<Annulus, ShapeError> {
        self.set_inner_radius(inner_radius)?;
        Ok(self)
    }

    /// The constructor fields, in the order [`Annulus::new`] takes them.
    #[inline]
    pub fn to_components(self) -> (Point, Complex, f64, f64) {
        (
            self.center,
            self.orientation,
            self.outer_radius,
            self.inner_radius,
        )
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
    pub fn calibrated(mut self) -> Annulus {
        self.calibrate();
        self
    }

    /// The point of the ring closest to `point`.
    ///
    /// Points within the ring are returned unchanged; others are moved
    /// radially onto the nearer boundary.
    pub fn closest_point(&self, point: Point) -> Point {
        let offset = point - self.center;
        let distance = offset.hypot();
        if distance > self.outer_radius {
            self.center + offset * (self.outer_radius / distance)
        } else if distance >= self.inner_radius {
            point
        } else if distance > 0.0 {
            self.center + offset * (self.inner_radius / distance)
        } else {
            // Every point of the inner boundary is equally close.
            self.center + self.orientation.calibrated().to_vec2() * self.inner_radius
        }
    }

    /// Is this annulus finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.orientation.is_finite()
            && self.outer_radius.is_finite()
            && self.inner_radius.is_finite()
    }

    /// Is this annulus NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan()
            || self.orientation.is_nan()
            || self.outer_radius.is_nan()
            || self.inner_radius.is_nan()
    }

    /// The nearest and farthest distance of `circle`'s points from the center.
    #[inline]
    fn distance_range(&self, circle: &Circle) -> (f64, f64) {
        let d = self.center.distance(circle.center());
        ((d - circle.radius()).max(0.0), d + circle.radius())
    }
}

impl Shape for Annulus {
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
        Annulus::area(self)
    }

    #[inline]
    fn perimeter(&self) -> f64 {
        Annulus::perimeter(self)
    }

    #[inline]
    fn closest_point(&self, point: Point) -> Point {
        Annulus::closest_point(self, point)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_center_half_extent(self.center, self.outer_radius)
    }
}

impl Contains<Point> for Annulus {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        let d = point.distance(self.center);
        self.inner_radius <= d && d <= self.outer_radius
    }
}

impl Contains<Circle> for Annulus {
    #[inline]
    fn contains(&self, circle: Circle) -> bool {
        let (near, far) = self.distance_range(&circle);
        near >= self.inner_radius && far <= self.outer_radius
    }
}

impl Intersects<Circle> for Annulus {
    #[inline]
    fn intersects(&self, circle: Circle) -> bool {
        let (near, far) = self.distance_range(&circle);
        near <= self.outer_radius && far >= self.inner_radius
    }
}

impl Intersects<Ray> for Annulus {
    #[inline]
    fn intersects(&self, ray: Ray) -> bool {
        // A ray that reaches the outer disk leaves it again through the ring.
        ray.intersects(self.outer_circle())
    }
}

impl Interpolate for Annulus {
    /// Lerps the center and both radii, slerps the orientation.
    fn interpolated(&self, to: &Annulus, t: f64) -> Annulus {
        let outer_radius = lerp(self.outer_radius, to.outer_radius, t).max(0.0);
        Annulus {
            center: self.center.lerp(to.center, t),
            orientation: self.orientation.slerp(to.orientation, t),
            outer_radius,
            inner_radius: lerp(self.inner_radius, to.inner_radius, t)
                .max(0.0)
                .min(outer_radius),
        }
    }
}

impl Add<Vec2> for Annulus {
    type Output = Annulus;

    #[inline]
    fn add(self, v: Vec2) -> Annulus {
        Annulus {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for Annulus {
    type Output = Annulus;

    #[inline]
    fn sub(self, v: Vec2) -> Annulus {
        Annulus {
            center: self.center - v,
            ..self
        }
    }
}

impl Hash for Annulus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.orientation.hash(state);
        hash_f64(self.outer_radius, state);
        hash_f64(self.inner_radius, state);
    }
}

impl fmt::Display for Annulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annulus(center=")?;
        fmt::Display::fmt(&self.center, f)?;
        write!(f, ", orientation=")?;
        fmt::Display::fmt(&self.orientation, f)?;
        write!(f, ", outer_radius=")?;
        fmt::Display::fmt(&self.outer_radius, f)?;
        write!(f, ", inner_radius=")?;
        fmt::Display::fmt(&self.inner_radius, f)?;
        write!(f, ")")
    }
}
