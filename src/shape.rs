// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits shared by the shapes.

use crate::{Complex, Point, Rect};

/// A closed shape with an interior.
///
/// Every method here is also available as an inherent method on the
/// implementing types; the trait exists for code that is generic over shapes.
pub trait Shape {
    /// The canonical reference point of the shape: the center of a circle,
    /// annulus or square, the centroid of a triangle.
    fn position(&self) -> Point;

    /// The rotation of the shape about its position.
    fn orientation(&self) -> Complex;

    /// The area enclosed by the shape. Always non-negative.
    fn area(&self) -> f64;

    /// Total length of the boundary.
    fn perimeter(&self) -> f64;

    /// The point of the shape closest to `point`.
    ///
    /// What "of the shape" means differs per shape; see the implementations.
    fn closest_point(&self, point: Point) -> Point;

    /// The smallest axis-aligned rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;
}

/// Containment of points or whole shapes.
///
/// All implementations count the boundary as contained.
pub trait Contains<T> {
    /// Whether `other` lies entirely within `self`.
    fn contains(&self, other: T) -> bool;
}

/// Overlap between two shapes.
///
/// All implementations count touching boundaries as intersecting.
pub trait Intersects<T> {
    /// Whether `self` and `other` share at least one point.
    fn intersects(&self, other: T) -> bool;
}

/// Blending between two values of the same shape.
///
/// Positions and sizes are interpolated linearly and orientations along the
/// shorter arc. `t = 0` yields `self` and `t = 1` yields `to`, up to
/// rounding; values outside `[0, 1]` extrapolate.
pub trait Interpolate: Sized {
    /// The value `t` of the way from `self` to `to`.
    #[must_use]
    fn interpolated(&self, to: &Self, t: f64) -> Self;

    /// Overwrite `self` with the value `t` of the way from `from` to `to`.
    #[inline]
    fn interpolate(&mut self, from: &Self, to: &Self, t: f64) {
        *self = from.interpolated(to, t);
    }
}
