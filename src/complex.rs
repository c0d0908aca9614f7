// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complex numbers used as orientations.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::common::{hash_f64, lerp};
use crate::{Angle, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A complex number, used as a rotation.
///
/// A complex number `r·(cos θ + i·sin θ)` rotates by `θ` and scales by `r`.
/// Shapes store their orientation this way: composing rotations is a single
/// multiplication and rotating a vector needs no trigonometry.
///
/// Orientations are expected to be of unit magnitude. [`Complex::calibrated`]
/// restores that after drift, and maps the degenerate [`Complex::ZERO`] to
/// the identity [`Complex::ONE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    /// The real part, the cosine of the angle for a unit orientation.
    pub re: f64,
    /// The imaginary part, the sine of the angle for a unit orientation.
    pub im: f64,
}

impl Complex {
    /// The identity rotation.
    pub const ONE: Complex = Complex::new(1.0, 0.0);

    /// The zero complex number; a degenerate orientation.
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    /// The imaginary unit, a quarter turn counter-clockwise.
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Create a complex number from its parts.
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// The unit rotation by `angle`.
    #[inline]
    pub fn from_angle(angle: Angle) -> Complex {
        let (sin, cos) = angle.sin_cos();
        Complex::new(cos, sin)
    }

    /// The complex number with the given magnitude and argument in radians.
    #[inline]
    pub fn from_polar(magnitude: f64, radians: f64) -> Complex {
        let (sin, cos) = radians.sin_cos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    /// Interpret a vector as the complex number `x + y·i`.
    #[inline(always)]
    pub const fn from_vec2(v: Vec2) -> Complex {
        Complex::new(v.x, v.y)
    }

    /// The vector `(re, im)`.
    #[inline(always)]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.re, self.im)
    }

    /// The magnitude.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The squared magnitude.
    #[inline]
    pub fn abs2(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The argument, in `(-π, π]`.
    ///
    /// The argument of [`Complex::ZERO`] is zero.
    #[inline]
    pub fn angle(self) -> Angle {
        Angle::from_radians(self.im.atan2(self.re))
    }

    /// The complex conjugate; for a unit orientation, the inverse rotation.
    #[inline]
    #[must_use]
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Scale to unit magnitude.
    ///
    /// This produces `NaN` values when the magnitude is `0`.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Complex {
        let magnitude = self.abs();
        Complex::new(self.re / magnitude, self.im / magnitude)
    }

    /// Scale to unit magnitude, falling back to [`Complex::ONE`] when there
    /// is no direction to keep.
    #[inline]
    #[must_use]
    pub fn calibrated(self) -> Complex {
        let magnitude = self.abs();
        if magnitude == 0.0 || !magnitude.is_finite() {
            Complex::ONE
        } else {
            Complex::new(self.re / magnitude, self.im / magnitude)
        }
    }

    /// Rotate (and scale) `v` by this complex number.
    #[inline]
    pub fn rotate(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.re * v.x - self.im * v.y,
            self.im * v.x + self.re * v.y,
        )
    }

    /// Interpolate towards `to` along the shorter arc.
    ///
    /// The argument moves by `t` times the signed angle from `self` to `to`,
    /// taken in `(-π, π]`, so opposite orientations turn counter-clockwise.
    /// The magnitude is interpolated linearly.
    #[inline]
    #[must_use]
    pub fn slerp(self, to: Complex, t: f64) -> Complex {
        let start = self.angle();
        let delta = (to.angle() - start).normalized();
        Complex::from_polar(
            lerp(self.abs(), to.abs(), t),
            (start + delta * t).radians(),
        )
    }

    /// Is this complex number finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Is this complex number NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<Angle> for Complex {
    #[inline]
    fn from(angle: Angle) -> Complex {
        Complex::from_angle(angle)
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// Compose two rotations.
    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, other: Complex) {
        *self = *self * other;
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: f64) -> Complex {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: f64) -> Complex {
        Complex::new(self.re / other, self.im / other)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.re, state);
        hash_f64(self.im, state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.re, formatter)?;
        if self.im.is_sign_negative() {
            write!(formatter, "-")?;
            fmt::Display::fmt(&-self.im, formatter)?;
        } else {
            write!(formatter, "+")?;
            fmt::Display::fmt(&self.im, formatter)?;
        }
        write!(formatter, "i")
    }
}
