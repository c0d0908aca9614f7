// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angles.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::common::hash_f64;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A planar angle.
///
/// The value is stored in radians; degrees are converted on the way in and
/// out. Positive angles turn counter-clockwise in a y-up space.
#[derive(Clone, Copy, Default, Debug, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// A right angle, 90°.
    pub const QUARTER_TURN: Angle = Angle(FRAC_PI_2);

    /// A straight angle, 180°.
    pub const HALF_TURN: Angle = Angle(PI);

    /// A full turn, 360°.
    pub const FULL_TURN: Angle = Angle(TAU);

    /// An angle of `radians` radians.
    #[inline(always)]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle(radians)
    }

    /// An angle of `degrees` degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle(degrees.to_radians())
    }

    /// The angle in radians.
    #[inline(always)]
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// The same direction, expressed in the range `(-π, π]`.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Angle {
        let r = self.0 % TAU;
        if r > PI {
            Angle(r - TAU)
        } else if r <= -PI {
            Angle(r + TAU)
        } else {
            Angle(r)
        }
    }

    /// Sine and cosine of the angle, in that order.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }

    /// Is this angle finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle(self.0 + other.0)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, other: Angle) {
        self.0 += other.0;
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle(self.0 - other.0)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, other: Angle) {
        self.0 -= other.0;
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn mul(self, other: f64) -> Angle {
        Angle(self.0 * other)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn div(self, other: f64) -> Angle {
        Angle(self.0 / other)
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.0, state);
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.degrees(), formatter)?;
        write!(formatter, "°")
    }
}

#[cfg(test)]
mod tests {
    use crate::Angle;
    use core::f64::consts::PI;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-12, "{x} != {y}");
    }

    #[test]
    fn degree_radian_conversion() {
        assert_approx_eq(Angle::from_degrees(180.0).radians(), PI);
        assert_approx_eq(Angle::from_radians(PI / 2.0).degrees(), 90.0);
        assert_approx_eq(Angle::QUARTER_TURN.degrees(), 90.0);
    }

    #[test]
    fn normalized_range() {
        assert_approx_eq(Angle::from_degrees(270.0).normalized().degrees(), -90.0);
        assert_approx_eq(Angle::from_degrees(-270.0).normalized().degrees(), 90.0);
        assert_approx_eq(Angle::from_degrees(720.0 + 45.0).normalized().degrees(), 45.0);
        assert_approx_eq(Angle::from_radians(-PI).normalized().radians(), PI);
        assert_approx_eq(Angle::HALF_TURN.normalized().radians(), PI);
    }

    #[test]
    fn display_in_degrees() {
        assert_eq!(format!("{:.1}", Angle::from_degrees(90.0)), "90.0°");
    }
}
