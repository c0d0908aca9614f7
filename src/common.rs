// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use core::hash::{Hash, Hasher};

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("planar requires either the `std` or `libm` feature")
            })+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("planar requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs/fabsf;
    fn atan2(self, other: Self) -> Self => atan2/atan2f;
    fn hypot(self, other: Self) -> Self => hypot/hypotf;
    fn sin_cos(self) -> (Self, Self) => sincos/sincosf;
    fn sqrt(self) -> Self => sqrt/sqrtf;
}

/// Relative tolerance used where a query has to compare a computed point
/// against an input point.
pub const RELATIVE_EPSILON: f64 = 1e-10;

/// An epsilon appropriate for comparing values of the magnitude of `num`.
#[inline]
pub fn epsilon_for_value(num: f64) -> f64 {
    (num.abs() * RELATIVE_EPSILON).max(f64::EPSILON)
}

/// Whether two floats are equal up to [`RELATIVE_EPSILON`] of the larger one.
///
/// Infinities only compare equal to themselves.
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= epsilon_for_value(a.abs().max(b.abs()))
}

/// Feed an `f64` to a hasher so that values comparing equal hash equally.
///
/// Both zeroes hash alike, and so does every NaN payload.
#[inline]
pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let bits = if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    };
    bits.hash(state);
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + t * (to - from)
}
