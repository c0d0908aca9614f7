// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use crate::Vec2;

/// The error returned when a shape is constructed or updated with fields
/// that violate its invariants.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// A size field (a radius or a side length) is negative.
    #[error("`{field}` must not be negative, got {value}")]
    NegativeSize {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A size field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An annulus inner radius exceeds its outer radius.
    #[error("inner radius {inner} exceeds outer radius {outer}")]
    InvertedRadii {
        /// The rejected inner radius.
        inner: f64,
        /// The outer radius it was checked against.
        outer: f64,
    },
    /// A ray direction has zero length or is not finite.
    #[error("ray direction {0} has no usable length")]
    DegenerateDirection(Vec2),
}

/// Validate a size field, returning it unchanged when usable.
pub(crate) fn check_size(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if !value.is_finite() {
        Err(ShapeError::NonFinite { field, value })
    } else if value < 0.0 {
        Err(ShapeError::NegativeSize { field, value })
    } else {
        Ok(value)
    }
}
