// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D shapes with closed-form geometric queries.
//!
//! The planar library provides circles, annuli, rays, squares and triangles as
//! small `Copy` value types, along with the vocabulary types they are built
//! from: [`Point`], [`Vec2`], [`Angle`], [`Complex`] orientations, [`Line`]
//! segments and [`Rect`] bounding boxes.
//!
//! Every query is a direct formula; nothing iterates or allocates. Boundaries
//! count as part of a shape, so touching shapes intersect and a point on an
//! edge is contained.
//!
//! # Examples
//!
//! Containment and intersection:
//! ```
//! use planar::{Circle, Contains, Intersects, Point, Ray, Vec2};
//!
//! let circle = Circle::from_center_radius((-4.0, 4.0), 4.0).unwrap();
//! assert!(circle.contains(Point::new(-4.0, 7.5)));
//! assert!(!circle.contains(Point::new(0.5, 4.0)));
//!
//! let miss = Ray::new((-8.1, 0.0), Vec2::new(0.0, 1.0)).unwrap();
//! let hit = Ray::new((-8.1, 0.0), Vec2::new(0.17365, 0.98481)).unwrap();
//! assert!(!circle.intersects(miss));
//! assert!(circle.intersects(hit));
//! ```
//!
//! Interpolation takes the shorter way around for orientations:
//! ```
//! use planar::{Angle, Complex, Interpolate, Square};
//!
//! let from = Square::new((0.0, 0.0), Complex::from_angle(Angle::from_degrees(90.0)), 2.0).unwrap();
//! let to = Square::new((4.0, 0.0), Complex::from_angle(Angle::from_degrees(244.0)), 4.0).unwrap();
//! let mid = from.interpolated(&to, 0.5);
//! assert_eq!(mid.side_length(), 3.0);
//! assert!((mid.orientation().angle().degrees() - 167.0).abs() < 1e-9);
//! ```
//!
//! Sizes are validated when a shape is built or changed:
//! ```
//! use planar::{Circle, ShapeError};
//!
//! let err = Circle::from_center_radius((0.0, 0.0), -1.0).unwrap_err();
//! assert_eq!(err, ShapeError::NegativeSize { field: "radius", value: -1.0 });
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate never allocates.
//!
//! The `mint` feature adds conversions between [`Point`]/[`Vec2`] and the
//! [`mint`] interoperability types.
//!
//! [`libm`]: https://docs.rs/libm
//! [`mint`]: https://docs.rs/mint

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("planar requires either the `std` or `libm` feature");

mod angle;
mod annulus;
mod circle;
pub mod common;
mod complex;
mod error;
mod line;
mod point;
mod ray;
mod rect;
mod shape;
mod square;
mod triangle;
mod vec2;

pub use crate::angle::*;
pub use crate::annulus::*;
pub use crate::circle::*;
pub use crate::complex::*;
pub use crate::error::*;
pub use crate::line::*;
pub use crate::point::*;
pub use crate::ray::*;
pub use crate::rect::*;
pub use crate::shape::*;
pub use crate::square::*;
pub use crate::triangle::*;
pub use crate::vec2::*;
