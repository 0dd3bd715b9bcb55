// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decodes Raster: fixed-size grids of values with wrap-aware neighborhoods.
//!
//! - [`Raster`]: a generic row-major grid addressed by `(x, y)`, with
//!   bounds-checked access and neighbor queries shaped by [`RasterOptions`].
//! - [`ValueField`] and [`BoolField`]: scalar and boolean rasters that render
//!   to an [`Image`].
//! - [`VecField`]: a raster of `kurbo::Vec2` laid over a rectangle of the
//!   plane, with nearest-cell lookup and inverse-distance interpolation.
//!
//! Geometry comes from [`decodes_bounds`]; sample locations are anything that
//! implements [`decodes_bounds::Position`], including `kurbo::Point`.
//!
//! # Example
//!
//! ```rust
//! use decodes_raster::{BoolField, RasterOptions};
//!
//! // A blinker on a wrapping board.
//! let options = RasterOptions::FIELD | RasterOptions::INCLUDE_CORNERS;
//! let mut board = BoolField::new_with_options((5, 5), false, options).unwrap();
//! for y in 1..4 {
//!     board.set(2, y, true).unwrap();
//! }
//! let live_around = |x, y| {
//!     board.neighbors_of(x, y).unwrap().into_iter().filter(|&&v| v).count()
//! };
//! assert_eq!(live_around(2, 2), 2);
//! assert_eq!(live_around(1, 2), 3);
//! ```
//!
//! ## Errors
//!
//! Out-of-range addresses, zero-sized rasters, and failed interpolation
//! return [`RasterError`]. Interval failures from [`decodes_bounds`] convert
//! into [`RasterError::Geometry`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod field;
pub mod raster;
pub mod types;
pub mod vec_field;

pub use error::RasterError;
pub use field::{BoolField, Image, ValueField};
pub use raster::Raster;
pub use types::{Address, Color, PixelDim, RasterOptions, Ray};
pub use vec_field::VecField;
