// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for raster addressing and field sampling.

use decodes_bounds::GeometryError;

/// Errors that can occur while building or addressing a raster.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RasterError {
    /// A raster needs at least one column and one row.
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// An address fell outside the raster.
    #[error("address ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfRange {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Raster width.
        width: usize,
        /// Raster height.
        height: usize,
    },

    /// A sample sat at zero distance from a cell center it is not equal to.
    #[error("sample point ({x}, {y}) is coincident with a cell center")]
    CoincidentSample {
        /// Sample x coordinate.
        x: f64,
        /// Sample y coordinate.
        y: f64,
    },

    /// Interval arithmetic failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
