// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar and boolean fields, and their conversion to images.

use core::ops::{Deref, DerefMut};

use decodes_bounds::Interval;

use crate::error::RasterError;
use crate::raster::Raster;
use crate::types::{Color, PixelDim, RasterOptions};

/// A raster of colors.
pub type Image = Raster<Color>;

impl Raster<Color> {
    /// An image with every pixel set to `color`, without wrapping or diagonals.
    pub fn filled(dim: impl Into<PixelDim>, color: Color) -> Result<Self, RasterError> {
        Self::new(dim, color, RasterOptions::empty())
    }
}

/// A raster of `f64` values.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueField(Raster<f64>);

impl ValueField {
    /// Create a wrapping field with every cell set to `initial`.
    ///
    /// Uses [`RasterOptions::FIELD`].
    pub fn new(dim: impl Into<PixelDim>, initial: f64) -> Result<Self, RasterError> {
        Self::new_with_options(dim, initial, RasterOptions::FIELD)
    }

    /// Create a field with explicit addressing options.
    pub fn new_with_options(
        dim: impl Into<PixelDim>,
        initial: f64,
        options: RasterOptions,
    ) -> Result<Self, RasterError> {
        Raster::new(dim, initial, options).map(Self)
    }

    /// The smallest value in the field.
    pub fn min_value(&self) -> f64 {
        self.0.cells().iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The largest value in the field.
    pub fn max_value(&self) -> f64 {
        self.0.cells().iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Render the field by blending `min_color` toward `max_color`.
    ///
    /// Each value is placed in `value_range` with [`Interval::deval`], which
    /// defaults to `[min_value, max_value]`. A zero-width range renders every
    /// pixel as `min_color`. Values outside the range extrapolate.
    pub fn to_image(
        &self,
        min_color: Color,
        max_color: Color,
        value_range: Option<Interval>,
    ) -> Image {
        let range =
            value_range.unwrap_or_else(|| Interval::new(self.min_value(), self.max_value()));
        self.0
            .map(|&v| {
                let t = range.deval(v).unwrap_or(0.0);
                Color::interpolate(min_color, max_color, t)
            })
            .with_options(RasterOptions::empty())
    }

    /// The underlying raster.
    pub fn into_raster(self) -> Raster<f64> {
        self.0
    }
}

impl From<Raster<f64>> for ValueField {
    fn from(raster: Raster<f64>) -> Self {
        Self(raster)
    }
}

impl Deref for ValueField {
    type Target = Raster<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ValueField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// A raster of booleans.
#[derive(Clone, Debug, PartialEq)]
pub struct BoolField(Raster<bool>);

impl BoolField {
    /// Create a wrapping field with every cell set to `initial`.
    pub fn new(dim: impl Into<PixelDim>, initial: bool) -> Result<Self, RasterError> {
        Self::new_with_options(dim, initial, RasterOptions::FIELD)
    }

    /// Create a field with explicit addressing options.
    pub fn new_with_options(
        dim: impl Into<PixelDim>,
        initial: bool,
        options: RasterOptions,
    ) -> Result<Self, RasterError> {
        Raster::new(dim, initial, options).map(Self)
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.0.cells().iter().filter(|&&v| v).count()
    }

    /// Render `false` cells as `false_color` and `true` cells as `true_color`.
    pub fn to_image(&self, false_color: Color, true_color: Color) -> Image {
        self.0
            .map(|&v| if v { true_color } else { false_color })
            .with_options(RasterOptions::empty())
    }

    /// The underlying raster.
    pub fn into_raster(self) -> Raster<bool> {
        self.0
    }
}

impl From<Raster<bool>> for BoolField {
    fn from(raster: Raster<bool>) -> Self {
        Self(raster)
    }
}

impl Deref for BoolField {
    type Target = Raster<bool>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for BoolField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
