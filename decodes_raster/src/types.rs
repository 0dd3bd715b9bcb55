// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for rasters: dimensions, options, colors, and rays.

use decodes_bounds::Interval;
use kurbo::{Point, Vec2};

/// An `(x, y)` cell address into a raster.
pub type Address = (usize, usize);

/// Pixel resolution of a raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelDim {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl PixelDim {
    /// Create a resolution of `width` columns by `height` rows.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub const fn count(&self) -> usize {
        self.width * self.height
    }
}

impl From<(usize, usize)> for PixelDim {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

/// An interval's endpoints read as `(width, height)`, truncated toward zero.
impl From<Interval> for PixelDim {
    fn from(ival: Interval) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Pixel counts are whole numbers; fractional parts are dropped."
        )]
        let (width, height) = (ival.a as usize, ival.b as usize);
        Self::new(width, height)
    }
}

bitflags::bitflags! {
    /// Addressing behavior of a raster.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RasterOptions: u8 {
        /// Diagonal cells count as neighbors.
        const INCLUDE_CORNERS = 0b0000_0001;
        /// Neighbor lookups wrap around the edges.
        const WRAP            = 0b0000_0010;
    }
}

impl RasterOptions {
    /// Defaults for the field types: wrapping, without diagonals.
    pub const FIELD: Self = Self::WRAP;
}

/// An RGB color with normalized channels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red, in `[0, 1]`.
    pub r: f64,
    /// Green, in `[0, 1]`.
    pub g: f64,
    /// Blue, in `[0, 1]`.
    pub b: f64,
}

impl Default for Color {
    /// Mid gray.
    fn default() -> Self {
        Self::gray(0.5)
    }
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::gray(0.0);
    /// White.
    pub const WHITE: Self = Self::gray(1.0);

    /// Create a color from channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A gray with all channels at `v`.
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Linear blend: `t == 0` gives `c0`, `t == 1` gives `c1`. `t` is not clamped.
    pub fn interpolate(c0: Self, c1: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| (1.0 - t) * a + t * b;
        Self::new(mix(c0.r, c1.r), mix(c0.g, c1.g), mix(c0.b, c1.b))
    }

    /// Channels quantized to bytes, clamping out-of-range values.
    pub fn to_rgb8(&self) -> [u8; 3] {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Channels are clamped to [0, 255] before the cast."
        )]
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// A positioned vector: a sample point and the vector stored there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Where the vector is anchored.
    pub origin: Point,
    /// The vector.
    pub dir: Vec2,
}

impl Ray {
    /// Create a ray.
    pub const fn new(origin: Point, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    /// The point at `origin + dir * t`.
    pub fn eval(&self, t: f64) -> Point {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_dim_from_interval_truncates() {
        assert_eq!(PixelDim::from(Interval::new(20.7, 3.2)), PixelDim::new(20, 3));
        assert_eq!(PixelDim::from((4, 5)).count(), 20);
    }

    #[test]
    fn color_blend_and_quantize() {
        let mid = Color::interpolate(Color::BLACK, Color::WHITE, 0.25);
        assert_eq!(mid, Color::gray(0.25));
        assert_eq!(Color::new(1.0, 0.5, -1.0).to_rgb8(), [255, 127, 0]);
        assert_eq!(Color::default(), Color::gray(0.5));
    }

    #[test]
    fn field_options_wrap() {
        assert!(RasterOptions::FIELD.contains(RasterOptions::WRAP));
        assert!(!RasterOptions::FIELD.contains(RasterOptions::INCLUDE_CORNERS));
        assert!(RasterOptions::default().is_empty());
    }

    #[test]
    fn ray_eval() {
        let r = Ray::new(Point::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        assert_eq!(r.eval(0.5), Point::new(2.0, 1.0));
    }
}
