// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector fields laid over a rectangular region of the plane.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use decodes_bounds::{Interval, Position};
use kurbo::{Point, Size, Vec2};

use crate::error::RasterError;
use crate::raster::Raster;
use crate::types::{Address, PixelDim, RasterOptions, Ray};

/// A raster of [`Vec2`] values, each anchored at the center of its cell.
///
/// The field covers a `spatial_dim` sized rectangle centered on
/// `spatial_origin`. Cell centers are computed once at construction and stay
/// in step with the pixel grid: the center of `(x, y)` is
/// `base_pts()[y * width + x]`.
///
/// Sample locations are read through [`Position`], so tuples, [`Point`], and
/// the bounds crate's own point type are all accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct VecField {
    raster: Raster<Vec2>,
    ival_x: Interval,
    ival_y: Interval,
    base_pts: Vec<Point>,
}

/// Clamp a fractional index into `[0, n - 1]` and return its floor and ceiling.
fn floor_ceil(v: f64, n: usize) -> (usize, usize) {
    let v = v.clamp(0.0, (n - 1) as f64);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "v is clamped to [0, n - 1], so truncation is the floor."
    )]
    let lo = v as usize;
    let hi = if (lo as f64) < v { lo + 1 } else { lo };
    (lo, hi)
}

/// Fractional cell index of unit coordinate `u` along an axis of `n` cells.
///
/// Cell centers sit at `(i + 0.5) / n` in unit space; those map exactly onto `i`.
fn cell_coord(u: f64, n: usize) -> Result<f64, RasterError> {
    if n == 1 {
        return Ok(0.0);
    }
    let half = 0.5 / n as f64;
    let source = Interval::new(half, 1.0 - half);
    let target = Interval::new(0.0, (n - 1) as f64);
    Ok(Interval::remap(u, source, target)?)
}

impl VecField {
    /// Create a field of `dim` cells covering `spatial_dim` around `spatial_origin`.
    ///
    /// Every cell starts with `initial`. The field wraps, as with
    /// [`RasterOptions::FIELD`].
    pub fn new(
        dim: impl Into<PixelDim>,
        spatial_origin: Point,
        spatial_dim: impl Into<Size>,
        initial: Vec2,
    ) -> Result<Self, RasterError> {
        Self::new_with_options(dim, spatial_origin, spatial_dim, initial, RasterOptions::FIELD)
    }

    /// [`VecField::new`] with explicit addressing options.
    pub fn new_with_options(
        dim: impl Into<PixelDim>,
        spatial_origin: Point,
        spatial_dim: impl Into<Size>,
        initial: Vec2,
        options: RasterOptions,
    ) -> Result<Self, RasterError> {
        let raster = Raster::new(dim, initial, options)?;
        let size = spatial_dim.into();
        let ival_x = Interval::new(
            spatial_origin.x - size.width / 2.0,
            spatial_origin.x + size.width / 2.0,
        );
        let ival_y = Interval::new(
            spatial_origin.y - size.height / 2.0,
            spatial_origin.y + size.height / 2.0,
        );
        let cols = ival_x.subinterval(raster.width());
        let mut base_pts = Vec::with_capacity(raster.px_count());
        for row in ival_y.subinterval(raster.height()) {
            for col in &cols {
                base_pts.push(Point::new(col.mid(), row.mid()));
            }
        }
        Ok(Self {
            raster,
            ival_x,
            ival_y,
            base_pts,
        })
    }

    /// Spatial extent along x.
    pub fn spatial_ival_x(&self) -> Interval {
        self.ival_x
    }

    /// Spatial extent along y.
    pub fn spatial_ival_y(&self) -> Interval {
        self.ival_y
    }

    /// Cell centers in row-major order.
    pub fn base_pts(&self) -> &[Point] {
        &self.base_pts
    }

    /// Center point of the cell at `(x, y)`.
    pub fn get_cpt(&self, x: usize, y: usize) -> Result<Point, RasterError> {
        let i = self.raster.index_of(x, y)?;
        Ok(self.base_pts[i])
    }

    /// Each vector paired with its cell center, in row-major order.
    pub fn to_rays(&self) -> Vec<Ray> {
        self.raster
            .cells()
            .iter()
            .zip(&self.base_pts)
            .map(|(&dir, &origin)| Ray::new(origin, dir))
            .collect()
    }

    /// Address of the cell containing `p`.
    ///
    /// Locations outside the field clamp to the nearest edge cell.
    pub fn address_near(&self, p: impl Position) -> Result<Address, RasterError> {
        let (w, h) = (self.raster.width(), self.raster.height());
        let u = self.ival_x.deval(p.x())?.clamp(0.0, 1.0);
        let v = self.ival_y.deval(p.y())?.clamp(0.0, 1.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Unit coordinates are clamped, so the scaled values are in [0, size]."
        )]
        let (x, y) = ((u * w as f64) as usize, (v * h as f64) as usize);
        Ok((x.min(w - 1), y.min(h - 1)))
    }

    /// Addresses of the up to four cells whose centers surround `p`.
    ///
    /// Order is `(floor, floor)`, `(ceil, floor)`, `(ceil, ceil)`,
    /// `(floor, ceil)` with repeats dropped, so a sample exactly on a cell
    /// center, or clamped at a corner, yields a single address.
    pub fn addresses_near(&self, p: impl Position) -> Result<Vec<Address>, RasterError> {
        let (w, h) = (self.raster.width(), self.raster.height());
        let fx = cell_coord(self.ival_x.deval(p.x())?, w)?;
        let fy = cell_coord(self.ival_y.deval(p.y())?, h)?;
        let (x_flr, x_cei) = floor_ceil(fx, w);
        let (y_flr, y_cei) = floor_ceil(fy, h);
        let mut out: Vec<Address> = Vec::with_capacity(4);
        for addr in [(x_flr, y_flr), (x_cei, y_flr), (x_cei, y_cei), (x_flr, y_cei)] {
            if !out.contains(&addr) {
                out.push(addr);
            }
        }
        Ok(out)
    }

    /// Vector of the cell containing `p`.
    pub fn vec_near(&self, p: impl Position) -> Result<Vec2, RasterError> {
        let (x, y) = self.address_near(p)?;
        self.raster.get(x, y).copied()
    }

    /// Center of the cell containing `p`.
    pub fn cpt_near(&self, p: impl Position) -> Result<Point, RasterError> {
        let (x, y) = self.address_near(p)?;
        self.get_cpt(x, y)
    }

    /// Vectors of the cells returned by [`VecField::addresses_near`].
    pub fn vecs_near(&self, p: impl Position) -> Result<Vec<Vec2>, RasterError> {
        self.addresses_near(p)?
            .into_iter()
            .map(|(x, y)| self.raster.get(x, y).copied())
            .collect()
    }

    /// Centers of the cells returned by [`VecField::addresses_near`].
    pub fn cpts_near(&self, p: impl Position) -> Result<Vec<Point>, RasterError> {
        self.addresses_near(p)?
            .into_iter()
            .map(|(x, y)| self.get_cpt(x, y))
            .collect()
    }

    /// Inverse squared distance weighted average of the vectors around `p`.
    ///
    /// A sample sitting exactly on a cell center returns that cell's vector.
    /// A zero distance to a center the sample does not equal (underflow) is
    /// reported as [`RasterError::CoincidentSample`].
    pub fn avg_vec_near(&self, p: impl Position) -> Result<Vec2, RasterError> {
        let sample = Point::new(p.x(), p.y());
        let addrs = self.addresses_near(sample)?;
        let mut near = Vec::with_capacity(addrs.len());
        for (x, y) in addrs {
            let cpt = self.get_cpt(x, y)?;
            let vec = *self.raster.get(x, y)?;
            near.push((cpt, vec, sample.distance_squared(cpt)));
        }

        if let Some(&(cpt, vec, _)) = near.iter().find(|(_, _, d2)| *d2 == 0.0) {
            if cpt == sample {
                log::trace!("sample ({}, {}) on a cell center", sample.x, sample.y);
                return Ok(vec);
            }
            return Err(RasterError::CoincidentSample {
                x: sample.x,
                y: sample.y,
            });
        }

        let total: f64 = near.iter().map(|(_, _, d2)| 1.0 / d2).sum();
        Ok(near
            .iter()
            .fold(Vec2::ZERO, |acc, (_, vec, d2)| acc + *vec * (1.0 / d2 / total)))
    }

    /// Overwrite every cell with a swirl pattern parameterized by `p`.
    ///
    /// Cell `(x, y)` becomes `(y * (sin py + cos px), x * (sin px - cos py))`,
    /// so magnitudes grow with the address away from the origin cell.
    pub fn spin_pt(&mut self, p: impl Position) {
        // `from_angle` yields `(cos, sin)`.
        let (ax, ay) = (Vec2::from_angle(p.x()), Vec2::from_angle(p.y()));
        self.raster.populate_with(|(x, y)| {
            Vec2::new(y as f64 * (ay.y + ax.x), x as f64 * (ax.y - ay.x))
        });
    }

    /// The underlying raster.
    pub fn into_raster(self) -> Raster<Vec2> {
        self.raster
    }
}

impl Deref for VecField {
    type Target = Raster<Vec2>;

    fn deref(&self) -> &Self::Target {
        &self.raster
    }
}

impl DerefMut for VecField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.raster
    }
}
