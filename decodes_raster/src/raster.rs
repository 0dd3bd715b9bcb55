// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size, row-major cell buffers with wrap-aware neighborhoods.

use alloc::vec::Vec;

use crate::error::RasterError;
use crate::types::{Address, PixelDim, RasterOptions};

/// A `width * height` grid of cells addressed by `(x, y)`.
///
/// Cells are stored row-major: `(x, y)` lives at index `y * width + x`. The
/// buffer is allocated once and never resized.
#[derive(Clone, PartialEq)]
pub struct Raster<T> {
    dim: PixelDim,
    options: RasterOptions,
    cells: Vec<T>,
}

impl<T> core::fmt::Debug for Raster<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.dim.width)
            .field("height", &self.dim.height)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn check_dim(dim: PixelDim) -> Result<PixelDim, RasterError> {
    if dim.width == 0 || dim.height == 0 {
        return Err(RasterError::InvalidDimensions {
            width: dim.width,
            height: dim.height,
        });
    }
    Ok(dim)
}

impl<T: Clone> Raster<T> {
    /// Create a raster with every cell set to `fill`.
    pub fn new(
        dim: impl Into<PixelDim>,
        fill: T,
        options: RasterOptions,
    ) -> Result<Self, RasterError> {
        let dim = check_dim(dim.into())?;
        Ok(Self {
            dim,
            options,
            cells: alloc::vec![fill; dim.count()],
        })
    }

    /// Set every cell to a clone of `value`.
    ///
    /// Each cell owns its copy, so later per-cell mutation never leaks into
    /// other cells.
    pub fn populate(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Raster<T> {
    /// Create a raster whose cells are produced from their addresses.
    pub fn from_fn(
        dim: impl Into<PixelDim>,
        options: RasterOptions,
        mut f: impl FnMut(Address) -> T,
    ) -> Result<Self, RasterError> {
        let dim = check_dim(dim.into())?;
        let mut cells = Vec::with_capacity(dim.count());
        for y in 0..dim.height {
            for x in 0..dim.width {
                cells.push(f((x, y)));
            }
        }
        Ok(Self {
            dim,
            options,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dim.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dim.height
    }

    /// Pixel resolution.
    pub fn dim(&self) -> PixelDim {
        self.dim
    }

    /// Total number of cells.
    pub fn px_count(&self) -> usize {
        self.cells.len()
    }

    /// Addressing options.
    pub fn options(&self) -> RasterOptions {
        self.options
    }

    /// The same raster with its addressing options replaced.
    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether diagonal cells count as neighbors.
    pub fn include_corners(&self) -> bool {
        self.options.contains(RasterOptions::INCLUDE_CORNERS)
    }

    /// Whether neighbor lookups wrap around the edges.
    pub fn wraps(&self) -> bool {
        self.options.contains(RasterOptions::WRAP)
    }

    /// Buffer index of `(x, y)`.
    pub fn index_of(&self, x: usize, y: usize) -> Result<usize, RasterError> {
        if x >= self.dim.width || y >= self.dim.height {
            return Err(RasterError::OutOfRange {
                x,
                y,
                width: self.dim.width,
                height: self.dim.height,
            });
        }
        Ok(y * self.dim.width + x)
    }

    /// The cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T, RasterError> {
        let i = self.index_of(x, y)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T, RasterError> {
        let i = self.index_of(x, y)?;
        Ok(&mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), RasterError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Replace every cell with a value computed from its address.
    pub fn populate_with(&mut self, mut f: impl FnMut(Address) -> T) {
        let width = self.dim.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f((i % width, i / width));
        }
    }

    /// Every address, column by column: x outer, y inner.
    pub fn addresses(&self) -> Vec<Address> {
        let mut out = Vec::with_capacity(self.px_count());
        for x in 0..self.dim.width {
            for y in 0..self.dim.height {
                out.push((x, y));
            }
        }
        out
    }

    /// Cells in buffer (row-major) order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable cells in buffer (row-major) order.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// A raster of the same shape and options with each cell mapped through `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Raster<U> {
        Raster {
            dim: self.dim,
            options: self.options,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Addresses of the neighbors of `(x, y)`.
    ///
    /// The eight surrounding offsets are visited with the x offset outer and
    /// the y offset inner, each running `-1, 0, 1`. Orthogonal neighbors are
    /// always kept; diagonals only with [`RasterOptions::INCLUDE_CORNERS`].
    /// With [`RasterOptions::WRAP`] offsets wrap modulo the raster size, so a
    /// raster narrower than three cells can report the same cell twice. Without
    /// it, offsets past an edge are left out.
    pub fn neighbor_addresses(&self, x: usize, y: usize) -> Result<Vec<Address>, RasterError> {
        self.index_of(x, y)?;
        let (w, h) = (self.dim.width as isize, self.dim.height as isize);
        let wrap = self.wraps();
        let corners = self.include_corners();
        let mut out = Vec::with_capacity(8);
        for di in -1_isize..=1 {
            for dj in -1_isize..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                if di != 0 && dj != 0 && !corners {
                    continue;
                }
                let (nx, ny) = (x as isize + di, y as isize + dj);
                if wrap {
                    out.push((nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize));
                } else if (0..w).contains(&nx) && (0..h).contains(&ny) {
                    out.push((nx as usize, ny as usize));
                }
            }
        }
        Ok(out)
    }

    /// Values of the neighbors of `(x, y)`, in [`Raster::neighbor_addresses`] order.
    pub fn neighbors_of(&self, x: usize, y: usize) -> Result<Vec<&T>, RasterError> {
        let width = self.dim.width;
        Ok(self
            .neighbor_addresses(x, y)?
            .into_iter()
            .map(|(nx, ny)| &self.cells[ny * width + nx])
            .collect())
    }
}
