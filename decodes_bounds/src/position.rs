// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point input contract and a plain 3D point value type.

use core::fmt;
use core::ops::{Add, Sub};

/// Anything with numeric `x`, `y` and (optionally) `z` coordinates.
///
/// [`Bounds`](crate::Bounds) and [`QuadTree`](crate::QuadTree) only read
/// coordinates through this trait, so callers can index their own point types
/// without converting them first. Two-dimensional types leave `z` at its
/// default of `0.0`.
pub trait Position {
    /// The x coordinate.
    fn x(&self) -> f64;

    /// The y coordinate.
    fn y(&self) -> f64;

    /// The z coordinate. Planar types report `0.0`.
    fn z(&self) -> f64 {
        0.0
    }
}

impl<P: Position + ?Sized> Position for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }

    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }
}

impl Position for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Position for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }

    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
}

impl Position for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Position for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }

    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

#[cfg(feature = "kurbo")]
impl Position for kurbo::Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

/// Whether two positions have bitwise-equal coordinates on all three axes.
#[inline]
pub fn same_position<A: Position, B: Position>(a: &A, b: &B) -> bool {
    a.x() == b.x() && a.y() == b.y() && a.z() == b.z()
}

/// A point in 3D space. Planar points carry `z == 0.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a point from three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point on the xy plane.
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Copy the coordinates of any [`Position`].
    pub fn from_position<P: Position>(p: &P) -> Self {
        Self::new(p.x(), p.y(), p.z())
    }

    /// Squared euclidean distance to another point.
    pub fn distance_squared(self, other: Self) -> f64 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }
}

impl Position for Point3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(f64, f64)> for Point3 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new_2d(x, y)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pt[{},{},{}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_and_arrays_read_as_positions() {
        assert_eq!(Point3::from_position(&(1.0, 2.0)), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(Point3::from_position(&[1.0, 2.0, 3.0]), Point3::new(1.0, 2.0, 3.0));
        assert!(same_position(&(4.0, 5.0), &Point3::new_2d(4.0, 5.0)));
        assert!(!same_position(&(4.0, 5.0, 1.0), &Point3::new_2d(4.0, 5.0)));
    }

    #[test]
    fn point_arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Point3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Point3::new(0.5, 1.5, 2.5));
        assert_eq!(Point3::ORIGIN.distance_squared(Point3::new(3.0, 4.0, 0.0)), 25.0);
    }
}
