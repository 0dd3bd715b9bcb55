// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned 2D and 3D regions built from per-axis intervals.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::GeometryError;
use crate::interval::Interval;
use crate::position::{Point3, Position};

/// An axis-aligned rectangle (2D) or box (3D).
///
/// Dimensionality is the presence of [`Bounds::ival_z`]. Containment and
/// overlap read each axis through its ordered interval, but subdivision and
/// corner enumeration follow the stored direction; keep the intervals ordered
/// for predictable results.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Extent along x.
    pub ival_x: Interval,
    /// Extent along y.
    pub ival_y: Interval,
    /// Extent along z, present only for 3D bounds.
    pub ival_z: Option<Interval>,
}

/// Named-option configuration for [`Bounds`].
///
/// Supply either `center` with `dim_x` and `dim_y` (plus optional `dim_z`), or
/// `ival_x` and `ival_y` (plus optional `ival_z`). Anything else is rejected by
/// [`BoundsSpec::build`].
///
/// ```
/// use decodes_bounds::{BoundsSpec, Interval, Point3};
///
/// let b = BoundsSpec {
///     center: Some(Point3::new_2d(0.0, 0.0)),
///     dim_x: Some(2.0),
///     dim_y: Some(4.0),
///     ..Default::default()
/// }
/// .build()
/// .unwrap();
/// assert_eq!(b.ival_y, Interval::new(-2.0, 2.0));
///
/// let mixed = BoundsSpec {
///     center: Some(Point3::ORIGIN),
///     ival_x: Some(Interval::UNIT),
///     ..Default::default()
/// };
/// assert!(mixed.build().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundsSpec {
    /// Center point, used with the `dim_*` fields.
    pub center: Option<Point3>,
    /// Full extent along x around `center`.
    pub dim_x: Option<f64>,
    /// Full extent along y around `center`.
    pub dim_y: Option<f64>,
    /// Full extent along z around `center`; makes the bounds 3D.
    pub dim_z: Option<f64>,
    /// Explicit x interval.
    pub ival_x: Option<Interval>,
    /// Explicit y interval.
    pub ival_y: Option<Interval>,
    /// Explicit z interval; makes the bounds 3D.
    pub ival_z: Option<Interval>,
}

impl BoundsSpec {
    /// Build bounds from exactly one complete parameter set.
    pub fn build(&self) -> Result<Bounds, GeometryError> {
        let any_center = self.center.is_some()
            || self.dim_x.is_some()
            || self.dim_y.is_some()
            || self.dim_z.is_some();
        let any_ival = self.ival_x.is_some() || self.ival_y.is_some() || self.ival_z.is_some();
        match (any_center, any_ival) {
            (true, false) => match (self.center, self.dim_x, self.dim_y) {
                (Some(center), Some(dim_x), Some(dim_y)) => Ok(match self.dim_z {
                    Some(dim_z) => Bounds::from_center_3d(&center, dim_x, dim_y, dim_z),
                    None => Bounds::from_center(&center, dim_x, dim_y),
                }),
                _ => Err(GeometryError::IncompleteBounds),
            },
            (false, true) => match (self.ival_x, self.ival_y) {
                (Some(ival_x), Some(ival_y)) => Ok(Bounds {
                    ival_x,
                    ival_y,
                    ival_z: self.ival_z,
                }),
                _ => Err(GeometryError::IncompleteBounds),
            },
            _ => Err(GeometryError::IncompleteBounds),
        }
    }
}

impl TryFrom<BoundsSpec> for Bounds {
    type Error = GeometryError;

    fn try_from(spec: BoundsSpec) -> Result<Self, Self::Error> {
        spec.build()
    }
}

fn centered(c: f64, dim: f64) -> Interval {
    let half = (dim / 2.0).abs();
    Interval::new(c - half, c + half)
}

impl Bounds {
    /// 2D bounds from explicit intervals.
    pub const fn from_intervals(ival_x: Interval, ival_y: Interval) -> Self {
        Self {
            ival_x,
            ival_y,
            ival_z: None,
        }
    }

    /// 3D bounds from explicit intervals.
    pub const fn from_intervals_3d(ival_x: Interval, ival_y: Interval, ival_z: Interval) -> Self {
        Self {
            ival_x,
            ival_y,
            ival_z: Some(ival_z),
        }
    }

    /// 2D bounds centered on `center`. Dimensions are taken as absolute values.
    pub fn from_center<P: Position>(center: &P, dim_x: f64, dim_y: f64) -> Self {
        Self::from_intervals(centered(center.x(), dim_x), centered(center.y(), dim_y))
    }

    /// 3D bounds centered on `center`. Dimensions are taken as absolute values.
    pub fn from_center_3d<P: Position>(center: &P, dim_x: f64, dim_y: f64, dim_z: f64) -> Self {
        Self::from_intervals_3d(
            centered(center.x(), dim_x),
            centered(center.y(), dim_y),
            centered(center.z(), dim_z),
        )
    }

    /// The 2D unit square.
    pub const fn unit_square() -> Self {
        Self::from_intervals(Interval::UNIT, Interval::UNIT)
    }

    /// The 3D unit cube.
    pub const fn unit_cube() -> Self {
        Self::from_intervals_3d(Interval::UNIT, Interval::UNIT, Interval::UNIT)
    }

    /// Smallest bounds holding every point, or `None` if `points` is empty.
    ///
    /// With `three_d` the z extent is kept; otherwise the result is planar.
    pub fn encompass<P: Position>(points: &[P], three_d: bool) -> Option<Self> {
        let ival_x = Interval::encompass(points.iter().map(Position::x))?;
        let ival_y = Interval::encompass(points.iter().map(Position::y))?;
        if three_d {
            let ival_z = Interval::encompass(points.iter().map(Position::z))?;
            Some(Self::from_intervals_3d(ival_x, ival_y, ival_z))
        } else {
            Some(Self::from_intervals(ival_x, ival_y))
        }
    }

    /// True when there is no z interval.
    pub fn is_2d(&self) -> bool {
        self.ival_z.is_none()
    }

    /// True when a z interval is present.
    pub fn is_3d(&self) -> bool {
        self.ival_z.is_some()
    }

    /// The same region without its z interval.
    pub fn to_2d(&self) -> Self {
        Self::from_intervals(self.ival_x, self.ival_y)
    }

    /// Center point. Planar bounds have `z == 0`.
    pub fn center(&self) -> Point3 {
        Point3::new(
            self.ival_x.mid(),
            self.ival_y.mid(),
            self.ival_z.map_or(0.0, |z| z.mid()),
        )
    }

    /// Signed extent along x.
    pub fn dim_x(&self) -> f64 {
        self.ival_x.delta()
    }

    /// Signed extent along y.
    pub fn dim_y(&self) -> f64 {
        self.ival_y.delta()
    }

    /// Signed extent along z; `0.0` for planar bounds.
    pub fn dim_z(&self) -> f64 {
        self.ival_z.map_or(0.0, |z| z.delta())
    }

    /// Corners, counter-clockwise per z level starting at `(a, a)`.
    ///
    /// Planar bounds yield four corners at `z == 0`. 3D bounds yield the bottom
    /// level (`ival_z.a`) followed by the top level (`ival_z.b`).
    pub fn corners(&self) -> Vec<Point3> {
        let (x, y) = (self.ival_x, self.ival_y);
        let level = |z: f64| {
            [
                Point3::new(x.a, y.a, z),
                Point3::new(x.b, y.a, z),
                Point3::new(x.b, y.b, z),
                Point3::new(x.a, y.b, z),
            ]
        };
        match self.ival_z {
            None => level(0.0).to_vec(),
            Some(z) => {
                let mut out = Vec::with_capacity(8);
                out.extend(level(z.a));
                out.extend(level(z.b));
                out
            }
        }
    }

    /// Closed loop around the bottom level: the first corner is repeated at the end.
    pub fn outline(&self) -> Vec<Point3> {
        let mut pts = self.corners();
        pts.truncate(4);
        pts.push(pts[0]);
        pts
    }

    /// Whether `p` lies inside, boundary included, on every present axis.
    pub fn contains<P: Position + ?Sized>(&self, p: &P) -> bool {
        if !self.ival_x.contains(p.x()) || !self.ival_y.contains(p.y()) {
            return false;
        }
        match self.ival_z {
            Some(z) => z.contains(p.z()),
            None => true,
        }
    }

    /// Whether any corner of either region lies inside the other.
    ///
    /// This is a cheap prefilter, not an exact test: two regions crossing like a
    /// plus sign overlap without either holding a corner of the other, and this
    /// reports `false` for them.
    pub fn overlaps(&self, other: &Self) -> bool {
        other.corners().iter().any(|c| self.contains(c))
            || self.corners().iter().any(|c| other.contains(c))
    }

    /// Whether the closed regions share any point, per-axis on the ordered intervals.
    ///
    /// Unlike [`Bounds::overlaps`] this is exact. The z axis is compared only
    /// when both regions are 3D.
    pub fn intersects(&self, other: &Self) -> bool {
        let touch = |p: Interval, q: Interval| {
            let (p, q) = (p.order(), q.order());
            p.a <= q.b && q.a <= p.b
        };
        if !touch(self.ival_x, other.ival_x) || !touch(self.ival_y, other.ival_y) {
            return false;
        }
        match (self.ival_z, other.ival_z) {
            (Some(a), Some(b)) => touch(a, b),
            _ => true,
        }
    }

    /// The point at normalized coordinates `(u, v, w)`; `w` is ignored for planar bounds.
    pub fn eval(&self, u: f64, v: f64, w: f64) -> Point3 {
        Point3::new(
            self.ival_x.eval(u),
            self.ival_y.eval(v),
            self.ival_z.map_or(0.0, |z| z.eval(w)),
        )
    }

    /// Split every axis into `divs` equal parts.
    ///
    /// Returns `divs^2` (2D) or `divs^3` (3D) bounds with x varying fastest,
    /// then y, then z: starting bottom left, left to right, then bottom to top.
    pub fn subbounds(&self, divs: usize) -> Vec<Self> {
        let subs_x = self.ival_x.subinterval(divs);
        let subs_y = self.ival_y.subinterval(divs);
        let levels: Vec<Option<Interval>> = match self.ival_z {
            Some(z) => z.subinterval(divs).into_iter().map(Some).collect(),
            None => vec![None],
        };
        let mut out = Vec::with_capacity(subs_x.len() * subs_y.len() * levels.len());
        for ival_z in levels {
            for &ival_y in &subs_y {
                for &ival_x in &subs_x {
                    out.push(Self {
                        ival_x,
                        ival_y,
                        ival_z,
                    });
                }
            }
        }
        out
    }

    /// The closest point to `p` within these bounds.
    ///
    /// Contained points come back unchanged; others are clamped per axis onto
    /// the ordered intervals. Planar bounds put clamped points on `z = 0`.
    pub fn near_pt<P: Position>(&self, p: &P) -> Point3 {
        let pt = Point3::from_position(p);
        if self.contains(&pt) {
            return pt;
        }
        let clamp = |ival: Interval, v: f64| {
            let ival = ival.order();
            v.clamp(ival.a, ival.b)
        };
        Point3::new(
            clamp(self.ival_x, pt.x),
            clamp(self.ival_y, pt.y),
            self.ival_z.map_or(0.0, |z| clamp(z, pt.z)),
        )
    }
}
