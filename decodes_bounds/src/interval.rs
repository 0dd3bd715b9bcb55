// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directed 1D intervals: evaluation, deviation, subdivision, and remapping.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Div, Sub};

use rand::Rng;

use crate::error::GeometryError;

/// Tolerance used when nudging encompassing intervals outward.
pub const EPSILON: f64 = 1.0e-10;

/// A directed numeric range from `a` to `b`.
///
/// The endpoints are unordered: `a > b` is legal and encodes direction. Use
/// [`Interval::order`] for an ascending view.
///
/// Equality is exact on both endpoints. Use [`Interval::approx_eq`] when
/// comparing computed intervals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// Start of the interval.
    pub a: f64,
    /// End of the interval.
    pub b: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Create an interval from `a` to `b`.
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// The interval `[0, 2π]`.
    pub const fn twopi() -> Self {
        Self::new(0.0, core::f64::consts::TAU)
    }

    /// The interval `[0, π]`.
    pub const fn pi() -> Self {
        Self::new(0.0, core::f64::consts::PI)
    }

    /// The smallest ascending interval holding every value, or `None` if empty.
    pub fn encompass<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut it = values.into_iter();
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self::new(lo, hi))
    }

    /// Like [`Interval::encompass`], widened by [`EPSILON`] on both ends.
    pub fn encompass_nudged<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        Self::encompass(values).map(|ival| Self::new(ival.a - EPSILON, ival.b + EPSILON))
    }

    /// The endpoints as `[a, b]`.
    pub const fn list(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// True when `a < b`.
    pub fn is_ordered(&self) -> bool {
        self.a < self.b
    }

    /// Unsigned length.
    pub fn length(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Signed delta, `b - a`.
    pub fn delta(&self) -> f64 {
        self.b - self.a
    }

    /// The value halfway between `a` and `b`.
    pub fn mid(&self) -> f64 {
        self.eval(0.5)
    }

    /// A copy with `a <= b`.
    pub fn order(&self) -> Self {
        if self.is_ordered() {
            *self
        } else {
            self.invert()
        }
    }

    /// A copy with the endpoints swapped.
    pub const fn invert(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Whether `x` lies within the ordered interval, endpoints included.
    pub fn contains(&self, x: f64) -> bool {
        let ival = self.order();
        ival.a <= x && ival.b >= x
    }

    /// Compare both endpoints within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.a - other.a).abs() <= tol && (self.b - other.b).abs() <= tol
    }

    /// Evaluate the parameter `t`: `a + (b - a) * t`.
    pub fn eval(&self, t: f64) -> f64 {
        self.delta() * t + self.a
    }

    /// Evaluate `t` and clamp the result with [`Interval::limit_val`].
    pub fn eval_limited(&self, t: f64) -> f64 {
        self.limit_val(self.eval(t))
    }

    /// Clamp `n` against the raw endpoints: below `a` yields `a`, above `b` yields `b`.
    ///
    /// The comparison does not order the interval first; order it yourself when
    /// the interval may be reversed.
    pub fn limit_val(&self, n: f64) -> f64 {
        if n < self.a {
            return self.a;
        }
        if n > self.b {
            return self.b;
        }
        n
    }

    /// The parameter of `x` within this interval; the inverse of [`Interval::eval`].
    ///
    /// ```
    /// use decodes_bounds::Interval;
    ///
    /// let ival = Interval::new(10.0, 20.0);
    /// assert_eq!(ival.deval(12.0).unwrap(), 0.2);
    /// assert_eq!(ival.deval(25.0).unwrap(), 1.5);
    /// assert!(Interval::new(3.0, 3.0).deval(3.0).is_err());
    /// ```
    pub fn deval(&self, x: f64) -> Result<f64, GeometryError> {
        let delta = self.delta();
        if delta == 0.0 {
            return Err(GeometryError::DegenerateInterval { a: self.a });
        }
        Ok((x - self.a) / delta)
    }

    /// `divs` evenly spaced values starting at `a`, stepping by `delta / divs`.
    ///
    /// `b` is only reached when `include_last` adds one more sample at the same step.
    pub fn divide(&self, divs: usize, include_last: bool) -> Vec<f64> {
        if divs == 0 {
            return Vec::new();
        }
        let step = self.delta() / divs as f64;
        let count = if include_last { divs + 1 } else { divs };
        (0..count).map(|n| self.a + step * n as f64).collect()
    }

    /// `divs` contiguous subintervals traversing from `a` toward `b`.
    ///
    /// The last subinterval ends exactly on `b` so the pieces tile the interval.
    pub fn subinterval(&self, divs: usize) -> Vec<Self> {
        if divs == 0 {
            return Vec::new();
        }
        let step = self.delta() / divs as f64;
        (0..divs)
            .map(|n| {
                let start = self.a + step * n as f64;
                let end = if n + 1 == divs {
                    self.b
                } else {
                    self.a + step * (n + 1) as f64
                };
                Self::new(start, end)
            })
            .collect()
    }

    /// `divs` randomly sized, contiguous, ascending subintervals of the ordered interval.
    pub fn rand_interval<R: Rng + ?Sized>(&self, divs: usize, rng: &mut R) -> Vec<Self> {
        if divs == 0 {
            return Vec::new();
        }
        let mut cuts = Vec::with_capacity(divs + 1);
        cuts.push(self.a);
        cuts.push(self.b);
        for _ in 1..divs {
            cuts.push(self.eval(rng.random::<f64>()));
        }
        cuts.sort_by(f64::total_cmp);
        cuts.windows(2).map(|w| Self::new(w[0], w[1])).collect()
    }

    /// Translate `val` from its position in `source` to the same position in `target`.
    ///
    /// ```
    /// use decodes_bounds::Interval;
    ///
    /// let px = Interval::remap(0.5, Interval::UNIT, Interval::new(0.0, 10.0)).unwrap();
    /// assert_eq!(px, 5.0);
    /// ```
    pub fn remap(val: f64, source: Self, target: Self) -> Result<f64, GeometryError> {
        Ok(target.eval(source.deval(val)?))
    }

    /// [`Interval::remap`] with the result clamped to `target`.
    pub fn remap_limited(val: f64, source: Self, target: Self) -> Result<f64, GeometryError> {
        Ok(target.eval_limited(source.deval(val)?))
    }

    /// Remap `val` from this interval into `target`.
    pub fn remap_to(&self, val: f64, target: Self) -> Result<f64, GeometryError> {
        Self::remap(val, *self, target)
    }
}

impl Add<f64> for Interval {
    type Output = Self;

    fn add(self, val: f64) -> Self {
        Self::new(self.a + val, self.b + val)
    }
}

impl Sub<f64> for Interval {
    type Output = Self;

    fn sub(self, val: f64) -> Self {
        Self::new(self.a - val, self.b - val)
    }
}

/// Dividing an interval by a count yields its subintervals.
impl Div<usize> for Interval {
    type Output = Vec<Self>;

    fn div(self, divs: usize) -> Vec<Self> {
        self.subinterval(divs)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ival[{},{}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn eval_and_deval_scenario() {
        let ival = Interval::new(10.0, 20.0);
        assert_eq!(ival.deval(12.0).unwrap(), 0.2);
        assert_eq!(ival.eval(0.2), 12.0);
        assert_eq!(ival.eval(1.5), 25.0);
    }

    #[test]
    fn deval_inverts_eval() {
        let ivals = [
            Interval::new(10.0, 20.0),
            Interval::new(5.0, 2.0),
            Interval::new(-3.5, 7.25),
            Interval::twopi(),
        ];
        for ival in ivals {
            for i in 0..=20 {
                let t = f64::from(i) / 20.0;
                let back = ival.deval(ival.eval(t)).unwrap();
                assert!((back - t).abs() < 1e-12, "{ival}: {t} came back as {back}");
            }
        }
    }

    #[test]
    fn degenerate_deval_is_an_error() {
        let err = Interval::new(4.0, 4.0).deval(4.0).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateInterval { a: 4.0 });
        assert!(Interval::remap(1.0, Interval::new(2.0, 2.0), Interval::UNIT).is_err());
    }

    #[test]
    fn derived_values() {
        let ival = Interval::new(5.0, 2.0);
        assert_eq!(ival.length(), 3.0);
        assert_eq!(ival.delta(), -3.0);
        assert_eq!(ival.mid(), 3.5);
        assert!(!ival.is_ordered());
        assert_eq!(ival.order(), Interval::new(2.0, 5.0));
        assert_eq!(ival.invert(), Interval::new(2.0, 5.0));
        assert!(ival.contains(2.0) && ival.contains(5.0) && ival.contains(3.0));
        assert!(!ival.contains(5.5));
        assert_eq!(Interval::default(), Interval::UNIT);
    }

    #[test]
    fn divide_excludes_end_unless_asked() {
        let ival = Interval::new(0.0, 1.0);
        assert_eq!(ival.divide(4, false), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(ival.divide(4, true), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(ival.divide(0, true).is_empty());
    }

    #[test]
    fn subintervals_tile_the_parent() {
        let ival = Interval::new(5.0, 2.0);
        assert_eq!(ival.subinterval(2), vec![Interval::new(5.0, 3.5), Interval::new(3.5, 2.0)]);

        let ival = Interval::new(-1.0, 2.3);
        let subs = ival / 7;
        assert_eq!(subs.len(), 7);
        assert_eq!(subs[0].a, ival.a);
        assert_eq!(subs[6].b, ival.b);
        for (i, pair) in subs.windows(2).enumerate() {
            assert_eq!(pair[0].b, pair[1].a, "gap after subinterval {i}");
        }
        for (i, sub) in subs.iter().enumerate() {
            assert_eq!(sub.a, ival.a + ival.delta() / 7.0 * i as f64);
        }
    }

    #[test]
    fn limit_val_uses_raw_endpoints() {
        let ival = Interval::new(10.0, 20.0);
        assert_eq!(ival.eval_limited(1.5), 20.0);
        assert_eq!(ival.eval_limited(-0.5), 10.0);
        assert_eq!(ival.eval_limited(0.5), 15.0);
        // A reversed interval reports its start for anything below `a`.
        assert_eq!(Interval::new(20.0, 10.0).limit_val(15.0), 20.0);
    }

    #[test]
    fn remap_between_spaces() {
        let v = Interval::remap(0.5, Interval::UNIT, Interval::new(0.0, 10.0)).unwrap();
        assert_eq!(v, 5.0);
        let v = Interval::new(0.0, 100.0).remap_to(25.0, Interval::new(-1.0, 1.0)).unwrap();
        assert_eq!(v, -0.5);
        let v = Interval::remap_limited(150.0, Interval::new(0.0, 100.0), Interval::UNIT).unwrap();
        assert_eq!(v, 1.0);
    }

    #[test]
    fn arithmetic_shifts() {
        let ival = Interval::new(1.0, 3.0);
        assert_eq!(ival + 2.0, Interval::new(3.0, 5.0));
        assert_eq!(ival - 1.0, Interval::new(0.0, 2.0));
    }

    #[test]
    fn equality_is_exact() {
        let computed = Interval::new(0.1 + 0.2, 1.0);
        assert_ne!(computed, Interval::new(0.3, 1.0));
        assert!(computed.approx_eq(&Interval::new(0.3, 1.0), 1e-12));
    }

    #[test]
    fn encompass_values() {
        let ival = Interval::encompass([3.0, -1.0, 7.5, 2.0]).unwrap();
        assert_eq!(ival, Interval::new(-1.0, 7.5));
        let nudged = Interval::encompass_nudged([1.0]).unwrap();
        assert_eq!(nudged, Interval::new(1.0 - EPSILON, 1.0 + EPSILON));
        assert!(Interval::encompass(core::iter::empty()).is_none());
    }

    #[test]
    fn random_subintervals_are_contiguous() {
        let mut rng = SmallRng::seed_from_u64(7);
        let ival = Interval::new(0.0, 10.0);
        let subs = ival.rand_interval(5, &mut rng);
        assert_eq!(subs.len(), 5);
        assert_eq!(subs[0].a, 0.0);
        assert_eq!(subs[4].b, 10.0);
        for pair in subs.windows(2) {
            assert_eq!(pair[0].b, pair[1].a, "random subintervals must be contiguous");
            assert!(pair[0].a <= pair[0].b, "random subintervals ascend");
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(alloc::format!("{}", Interval::new(1.0, 2.5)), "ival[1,2.5]");
    }
}
