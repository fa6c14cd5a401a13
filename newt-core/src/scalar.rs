//! The numeric contract shared by the plain and interval solvers.
//!
//! The Newton engine is written once, generic over [`Scalar`]. The two
//! implementations here (`f64` and [`Interval`](crate::Interval)) differ in
//! how they order pivot candidates, what counts as a singular divisor, and
//! how a convergence step is measured, but the elimination algebra is
//! identical for both.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Interval;

/// Scale below which the convergence test switches from a relative step
/// to an absolute step.
///
/// Tunable, not load-bearing: any value small enough that dividing by a
/// larger scale is numerically meaningful works.
pub const CONVERGENCE_NOISE_FLOOR: f64 = 1e-15;

/// A numeric value the Newton-elimination engine can solve over.
///
/// Beyond ordinary field arithmetic, the engine needs three judgment
/// calls from its scalars: how big a pivot candidate is, whether a
/// divisor is (or could be) zero, and whether one iterate is close
/// enough to the next. Those are the only places the plain and interval
/// solvers behave differently.
pub trait Scalar:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// The absolute value, or its enclosure over all points of an interval.
    ///
    /// Used only to compare pivot candidates by size, never to branch on
    /// the sign of a value.
    #[must_use]
    fn magnitude(self) -> Self;

    /// Strict "certainly greater than" over magnitudes.
    ///
    /// For intervals this holds only when every point of `self` exceeds
    /// every point of `other`, which is what makes pivot selection
    /// conservative under uncertainty.
    #[must_use]
    fn exceeds(self, other: Self) -> bool;

    /// Whether dividing by this value is the singular case.
    ///
    /// Plain scalars are singular only at exactly zero; an interval is
    /// singular whenever its closed bounds straddle zero, i.e. the value
    /// *could* be zero given the input uncertainty.
    #[must_use]
    fn is_singular(self) -> bool;

    /// The magnitude used to scale the relative convergence test.
    #[must_use]
    fn convergence_scale(self) -> f64;

    /// Whether the step from `self` to `next` is within `eps`.
    ///
    /// Relative to the larger of the two scales when that scale is above
    /// [`CONVERGENCE_NOISE_FLOOR`], absolute below it.
    #[must_use]
    fn step_converged(self, next: Self, eps: Self) -> bool;

    /// Whether this value is usable as a solver tolerance.
    #[must_use]
    fn valid_epsilon(self) -> bool;
}

/// Elementary functions lifted over a scalar.
///
/// Lets one generic equation-system definition serve both the plain and
/// the interval instantiation. Interval implementations return enclosures
/// of the exact function over the interval. The `From<f64>` bound is how
/// generic systems spell their literal coefficients.
pub trait Elementary: Sized + From<f64> {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;
    #[must_use]
    fn exp(self) -> Self;
    #[must_use]
    fn squared(self) -> Self;
    #[must_use]
    fn pi() -> Self;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn magnitude(self) -> Self {
        self.abs()
    }

    fn exceeds(self, other: Self) -> bool {
        self > other
    }

    #[allow(clippy::float_cmp)]
    fn is_singular(self) -> bool {
        self == 0.0
    }

    fn convergence_scale(self) -> f64 {
        self.abs()
    }

    fn step_converged(self, next: Self, eps: Self) -> bool {
        let scale = self.convergence_scale().max(next.convergence_scale());
        let step = (self - next).abs();
        if scale < CONVERGENCE_NOISE_FLOOR {
            step <= eps
        } else {
            step / scale < eps
        }
    }

    fn valid_epsilon(self) -> bool {
        self.is_finite() && self >= 0.0
    }
}

impl Elementary for f64 {
    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn squared(self) -> Self {
        self * self
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }
}

impl Scalar for Interval {
    const ZERO: Self = Interval::ZERO;
    const ONE: Self = Interval::ONE;

    fn magnitude(self) -> Self {
        self.abs()
    }

    fn exceeds(self, other: Self) -> bool {
        self.inf() > other.sup()
    }

    fn is_singular(self) -> bool {
        self.contains(0.0)
    }

    fn convergence_scale(self) -> f64 {
        self.inf().abs().max(self.sup().abs())
    }

    fn step_converged(self, next: Self, eps: Self) -> bool {
        let scale = self.convergence_scale().max(next.convergence_scale());
        let step_inf = (self.inf() - next.inf()).abs();
        let step_sup = (self.sup() - next.sup()).abs();
        if scale < CONVERGENCE_NOISE_FLOOR {
            step_inf <= eps.inf() && step_sup <= eps.sup()
        } else {
            step_inf / scale <= eps.inf() && step_sup / scale <= eps.sup()
        }
    }

    fn valid_epsilon(self) -> bool {
        self.inf() >= 0.0 && self.sup().is_finite()
    }
}

impl Elementary for Interval {
    fn sin(self) -> Self {
        Interval::sin(self)
    }

    fn cos(self) -> Self {
        Interval::cos(self)
    }

    fn exp(self) -> Self {
        Interval::exp(self)
    }

    fn squared(self) -> Self {
        Interval::squared(self)
    }

    fn pi() -> Self {
        Interval::point(std::f64::consts::PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_singularity_is_exact_zero() {
        assert!(0.0_f64.is_singular());
        assert!(!1e-300_f64.is_singular());
        assert!(!(-1e-300_f64).is_singular());
    }

    #[test]
    fn interval_singularity_is_zero_straddle() {
        assert!(Interval::new(-0.1, 0.1).unwrap().is_singular());
        assert!(Interval::ZERO.is_singular());
        assert!(Interval::new(0.0, 1.0).unwrap().is_singular());
        assert!(!Interval::new(0.5, 1.0).unwrap().is_singular());
        assert!(!Interval::new(-2.0, -1.0).unwrap().is_singular());
    }

    #[test]
    fn interval_exceeds_is_certain_ordering() {
        let small = Interval::new(0.0, 1.0).unwrap();
        let large = Interval::new(2.0, 3.0).unwrap();
        let overlapping = Interval::new(0.5, 2.5).unwrap();

        assert!(large.exceeds(small));
        assert!(!small.exceeds(large));
        // Overlap means neither certainly exceeds the other.
        assert!(!overlapping.exceeds(large));
        assert!(!large.exceeds(overlapping));
    }

    #[test]
    fn plain_step_is_relative_above_noise_floor() {
        // |100 - 101| / 101 is just under 1e-2.
        assert!(100.0_f64.step_converged(101.0, 1e-1));
        assert!(!100.0_f64.step_converged(101.0, 1e-3));
    }

    #[test]
    fn plain_step_is_absolute_near_zero() {
        assert!(0.0_f64.step_converged(0.0, 1e-6));
        assert!(1e-20_f64.step_converged(5e-20, 1e-19));
        assert!(!1e-20_f64.step_converged(5e-20, 1e-21));
    }

    #[test]
    fn interval_step_checks_both_endpoints() {
        let eps = Interval::point(1e-3);
        let a = Interval::new(1.0, 2.0).unwrap();
        let close = Interval::new(1.0001, 2.0001).unwrap();
        let far = Interval::new(1.0, 2.5).unwrap();

        assert!(a.step_converged(close, eps));
        assert!(!a.step_converged(far, eps));
    }

    #[test]
    fn epsilon_validity() {
        assert!(1e-6_f64.valid_epsilon());
        assert!(0.0_f64.valid_epsilon());
        assert!(!(-1e-6_f64).valid_epsilon());
        assert!(!f64::NAN.valid_epsilon());

        assert!(Interval::point(1e-6).valid_epsilon());
        assert!(!Interval::new(-1e-6, 1e-6).unwrap().valid_epsilon());
    }
}
