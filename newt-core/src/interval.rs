//! Closed real intervals with set arithmetic and elementary enclosures.
//!
//! An [`Interval`] represents every real number between its two endpoints,
//! inclusive. Arithmetic returns intervals guaranteed to contain every
//! pointwise result of the operands; elementary functions return
//! enclosures of the exact function over the whole interval.
//!
//! Endpoint computations use ordinary `f64` rounding. Outward (directed)
//! rounding of each endpoint is out of scope for this crate, so enclosures
//! are exact up to the last unit of `f64` precision rather than formally
//! verified against it.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use thiserror::Error;

/// A closed interval `[inf, sup]` over `f64`.
///
/// The type guarantees `inf <= sup` and that neither endpoint is NaN.
/// Infinite endpoints are allowed; they arise from dividing by an
/// interval that straddles zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

impl Interval {
    /// The degenerate interval `[0, 0]`.
    pub const ZERO: Self = Self { inf: 0.0, sup: 0.0 };

    /// The degenerate interval `[1, 1]`.
    pub const ONE: Self = Self { inf: 1.0, sup: 1.0 };

    /// The whole real line `[-inf, +inf]`.
    pub const ENTIRE: Self = Self {
        inf: f64::NEG_INFINITY,
        sup: f64::INFINITY,
    };

    /// Creates an interval from two endpoints.
    ///
    /// Reversed endpoints are normalized into `inf <= sup` order.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotANumber`] if either endpoint is NaN.
    pub fn new(a: f64, b: f64) -> Result<Self, IntervalError> {
        if a.is_nan() || b.is_nan() {
            return Err(IntervalError::NotANumber);
        }
        if a <= b {
            Ok(Self { inf: a, sup: b })
        } else {
            Ok(Self { inf: b, sup: a })
        }
    }

    /// Creates the degenerate interval `[value, value]`.
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self {
            inf: value,
            sup: value,
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn inf(self) -> f64 {
        self.inf
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn sup(self) -> f64 {
        self.sup
    }

    /// Returns the interval width `sup - inf`.
    #[must_use]
    pub fn width(self) -> f64 {
        self.sup - self.inf
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        0.5 * (self.inf + self.sup)
    }

    /// Returns true if `value` lies within the closed bounds.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.inf <= value && value <= self.sup
    }

    /// Returns true if `other` lies entirely within `self`.
    #[must_use]
    pub fn encloses(self, other: Self) -> bool {
        self.inf <= other.inf && other.sup <= self.sup
    }

    /// Returns the smallest interval containing both operands.
    #[must_use]
    pub fn hull(self, other: Self) -> Self {
        Self {
            inf: self.inf.min(other.inf),
            sup: self.sup.max(other.sup),
        }
    }

    /// The enclosure of `|x|` over the interval.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.inf >= 0.0 {
            self
        } else if self.sup <= 0.0 {
            -self
        } else {
            Self {
                inf: 0.0,
                sup: (-self.inf).max(self.sup),
            }
        }
    }

    /// The enclosure of `x^2` over the interval.
    ///
    /// Tighter than `self * self`, which loses the dependency between
    /// the two operands and can go negative.
    #[must_use]
    pub fn squared(self) -> Self {
        let a = self.abs();
        Self {
            inf: a.inf * a.inf,
            sup: a.sup * a.sup,
        }
    }

    /// The enclosure of `e^x` over the interval.
    #[must_use]
    pub fn exp(self) -> Self {
        Self {
            inf: self.inf.exp(),
            sup: self.sup.exp(),
        }
    }

    /// The enclosure of `cos(x)` over the interval.
    #[must_use]
    pub fn cos(self) -> Self {
        use std::f64::consts::{PI, TAU};

        if self.width() >= TAU {
            return Self {
                inf: -1.0,
                sup: 1.0,
            };
        }

        let a = self.inf.cos();
        let b = self.sup.cos();
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };

        // Cosine peaks at even multiples of pi and bottoms out at odd ones.
        if contains_multiple(self.inf, self.sup, TAU) {
            hi = 1.0;
        }
        if contains_multiple(self.inf - PI, self.sup - PI, TAU) {
            lo = -1.0;
        }

        Self { inf: lo, sup: hi }
    }

    /// The enclosure of `sin(x)` over the interval.
    #[must_use]
    pub fn sin(self) -> Self {
        let shifted = self - Self::point(std::f64::consts::FRAC_PI_2);
        shifted.cos()
    }
}

/// Returns true if `[lo, hi]` contains an integer multiple of `period`.
fn contains_multiple(lo: f64, hi: f64, period: f64) -> bool {
    (lo / period).ceil() <= (hi / period).floor()
}

impl From<f64> for Interval {
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` on f64 prints the shortest digit string that round-trips,
        // so both endpoints are rendered at full precision.
        write!(f, "[{:?}, {:?}]", self.inf, self.sup)
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            inf: self.inf + rhs.inf,
            sup: self.sup + rhs.sup,
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            inf: self.inf - rhs.sup,
            sup: self.sup - rhs.inf,
        }
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            inf: -self.sup,
            sup: -self.inf,
        }
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let p1 = self.inf * rhs.inf;
        let p2 = self.inf * rhs.sup;
        let p3 = self.sup * rhs.inf;
        let p4 = self.sup * rhs.sup;
        Self {
            inf: p1.min(p2).min(p3).min(p4),
            sup: p1.max(p2).max(p3).max(p4),
        }
    }
}

impl Div for Interval {
    type Output = Self;

    /// Set division `self * [1/rhs.sup, 1/rhs.inf]`.
    ///
    /// A divisor whose bounds straddle zero has no finite enclosure, so
    /// the result widens to [`Interval::ENTIRE`]. The solver never takes
    /// that path: pivot candidates are rejected as singular before any
    /// division happens.
    fn div(self, rhs: Self) -> Self {
        if rhs.contains(0.0) {
            return Self::ENTIRE;
        }
        self * Self {
            inf: 1.0 / rhs.sup,
            sup: 1.0 / rhs.inf,
        }
    }
}

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntervalError {
    /// An endpoint was NaN.
    #[error("interval endpoint is NaN")]
    NotANumber,
}
