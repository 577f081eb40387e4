use core::ops::{Add, Mul, Sub};

use crate::FloatScalar;
use super::{
    check_tolerance, default_tolerance, Bernoulli, Compare, ContinuousDistribution, Distribution,
    Parameter, StatsError,
};

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Bernoulli, Compare, ContinuousDistribution, Uniform};
///
/// let u = Uniform::new(0.0_f64, 1.0).unwrap();
/// assert!((u.cdf(0.25) - 0.25).abs() < 1e-14);
/// assert_eq!(u.less_than(Uniform::new(2.0, 3.0).unwrap()), Bernoulli::new(1.0).unwrap());
/// assert!((u.less_than(u).p() - 0.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform<T> {
    a: T,
    b: T,
    tolerance: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Create a uniform distribution on [a, b]. Requires `a < b`, both finite.
    pub fn new(a: T, b: T) -> Result<Self, StatsError> {
        Self::with_tolerance(a, b, default_tolerance())
    }

    /// As [`new`](Self::new) with an explicit equality tolerance.
    pub fn with_tolerance(a: T, b: T, tolerance: T) -> Result<Self, StatsError> {
        let tolerance = check_tolerance(tolerance)?;
        if !a.is_finite() || !b.is_finite() {
            return Err(StatsError::InvalidParameter("bounds must be finite"));
        }
        if a >= b {
            return Err(StatsError::InvalidParameter("a must be less than b"));
        }
        if !(b - a).is_finite() {
            return Err(StatsError::InvalidParameter("interval width must be finite"));
        }
        Ok(Self { a, b, tolerance })
    }

    /// Lower bound.
    pub fn a(&self) -> T {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> T {
        self.b
    }

    fn width(&self) -> T {
        self.b - self.a
    }
}

/// P(X < Y) for X ~ U(a1, b1), Y ~ U(a2, b2) with a1 ≤ a2.
///
/// The probability is the area of {x < y} in the rectangle, divided by its
/// area. Over [a1, a2) Y is certainly above X; over the overlap
/// [a2, u], u = min(b1, b2), the conditional probability (b2 − x)/(b2 − a2)
/// falls linearly, so its integral is the overlap length times the mean of
/// the two end values. Only differences of bounds appear, never squares.
fn first_below_second<T: FloatScalar>(a1: T, b1: T, a2: T, b2: T) -> T {
    if b1 <= a2 {
        return T::one();
    }
    let upper = b1.min(b2);
    let width = b2 - a2;
    let overlap = (upper - a2) / width * ((b2 - upper) + width) / T::two();
    ((a2 - a1) + overlap) / (b1 - a1)
}

impl<T: FloatScalar> Distribution<T> for Uniform<T> {
    const NAME: &'static str = "Uniform";

    fn parameters(&self) -> alloc::vec::Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Value(self.a), Parameter::Value(self.b)]
    }

    fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Uniform<T> {
    fn pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            self.width().recip()
        } else {
            T::zero()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= self.a {
            T::zero()
        } else if x >= self.b {
            T::one()
        } else {
            (x - self.a) / self.width()
        }
    }

    fn mean(&self) -> T {
        (self.a + self.b) / T::two()
    }

    fn variance(&self) -> T {
        let w = self.width();
        w * w / T::lit(12.0)
    }
}

impl<T: FloatScalar> Compare<T, T> for Uniform<T> {
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        self.probability_below(rhs)
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        self.probability_below(rhs)
    }
}

impl<T: FloatScalar> Compare<T> for Uniform<T> {
    fn less_than(&self, rhs: Uniform<T>) -> Bernoulli<T> {
        let p = if self.a <= rhs.a {
            first_below_second(self.a, self.b, rhs.a, rhs.b)
        } else {
            T::one() - first_below_second(rhs.a, rhs.b, self.a, self.b)
        };
        Bernoulli::from_probability(p)
    }

    fn less_equal(&self, rhs: Uniform<T>) -> Bernoulli<T> {
        self.less_than(rhs)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

/// Shifting can collapse a narrow interval onto one point through rounding,
/// or overflow, so the bounds are validated again.
impl<T: FloatScalar> Add<T> for Uniform<T> {
    type Output = Result<Self, StatsError>;

    fn add(self, rhs: T) -> Self::Output {
        Self::with_tolerance(self.a + rhs, self.b + rhs, self.tolerance)
    }
}

impl<T: FloatScalar> Sub<T> for Uniform<T> {
    type Output = Result<Self, StatsError>;

    fn sub(self, rhs: T) -> Self::Output {
        Self::with_tolerance(self.a - rhs, self.b - rhs, self.tolerance)
    }
}

/// Scaling by a negative factor swaps the bounds; scaling by zero would
/// collapse the interval and is rejected.
impl<T: FloatScalar> Mul<T> for Uniform<T> {
    type Output = Result<Self, StatsError>;

    fn mul(self, rhs: T) -> Self::Output {
        let (x, y) = (self.a * rhs, self.b * rhs);
        Self::with_tolerance(x.min(y), x.max(y), self.tolerance)
    }
}

impl_scalar_lhs!(Add, add, Uniform, [f32, f64]);
impl_scalar_lhs!(Mul, mul, Uniform, [f32, f64]);
