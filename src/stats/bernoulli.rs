use crate::FloatScalar;
use super::{
    check_tolerance, default_tolerance, Compare, DiscreteDistribution, Distribution, Parameter,
    StatsError,
};

/// Bernoulli distribution with success probability p.
///
/// P(X = 1) = p, P(X = 0) = 1 − p. Every comparison between distributions
/// evaluates to a `Bernoulli`.
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Bernoulli, Compare, DiscreteDistribution};
///
/// let b = Bernoulli::new(0.3_f64).unwrap();
/// assert!((b.pmf(1.0) - 0.3).abs() < 1e-14);
/// assert!((b.variance() - 0.21).abs() < 1e-14);
/// assert_eq!(b.less_than(0.5), Bernoulli::new(0.7).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli<T> {
    p: T,
    tolerance: T,
}

impl<T: FloatScalar> Bernoulli<T> {
    /// Create a Bernoulli distribution with success probability `p`.
    ///
    /// Requires `0 ≤ p ≤ 1`. Values within the default tolerance of a
    /// boundary are snapped onto it.
    pub fn new(p: T) -> Result<Self, StatsError> {
        Self::with_tolerance(p, default_tolerance())
    }

    /// As [`new`](Self::new) with an explicit equality tolerance.
    pub fn with_tolerance(p: T, tolerance: T) -> Result<Self, StatsError> {
        let tolerance = check_tolerance(tolerance)?;
        let (zero, one) = (T::zero(), T::one());
        let p = if p < zero && zero - p <= tolerance {
            tracing::trace!(p = ?p, "snapping bernoulli probability to 0");
            zero
        } else if p > one && p - one <= tolerance {
            tracing::trace!(p = ?p, "snapping bernoulli probability to 1");
            one
        } else {
            p
        };
        if !(zero..=one).contains(&p) {
            return Err(StatsError::InvalidParameter("p must lie in [0, 1]"));
        }
        Ok(Self { p, tolerance })
    }

    /// Wrap a probability computed by one of the comparison algorithms.
    ///
    /// Rounding can push such results marginally outside `[0, 1]`, so they
    /// are clamped instead of validated. A NaN here is a bug in the caller.
    pub(crate) fn from_probability(p: T) -> Self {
        debug_assert!(!p.is_nan(), "comparison produced a NaN probability");
        Self {
            p: p.max(T::zero()).min(T::one()),
            tolerance: default_tolerance(),
        }
    }

    /// Probability of success.
    pub fn p(&self) -> T {
        self.p
    }

    /// The Bernoulli of the opposite outcome, 1 − p.
    pub fn complement(&self) -> Self {
        Self::from_probability(T::one() - self.p)
    }
}

impl<T: FloatScalar> Distribution<T> for Bernoulli<T> {
    const NAME: &'static str = "Bernoulli";

    fn parameters(&self) -> alloc::vec::Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Value(self.p)]
    }

    fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Bernoulli<T> {
    fn pmf(&self, x: T) -> T {
        if x == T::zero() {
            T::one() - self.p
        } else if x == T::one() {
            self.p
        } else {
            T::zero()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x < T::zero() {
            T::zero()
        } else if x < T::one() {
            T::one() - self.p
        } else {
            T::one()
        }
    }

    fn mean(&self) -> T {
        self.p
    }

    fn variance(&self) -> T {
        self.p * (T::one() - self.p)
    }
}

impl<T: FloatScalar> Compare<T, T> for Bernoulli<T> {
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        if rhs <= T::zero() {
            Self::from_probability(T::zero())
        } else if rhs > T::one() {
            Self::from_probability(T::one())
        } else {
            Self::from_probability(T::one() - self.p)
        }
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        Self::from_probability(self.cdf(rhs))
    }
}

impl<T: FloatScalar> Compare<T> for Bernoulli<T> {
    /// Self is 0 and other is 1.
    fn less_than(&self, rhs: Bernoulli<T>) -> Bernoulli<T> {
        Self::from_probability((T::one() - self.p) * rhs.p)
    }

    /// Self is 0, or both are 1.
    fn less_equal(&self, rhs: Bernoulli<T>) -> Bernoulli<T> {
        Self::from_probability((T::one() - self.p) + self.p * rhs.p)
    }
}
