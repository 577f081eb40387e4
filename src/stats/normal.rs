use core::ops::{Add, Div, Mul, Sub};

use crate::special::{erf, erfc};
use crate::FloatScalar;
use super::{
    check_tolerance, default_tolerance, Bernoulli, Compare, ContinuousDistribution, Distribution,
    Parameter, StatsError,
};

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// Sums and differences of independent normals are normal, so `+` and `-`
/// stay closed-form. `σ = 0` is allowed and behaves as a point mass.
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Compare, ContinuousDistribution, Normal};
///
/// let n = Normal::new(0.0_f64, 1.0).unwrap();
/// let d = (n - n).unwrap();
/// assert_eq!(d, Normal::new(0.0, 2.0_f64.sqrt()).unwrap());
/// assert!((n.greater_equal(n).p() - 0.5).abs() < 1e-14);
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal<T> {
    mean: T,
    stddev: T,
    tolerance: T,
}

impl<T: FloatScalar> Normal<T> {
    /// Create a normal distribution with mean `mean` and standard deviation
    /// `stddev`. Requires `stddev ≥ 0` and finite parameters.
    pub fn new(mean: T, stddev: T) -> Result<Self, StatsError> {
        Self::with_tolerance(mean, stddev, default_tolerance())
    }

    /// As [`new`](Self::new) with an explicit equality tolerance.
    pub fn with_tolerance(mean: T, stddev: T, tolerance: T) -> Result<Self, StatsError> {
        let tolerance = check_tolerance(tolerance)?;
        if !mean.is_finite() {
            return Err(StatsError::InvalidParameter("mean must be finite"));
        }
        if !(stddev >= T::zero()) || !stddev.is_finite() {
            return Err(StatsError::InvalidParameter(
                "standard deviation must be non-negative",
            ));
        }
        Ok(Self { mean, stddev, tolerance })
    }

    pub fn stddev(&self) -> T {
        self.stddev
    }

    /// Validated result of an operator, keeping this value's tolerance.
    fn with(&self, mean: T, stddev: T) -> Result<Self, StatsError> {
        Self::with_tolerance(mean, stddev, self.tolerance)
    }

    /// Standard deviation of the sum or difference with an independent normal.
    fn combined_stddev(&self, other: &Self) -> T {
        self.stddev.hypot(other.stddev)
    }

    /// P(X < threshold) = 1 − Φ((μ − threshold) / σ), evaluated as
    /// Φ((threshold − μ) / σ) so the far tails keep their precision.
    fn below(&self, threshold: T) -> Bernoulli<T> {
        if self.stddev == T::zero() {
            let p = if self.mean < threshold { T::one() } else { T::zero() };
            return Bernoulli::from_probability(p);
        }
        Bernoulli::from_probability(standard_cdf((threshold - self.mean) / self.stddev))
    }
}

/// Φ(z) via the error function, using erfc in the lower tail.
fn standard_cdf<T: FloatScalar>(z: T) -> T {
    let scaled = z / T::lit(core::f64::consts::SQRT_2);
    if scaled >= T::zero() {
        T::half() * (T::one() + erf(scaled))
    } else {
        T::half() * erfc(-scaled)
    }
}

impl<T: FloatScalar> Distribution<T> for Normal<T> {
    const NAME: &'static str = "Normal";

    fn parameters(&self) -> alloc::vec::Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Value(self.mean), Parameter::Value(self.stddev)]
    }

    fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Normal<T> {
    fn pdf(&self, x: T) -> T {
        if self.stddev == T::zero() {
            return if x == self.mean { T::infinity() } else { T::zero() };
        }
        let z = (x - self.mean) / self.stddev;
        let sqrt_2pi = T::lit(core::f64::consts::TAU.sqrt());
        (-(z * z) / T::two()).exp() / (self.stddev * sqrt_2pi)
    }

    fn cdf(&self, x: T) -> T {
        if self.stddev == T::zero() {
            return if x >= self.mean { T::one() } else { T::zero() };
        }
        standard_cdf((x - self.mean) / self.stddev)
    }

    fn mean(&self) -> T {
        self.mean
    }

    fn variance(&self) -> T {
        self.stddev * self.stddev
    }
}

impl<T: FloatScalar> Compare<T, T> for Normal<T> {
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        self.below(rhs)
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        self.below(rhs)
    }
}

/// X < Y exactly when X − Y < 0, and X − Y is itself normal.
impl<T: FloatScalar> Compare<T> for Normal<T> {
    fn less_than(&self, rhs: Normal<T>) -> Bernoulli<T> {
        // Halved so neither the mean gap nor the combined spread can overflow.
        let half = T::half();
        let gap = rhs.mean * half - self.mean * half;
        let spread = (self.stddev * half).hypot(rhs.stddev * half);
        if spread == T::zero() {
            let p = if gap > T::zero() { T::one() } else { T::zero() };
            return Bernoulli::from_probability(p);
        }
        Bernoulli::from_probability(standard_cdf(gap / spread))
    }

    fn less_equal(&self, rhs: Normal<T>) -> Bernoulli<T> {
        self.less_than(rhs)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: FloatScalar> Add<T> for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn add(self, rhs: T) -> Self::Output {
        self.with(self.mean + rhs, self.stddev)
    }
}

impl<T: FloatScalar> Sub<T> for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn sub(self, rhs: T) -> Self::Output {
        self.with(self.mean - rhs, self.stddev)
    }
}

impl<T: FloatScalar> Add for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.with(self.mean + rhs.mean, self.combined_stddev(&rhs))
    }
}

/// Variances add for a difference too.
impl<T: FloatScalar> Sub for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.with(self.mean - rhs.mean, self.combined_stddev(&rhs))
    }
}

impl<T: FloatScalar> Mul<T> for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn mul(self, rhs: T) -> Self::Output {
        self.with(self.mean * rhs, (self.stddev * rhs).abs())
    }
}

impl<T: FloatScalar> Div<T> for Normal<T> {
    type Output = Result<Self, StatsError>;

    fn div(self, rhs: T) -> Self::Output {
        if rhs == T::zero() {
            return Err(StatsError::DivisionByZero);
        }
        self.with(self.mean / rhs, self.stddev / rhs.abs())
    }
}

impl_scalar_lhs!(Add, add, Normal, [f32, f64]);
impl_scalar_lhs!(Mul, mul, Normal, [f32, f64]);
