use alloc::vec::Vec;
use core::ops::Add;

use crate::special::{erfc, gamma_inc_upper, lgamma};
use crate::FloatScalar;
use super::{
    check_tolerance, default_tolerance, Bernoulli, Compare, Discrete, DiscreteDistribution,
    Distribution, Parameter, StatsError, DEFAULT_MIN_PROBABILITY,
};

// Keeps an enumerated support to a few times 1e5 values.
const MAX_ENUMERABLE_MEAN: f64 = 1e8;

// Below this, ln k! comes straight from lgamma without cancellation.
const STIRLING_CUTOFF: f64 = 30.0;

/// Largest mean that is enumerated term by term: bounded by
/// `MAX_ENUMERABLE_MEAN` and by where `k + 1` stops being exact in `T`.
fn enumeration_limit<T: FloatScalar>() -> T {
    T::lit(MAX_ENUMERABLE_MEAN).min(T::lit(0.25) / T::epsilon())
}

/// ln k! − (k ln k − k + ½ ln 2πk), asymptotic series.
fn stirling_error<T: FloatScalar>(k: T) -> T {
    let r = k.recip();
    let r2 = r * r;
    r * (T::lit(1.0 / 12.0) - r2 * (T::lit(1.0 / 360.0) - r2 * T::lit(1.0 / 1260.0)))
}

/// Φ(z) via erfc, accurate in both tails.
fn normal_cdf<T: FloatScalar>(z: T) -> T {
    T::half() * erfc(-z / T::lit(core::f64::consts::SQRT_2))
}

/// Poisson distribution with mean λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Compare, DiscreteDistribution, Poisson};
///
/// let p = (Poisson::new(2.0_f64).unwrap() + Poisson::new(1.0).unwrap()).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// // P(X < 1) = P(X = 0) = e^{−3}
/// assert!((p.less_than(1.0).p() - (-3.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    mean: T,
    tolerance: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with mean `mean`. Requires `mean > 0`.
    pub fn new(mean: T) -> Result<Self, StatsError> {
        Self::with_tolerance(mean, default_tolerance())
    }

    /// As [`new`](Self::new) with an explicit equality tolerance.
    pub fn with_tolerance(mean: T, tolerance: T) -> Result<Self, StatsError> {
        let tolerance = check_tolerance(tolerance)?;
        if !(mean > T::zero()) || !mean.is_finite() {
            return Err(StatsError::InvalidParameter("mean must be strictly positive"));
        }
        Ok(Self { mean, tolerance })
    }

    /// Truncate to a finite [`Discrete`] with the default threshold.
    pub fn to_discrete(&self) -> Result<Discrete<T>, StatsError> {
        self.to_discrete_with_min_probability(T::lit(DEFAULT_MIN_PROBABILITY))
    }

    /// Truncate to a finite [`Discrete`].
    ///
    /// Keeps every `k` whose mass is at least `min_probability`. The mass is
    /// unimodal, so this is one run of values around the mode, found by
    /// walking outwards from it; the cost is the size of the result. The
    /// discarded tails are not renormalised, so a threshold coarse enough to
    /// lose more than `1e-8` of mass is rejected by the `Discrete`
    /// constructor. Means above the enumeration limit (`1e8`, less for `f32`)
    /// are rejected too.
    pub fn to_discrete_with_min_probability(
        &self,
        min_probability: T,
    ) -> Result<Discrete<T>, StatsError> {
        if !(min_probability > T::zero()) {
            return Err(StatsError::InvalidParameter(
                "min_probability must be strictly positive",
            ));
        }
        if self.mean > enumeration_limit() {
            return Err(StatsError::InvalidParameter("mean too large to enumerate"));
        }
        let (zero, one) = (T::zero(), T::one());
        let mode = self.mean.floor();

        let mut masses = Vec::new();
        let mut k = mode - one;
        while k >= zero {
            let p = self.pmf(k);
            if p < min_probability {
                break;
            }
            masses.push((k, p));
            k = k - one;
        }
        masses.reverse();

        let mut k = mode;
        loop {
            let p = self.pmf(k);
            if p < min_probability {
                break;
            }
            masses.push((k, p));
            k = k + one;
        }

        let kept = masses.iter().fold(zero, |acc, &(_, p)| acc + p);
        tracing::debug!(
            mean = ?self.mean,
            support = masses.len(),
            discarded = ?(one - kept),
            "truncated poisson to discrete"
        );
        Discrete::with_tolerance(masses, self.tolerance)
    }

    /// ln P(X = k) for a non-negative integer `k`.
    ///
    /// Past the cutoff it is evaluated as k·ln(λ/k) − (λ − k) − ½ ln 2πk −
    /// stirling_error(k), where no term of size λ cancels against another.
    fn ln_pmf(&self, k: T) -> T {
        if k < T::lit(STIRLING_CUTOFF) {
            return k * self.mean.ln() - self.mean - lgamma(k + T::one());
        }
        let gap = self.mean - k;
        let deviance = k * (gap / k).ln_1p() - gap;
        deviance - stirling_error(k) - T::half() * (T::lit(core::f64::consts::TAU) * k).ln()
    }

    /// P(X ≤ k) when the incomplete gamma does not converge.
    ///
    /// Sums the side of the mode that `k` is on, outwards from `k`, until the
    /// terms stop contributing. That takes O(√λ) terms; past the enumeration
    /// limit the continuity-corrected normal approximation is used instead.
    fn cdf_by_summation(&self, k: T) -> T {
        let (zero, one) = (T::zero(), T::one());
        if self.mean > enumeration_limit() {
            return normal_cdf((k + T::half() - self.mean) / self.mean.sqrt());
        }
        if k < self.mean.floor() {
            let mut total = zero;
            let mut i = k;
            while i >= zero {
                let p = self.pmf(i);
                total = total + p;
                if p <= total * T::epsilon() {
                    break;
                }
                i = i - one;
            }
            total.min(one)
        } else {
            let mut tail = zero;
            let mut i = k + one;
            loop {
                let p = self.pmf(i);
                tail = tail + p;
                if p <= tail * T::epsilon() {
                    break;
                }
                i = i + one;
            }
            (one - tail).max(zero)
        }
    }
}

impl<T: FloatScalar> Distribution<T> for Poisson<T> {
    const NAME: &'static str = "Poisson";

    fn parameters(&self) -> Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Value(self.mean)]
    }

    fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, x: T) -> T {
        if x < T::zero() || x != x.floor() || !x.is_finite() {
            return T::zero();
        }
        self.ln_pmf(x).exp()
    }

    fn cdf(&self, x: T) -> T {
        if x.is_nan() || x < T::zero() {
            return T::zero();
        }
        if x.is_infinite() {
            return T::one();
        }
        // P(X ≤ k) = Q(k + 1, λ)
        let k = x.floor();
        match gamma_inc_upper(k + T::one(), self.mean) {
            Ok(q) => q,
            Err(err) => {
                tracing::debug!(%err, k = ?k, mean = ?self.mean, "poisson cdf by summation");
                self.cdf_by_summation(k)
            }
        }
    }

    fn mean(&self) -> T {
        self.mean
    }

    fn variance(&self) -> T {
        self.mean
    }
}

impl<T: FloatScalar> Compare<T, T> for Poisson<T> {
    /// P(X ≤ j) for the largest integer j strictly below `rhs`.
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        let below = if rhs == rhs.floor() { rhs - T::one() } else { rhs.floor() };
        Bernoulli::from_probability(self.cdf(below))
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.cdf(rhs))
    }
}

/// Comparison between two Poissons goes through their truncated
/// [`Discrete`] forms, so it is exact up to the discarded tail mass
/// (a few multiples of [`DEFAULT_MIN_PROBABILITY`]).
impl<T: FloatScalar> Compare<T> for Poisson<T> {
    fn less_than(&self, rhs: Poisson<T>) -> Bernoulli<T> {
        self.versus(&rhs, false)
    }

    fn less_equal(&self, rhs: Poisson<T>) -> Bernoulli<T> {
        self.versus(&rhs, true)
    }
}

impl<T: FloatScalar> Poisson<T> {
    fn versus(&self, other: &Self, inclusive: bool) -> Bernoulli<T> {
        match (self.to_discrete(), other.to_discrete()) {
            (Ok(x), Ok(y)) if inclusive => x.less_equal(&y),
            (Ok(x), Ok(y)) => x.less_than(&y),
            (Err(err), _) | (_, Err(err)) => {
                // Means past the enumeration limit end up here, where the
                // continuity-corrected normal approximation of X − Y is tight.
                tracing::warn!(%err, "poisson comparison falling back to normal approximation");
                let offset = if inclusive { T::half() } else { -T::half() };
                let spread = (self.mean + other.mean).sqrt();
                Bernoulli::from_probability(normal_cdf((offset - (self.mean - other.mean)) / spread))
            }
        }
    }
}

impl<T: FloatScalar> Add for Poisson<T> {
    type Output = Result<Self, StatsError>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with_tolerance(self.mean + rhs.mean, self.tolerance)
    }
}
