use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Add, Sub};

use crate::FloatScalar;
use super::{
    check_tolerance, default_tolerance, probability_sum_tolerance, Bernoulli, Compare,
    DiscreteDistribution, Distribution, Parameter, StatsError, DEFAULT_TIE_MARGIN,
};

/// Finite distribution given by an explicit `value → probability` table.
///
/// Keys are kept strictly ascending. Sums of independent `Discrete`
/// variables are computed exactly by convolution.
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Compare, Discrete};
///
/// let coin = Discrete::new([(0.0_f64, 0.5), (1.0, 0.5)]).unwrap();
/// let three = (&(&coin + &coin).unwrap() + &coin).unwrap();
/// assert_eq!(
///     three,
///     Discrete::new([(0.0, 0.125), (1.0, 0.375), (2.0, 0.375), (3.0, 0.125)]).unwrap()
/// );
/// assert!((three.greater_than(1.0).p() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Discrete<T> {
    masses: Vec<(T, T)>,
    tolerance: T,
}

impl<T: FloatScalar> Discrete<T> {
    /// Create a distribution from `(value, probability)` pairs.
    ///
    /// Requires a non-empty table with finite, strictly ascending values and
    /// non-negative probabilities summing to 1, within `1e-8` or `n` units of
    /// rounding of `T` for `n` masses, whichever is larger.
    pub fn new(masses: impl IntoIterator<Item = (T, T)>) -> Result<Self, StatsError> {
        Self::with_tolerance(masses, default_tolerance())
    }

    /// As [`new`](Self::new) with an explicit equality tolerance.
    pub fn with_tolerance(
        masses: impl IntoIterator<Item = (T, T)>,
        tolerance: T,
    ) -> Result<Self, StatsError> {
        let tolerance = check_tolerance(tolerance)?;
        let masses: Vec<(T, T)> = masses.into_iter().collect();

        if masses.is_empty() {
            return Err(StatsError::InvalidParameter("probabilities cannot be empty"));
        }
        if masses.iter().any(|&(k, _)| !k.is_finite()) {
            return Err(StatsError::InvalidParameter("values must be finite"));
        }
        if masses.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(StatsError::InvalidParameter(
                "values must be strictly ascending",
            ));
        }
        if masses.iter().any(|&(_, p)| p.is_nan() || p < T::zero()) {
            return Err(StatsError::InvalidParameter(
                "probabilities must be non-negative",
            ));
        }
        let total = masses.iter().fold(T::zero(), |acc, &(_, p)| acc + p);
        if (T::one() - total).abs() > probability_sum_tolerance(masses.len()) {
            return Err(StatsError::InvalidParameter("probabilities must sum to 1"));
        }

        Ok(Self { masses, tolerance })
    }

    /// Build from pairs that may be unsorted or repeat a value, summing the
    /// mass of repeated values. Used by operators whose inputs were already
    /// validated, so only the values are checked again.
    fn collapse(mut pairs: Vec<(T, T)>, tolerance: T) -> Result<Self, StatsError> {
        if pairs.iter().any(|&(k, _)| !k.is_finite()) {
            return Err(StatsError::InvalidParameter("values must be finite"));
        }
        // Stable, so repeated values accumulate in generation order.
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut masses: Vec<(T, T)> = Vec::with_capacity(pairs.len());
        for (value, p) in pairs {
            match masses.last_mut() {
                Some(last) if last.0 == value => last.1 = last.1 + p,
                _ => masses.push((value, p)),
            }
        }
        Ok(Self { masses, tolerance })
    }

    /// The `(value, probability)` table in ascending value order.
    pub fn probabilities(&self) -> &[(T, T)] {
        &self.masses
    }

    /// Support values in ascending order.
    pub fn support(&self) -> impl Iterator<Item = T> + '_ {
        self.masses.iter().map(|&(k, _)| k)
    }

    /// Median with the default tie margin.
    pub fn median(&self) -> Result<T, StatsError> {
        self.median_with_tie_margin(T::lit(DEFAULT_TIE_MARGIN))
    }

    /// The first value at which the cumulative mass exceeds `0.5 + tie_margin`.
    ///
    /// If the mass accumulated before that value is within `2·tie_margin` of
    /// one half, the distribution is split evenly and the midpoint of the two
    /// neighbouring values is returned instead.
    pub fn median_with_tie_margin(&self, tie_margin: T) -> Result<T, StatsError> {
        let half = T::half();
        let mut cumulative = T::zero();
        let mut previous: Option<(T, T)> = None;

        for &(value, p) in &self.masses {
            cumulative = cumulative + p;
            if cumulative > half + tie_margin {
                return Ok(match previous {
                    Some((prev_value, prev_cumulative))
                        if (half - prev_cumulative).abs() < T::two() * tie_margin =>
                    {
                        (prev_value + value) / T::two()
                    }
                    _ => value,
                });
            }
            previous = Some((value, cumulative));
        }
        Err(StatsError::Malformed(
            "cumulative probability never crossed one half",
        ))
    }

    /// Total mass of values satisfying `keep`.
    fn mass_where(&self, keep: impl Fn(T) -> bool) -> T {
        self.masses
            .iter()
            .filter(|&&(k, _)| keep(k))
            .fold(T::zero(), |acc, &(_, p)| acc + p)
    }

    /// 1 − (mass of the prefix of values satisfying `in_prefix`).
    ///
    /// Scans in ascending order and stops at the first value outside the prefix.
    fn tail_after(&self, in_prefix: impl Fn(T) -> bool) -> T {
        let mut cumulative = T::zero();
        for &(k, p) in &self.masses {
            if !in_prefix(k) {
                break;
            }
            cumulative = cumulative + p;
        }
        T::one() - cumulative
    }

    /// Σ_y P(other = y) · P(self < y), or `≤` when `inclusive`.
    ///
    /// Both tables are sorted, so a single merged pass suffices.
    fn below_other(&self, other: &Self, inclusive: bool) -> T {
        let mut i = 0;
        let mut cumulative = T::zero();
        let mut total = T::zero();
        for &(y, q) in &other.masses {
            while let Some(&(x, p)) = self.masses.get(i) {
                if x < y || (inclusive && x == y) {
                    cumulative = cumulative + p;
                    i += 1;
                } else {
                    break;
                }
            }
            total = total + q * cumulative;
        }
        total
    }

    fn shifted(&self, offset: T) -> Result<Self, StatsError> {
        let pairs = self.masses.iter().map(|&(k, p)| (k + offset, p)).collect();
        Self::collapse(pairs, self.tolerance)
    }

    /// Distribution of the sum of two independent variables.
    fn convolve(&self, other: &Self) -> Result<Self, StatsError> {
        let mut pairs = Vec::with_capacity(self.masses.len() * other.masses.len());
        for &(v1, p1) in &self.masses {
            for &(v2, p2) in &other.masses {
                pairs.push((v1 + v2, p1 * p2));
            }
        }
        let sum = Self::collapse(pairs, self.tolerance)?;
        tracing::trace!(
            lhs = self.masses.len(),
            rhs = other.masses.len(),
            support = sum.masses.len(),
            "convolved discrete distributions"
        );
        Ok(sum)
    }
}

impl<T: FloatScalar> Distribution<T> for Discrete<T> {
    const NAME: &'static str = "Discrete";

    fn parameters(&self) -> Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Masses(&self.masses)]
    }

    fn tolerance(&self) -> T {
        self.tolerance
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Discrete<T> {
    fn pmf(&self, x: T) -> T {
        self.mass_where(|k| k == x)
    }

    fn cdf(&self, x: T) -> T {
        self.mass_where(|k| k <= x)
    }

    fn mean(&self) -> T {
        self.masses
            .iter()
            .fold(T::zero(), |acc, &(k, p)| acc + k * p)
    }

    fn variance(&self) -> T {
        let mean = self.mean();
        self.masses.iter().fold(T::zero(), |acc, &(k, p)| {
            let d = k - mean;
            acc + d * d * p
        })
    }
}

impl<T: FloatScalar> Compare<T, T> for Discrete<T> {
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.mass_where(|k| k < rhs))
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.mass_where(|k| k <= rhs))
    }

    fn greater_than(&self, rhs: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.tail_after(|k| k <= rhs))
    }

    fn greater_equal(&self, rhs: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.tail_after(|k| k < rhs))
    }
}

impl<T: FloatScalar> Compare<T, &Discrete<T>> for Discrete<T> {
    fn less_than(&self, rhs: &Discrete<T>) -> Bernoulli<T> {
        Bernoulli::from_probability(self.below_other(rhs, false))
    }

    fn less_equal(&self, rhs: &Discrete<T>) -> Bernoulli<T> {
        Bernoulli::from_probability(self.below_other(rhs, true))
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: FloatScalar> Add<T> for &Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: T) -> Self::Output {
        self.shifted(rhs)
    }
}

impl<T: FloatScalar> Add<T> for Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: T) -> Self::Output {
        self.shifted(rhs)
    }
}

impl<T: FloatScalar> Sub<T> for &Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn sub(self, rhs: T) -> Self::Output {
        self.shifted(-rhs)
    }
}

impl<T: FloatScalar> Sub<T> for Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn sub(self, rhs: T) -> Self::Output {
        self.shifted(-rhs)
    }
}

impl<T: FloatScalar> Add<&Discrete<T>> for &Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: &Discrete<T>) -> Self::Output {
        self.convolve(rhs)
    }
}

// Discrete is not Copy, so the owned variants borrow and delegate.

impl<T: FloatScalar> Add<Discrete<T>> for &Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: Discrete<T>) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl<T: FloatScalar> Add<&Discrete<T>> for Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: &Discrete<T>) -> Self::Output {
        self.convolve(rhs)
    }
}

impl<T: FloatScalar> Add for Discrete<T> {
    type Output = Result<Discrete<T>, StatsError>;

    fn add(self, rhs: Discrete<T>) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl_scalar_lhs!(Add, add, Discrete, [f32, f64]);
