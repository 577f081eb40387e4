//! Probability distributions as algebraic values.
//!
//! Every distribution is an immutable value. Arithmetic between independent
//! random variables (`+`, `-`, `*`, `/` from [`core::ops`]) produces a new
//! distribution of the same family, and comparisons through [`Compare`]
//! collapse to a [`Bernoulli`] holding the probability that the comparison
//! holds.
//!
//! Arithmetic results go through the same validation as the constructors, so
//! every operator returns `Result<_, StatsError>`: a sum that overflows, or a
//! shift that collapses a [`Uniform`] onto a single point, is an
//! [`StatsError::InvalidParameter`] rather than a value that breaks its own
//! invariants.
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support | Arithmetic (each returns `Result`) |
//! |---|---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) | `± scalar`, `± Normal`, `* scalar`, `/ scalar` |
//! | [`Uniform`] | lower a, upper b | [a, b] | `± scalar`, `* scalar` |
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support | Arithmetic (each returns `Result`) |
//! |---|---|---|---|
//! | [`Bernoulli`] | probability p | {0, 1} | none |
//! | [`Constant`] | value c | {c} | `+ - * /` with scalar or `Constant` |
//! | [`Discrete`] | value → probability table | finite | `± scalar`, `+ Discrete` (convolution) |
//! | [`Poisson`] | mean λ | {0, 1, 2, …} | `+ Poisson` |
//!
//! Combinations missing from the tables do not type-check. When the operand
//! types are only known at runtime, use [`AnyDistribution`], whose named
//! operations return [`StatsError::Unsupported`] instead.
//!
//! # Example
//!
//! ```
//! use distribution_algebra::stats::{Compare, Normal};
//!
//! let a = Normal::new(657.0_f64, 3.0).unwrap();
//! let b = Normal::new(661.0, 2.0).unwrap();
//! let p = a.greater_than(b);
//! assert!(p.p() > 0.13362 && p.p() < 0.13364);
//! ```

use core::fmt;

use crate::FloatScalar;

/// Scalar-on-the-left forms of commutative operators. Concrete impls for
/// `f32`/`f64` because of the orphan rules.
macro_rules! impl_scalar_lhs {
    ($Op:ident, $method:ident, $Dist:ident, [$($t:ty),*]) => {
        $(
            impl core::ops::$Op<$Dist<$t>> for $t {
                type Output = <$Dist<$t> as core::ops::$Op<$t>>::Output;

                fn $method(self, rhs: $Dist<$t>) -> Self::Output {
                    core::ops::$Op::$method(rhs, self)
                }
            }
        )*
    };
}

mod any;
mod bernoulli;
mod constant;
mod discrete;
mod normal;
mod poisson;
mod uniform;


pub use any::{AnyDistribution, Operand};
pub use bernoulli::Bernoulli;
pub use constant::Constant;
pub use discrete::Discrete;
pub use normal::Normal;
pub use poisson::Poisson;
pub use uniform::Uniform;

/// Default equality tolerance for floating parameters.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// How far the masses of a [`Discrete`] may sum away from 1. Tables of `n`
/// masses are also allowed `n` units of rounding of the element type, which
/// is what decides for `f32`.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-8;

/// Default tie margin for [`Discrete::median`].
pub const DEFAULT_TIE_MARGIN: f64 = 1e-6;

/// Default truncation threshold for [`Poisson::to_discrete`].
pub const DEFAULT_MIN_PROBABILITY: f64 = 1e-10;

/// Binary operators, as named in [`StatsError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        };
        f.write_str(symbol)
    }
}

/// Errors from distribution construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// A constructor invariant does not hold.
    #[error("invalid distribution parameter: {0}")]
    InvalidParameter(&'static str),
    /// The operator has no defined semantics for this pair of operands.
    #[error("operator `{op}` is not implemented between {lhs} and {rhs}")]
    Unsupported {
        op: BinaryOp,
        lhs: &'static str,
        rhs: &'static str,
    },
    /// Scalar division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Internal state that construction should have ruled out.
    #[error("malformed distribution: {0}")]
    Malformed(&'static str),
}

/// One entry of a distribution's parameter tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parameter<'a, T> {
    /// A floating parameter, compared within tolerance.
    Value(T),
    /// A `(value, probability)` table: keys compared exactly, masses within tolerance.
    Masses(&'a [(T, T)]),
}

impl<'a, T: FloatScalar> Parameter<'a, T> {
    pub fn value(&self) -> Option<T> {
        match *self {
            Parameter::Value(v) => Some(v),
            Parameter::Masses(_) => None,
        }
    }

    pub fn masses(&self) -> Option<&'a [(T, T)]> {
        match *self {
            Parameter::Masses(m) => Some(m),
            Parameter::Value(_) => None,
        }
    }

    /// Equality under `tolerance`. A tolerance of zero means exact.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        match (self, other) {
            (Parameter::Value(a), Parameter::Value(b)) => approx_eq(*a, *b, tolerance),
            (Parameter::Masses(a), Parameter::Masses(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(&(ka, pa), &(kb, pb))| ka == kb && approx_eq(pa, pb, tolerance))
            }
            _ => false,
        }
    }
}

impl<T: FloatScalar> fmt::Display for Parameter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Value(v) => write!(f, "{v}"),
            Parameter::Masses(masses) => {
                f.write_str("{")?;
                for (i, (k, p)) in masses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {p}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[inline]
pub(crate) fn approx_eq<T: FloatScalar>(a: T, b: T, tolerance: T) -> bool {
    a == b || (a - b).abs() < tolerance
}

/// Shared contract of every distribution: an ordered parameter tuple from
/// which the string form and equality are derived.
pub trait Distribution<T: FloatScalar> {
    /// Variant name used in the string form.
    const NAME: &'static str;

    /// Constructor parameters, in constructor order.
    fn parameters(&self) -> alloc::vec::Vec<Parameter<'_, T>>;

    /// Largest absolute difference still considered equal.
    fn tolerance(&self) -> T;

    /// Elementwise comparison of [`parameters`](Self::parameters) using
    /// this value's tolerance.
    fn approx_eq(&self, other: &Self) -> bool {
        let tolerance = self.tolerance();
        let (lhs, rhs) = (self.parameters(), other.parameters());
        lhs.len() == rhs.len()
            && lhs
                .iter()
                .zip(rhs.iter())
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }

    /// Writes `Name(p1, p2, ...)`.
    fn fmt_parameters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::NAME)?;
        for (i, p) in self.parameters().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str(")")
    }
}

/// Derives `Display` and `PartialEq` from [`Distribution`].
macro_rules! impl_parameter_semantics {
    ($($ty:ident),*) => {
        $(
            impl<T: $crate::FloatScalar> core::fmt::Display for $ty<T> {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    $crate::stats::Distribution::fmt_parameters(self, f)
                }
            }

            impl<T: $crate::FloatScalar> PartialEq for $ty<T> {
                fn eq(&self, other: &Self) -> bool {
                    $crate::stats::Distribution::approx_eq(self, other)
                }
            }
        )*
    };
}

impl_parameter_semantics!(Bernoulli, Constant, Discrete, Poisson, Normal, Uniform);

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar>: Distribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;

    /// P(X < x), which for a continuous variable is the CDF itself.
    fn probability_below(&self, x: T) -> Bernoulli<T> {
        Bernoulli::from_probability(self.cdf(x))
    }
}

/// Trait for discrete probability distributions.
///
/// Ordering is computed by exact enumeration of the support, so discrete
/// types implement [`Compare::less_than`] and [`Compare::less_equal`]
/// directly.
pub trait DiscreteDistribution<T: FloatScalar>: Distribution<T> {
    /// Probability mass function P(X = x).
    fn pmf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

/// Probabilistic comparison operators.
///
/// Each returns the probability that the comparison holds for independent
/// draws, as a [`Bernoulli`]. `greater_than` and `greater_equal` default to
/// the complements of `less_equal` and `less_than`.
///
/// Scalar thresholds may be infinite but must not be NaN.
pub trait Compare<T: FloatScalar, Rhs = Self> {
    /// P(self < rhs).
    fn less_than(&self, rhs: Rhs) -> Bernoulli<T>;

    /// P(self ≤ rhs).
    fn less_equal(&self, rhs: Rhs) -> Bernoulli<T>;

    /// P(self > rhs) = 1 − P(self ≤ rhs).
    fn greater_than(&self, rhs: Rhs) -> Bernoulli<T> {
        self.less_equal(rhs).complement()
    }

    /// P(self ≥ rhs) = 1 − P(self < rhs).
    fn greater_equal(&self, rhs: Rhs) -> Bernoulli<T> {
        self.less_than(rhs).complement()
    }
}

pub(crate) fn check_tolerance<T: FloatScalar>(tolerance: T) -> Result<T, StatsError> {
    if tolerance.is_nan() || tolerance < T::zero() {
        return Err(StatsError::InvalidParameter("tolerance must be non-negative"));
    }
    Ok(tolerance)
}

pub(crate) fn default_tolerance<T: FloatScalar>() -> T {
    T::lit(DEFAULT_TOLERANCE)
}

/// Allowed distance from 1 for the sum of `n` masses.
pub(crate) fn probability_sum_tolerance<T: FloatScalar>(n: usize) -> T {
    T::lit(PROBABILITY_SUM_TOLERANCE).max(T::count(n) * T::epsilon())
}
