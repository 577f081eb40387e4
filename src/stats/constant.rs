use core::ops::{Add, Div, Mul, Sub};

use crate::FloatScalar;
use super::{Bernoulli, Compare, DiscreteDistribution, Distribution, Parameter, StatsError};

/// Degenerate distribution: a single value with probability 1.
///
/// Arithmetic is plain value arithmetic and equality is exact.
///
/// # Example
///
/// ```
/// use distribution_algebra::stats::{Bernoulli, Compare, Constant};
///
/// let c = ((Constant::new(2.0_f64).unwrap() + 1.0).unwrap() * 2.0).unwrap();
/// assert_eq!(c, Constant::new(6.0).unwrap());
/// assert!((Constant::new(f64::MAX).unwrap() * 10.0).is_err());
/// assert_eq!(c.less_than(6.0), Bernoulli::new(0.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Constant<T> {
    value: T,
}

impl<T: FloatScalar> Constant<T> {
    /// Create a point mass at `value`. Requires a finite value.
    pub fn new(value: T) -> Result<Self, StatsError> {
        if !value.is_finite() {
            return Err(StatsError::InvalidParameter("constant must be finite"));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> T {
        self.value
    }

    fn outcome(holds: bool) -> Bernoulli<T> {
        Bernoulli::from_probability(if holds { T::one() } else { T::zero() })
    }
}

impl<T: FloatScalar> Distribution<T> for Constant<T> {
    const NAME: &'static str = "Constant";

    fn parameters(&self) -> alloc::vec::Vec<Parameter<'_, T>> {
        alloc::vec![Parameter::Value(self.value)]
    }

    fn tolerance(&self) -> T {
        T::zero()
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Constant<T> {
    fn pmf(&self, x: T) -> T {
        if x == self.value { T::one() } else { T::zero() }
    }

    fn cdf(&self, x: T) -> T {
        if x >= self.value { T::one() } else { T::zero() }
    }

    fn mean(&self) -> T {
        self.value
    }

    fn variance(&self) -> T {
        T::zero()
    }
}

impl<T: FloatScalar> Compare<T, T> for Constant<T> {
    fn less_than(&self, rhs: T) -> Bernoulli<T> {
        Self::outcome(self.value < rhs)
    }

    fn less_equal(&self, rhs: T) -> Bernoulli<T> {
        Self::outcome(self.value <= rhs)
    }
}

impl<T: FloatScalar> Compare<T> for Constant<T> {
    fn less_than(&self, rhs: Constant<T>) -> Bernoulli<T> {
        self.less_than(rhs.value)
    }

    fn less_equal(&self, rhs: Constant<T>) -> Bernoulli<T> {
        self.less_equal(rhs.value)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

// Results are rebuilt through `new`, so overflow to ±∞ is an error.
macro_rules! impl_constant_op {
    ($Op:ident, $method:ident, $op:tt) => {
        impl<T: FloatScalar> $Op<T> for Constant<T> {
            type Output = Result<Self, StatsError>;

            fn $method(self, rhs: T) -> Self::Output {
                Self::new(self.value $op rhs)
            }
        }

        impl<T: FloatScalar> $Op for Constant<T> {
            type Output = Result<Self, StatsError>;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }
    };
}

impl_constant_op!(Add, add, +);
impl_constant_op!(Sub, sub, -);
impl_constant_op!(Mul, mul, *);

impl<T: FloatScalar> Div<T> for Constant<T> {
    type Output = Result<Self, StatsError>;

    fn div(self, rhs: T) -> Self::Output {
        if rhs == T::zero() {
            return Err(StatsError::DivisionByZero);
        }
        Self::new(self.value / rhs)
    }
}

impl<T: FloatScalar> Div for Constant<T> {
    type Output = Result<Self, StatsError>;

    fn div(self, rhs: Self) -> Self::Output {
        self / rhs.value
    }
}

impl_scalar_lhs!(Add, add, Constant, [f32, f64]);
impl_scalar_lhs!(Mul, mul, Constant, [f32, f64]);

macro_rules! impl_into_scalar {
    ($($t:ty),*) => {
        $(
            impl From<Constant<$t>> for $t {
                fn from(c: Constant<$t>) -> $t {
                    c.value
                }
            }
        )*
    };
}

impl_into_scalar!(f32, f64);
