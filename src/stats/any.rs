//! Runtime dispatch over the closed set of distribution families.
//!
//! The typed API rejects unsupported operand pairs at compile time. Callers
//! that only learn the operand families at runtime go through [`Operand`]
//! instead: every operation first tries the direct form, then the reflected
//! one (`s + X` as `X + s`, `s < X` as `X > s`), and only then reports
//! [`StatsError::Unsupported`].

use core::fmt;

use crate::FloatScalar;
use super::{
    BinaryOp, Bernoulli, Compare, Constant, Discrete, Distribution, Normal, Poisson, StatsError,
    Uniform,
};

/// Any distribution value.
#[derive(Debug, Clone)]
pub enum AnyDistribution<T> {
    Bernoulli(Bernoulli<T>),
    Constant(Constant<T>),
    Discrete(Discrete<T>),
    Poisson(Poisson<T>),
    Normal(Normal<T>),
    Uniform(Uniform<T>),
}

/// Either side of a binary operation.
#[derive(Debug, Clone)]
pub enum Operand<T> {
    Scalar(T),
    Distribution(AnyDistribution<T>),
}

impl<T: FloatScalar> AnyDistribution<T> {
    /// Name of the family, as used in the string form.
    pub fn name(&self) -> &'static str {
        match self {
            AnyDistribution::Bernoulli(_) => Bernoulli::<T>::NAME,
            AnyDistribution::Constant(_) => Constant::<T>::NAME,
            AnyDistribution::Discrete(_) => Discrete::<T>::NAME,
            AnyDistribution::Poisson(_) => Poisson::<T>::NAME,
            AnyDistribution::Normal(_) => Normal::<T>::NAME,
            AnyDistribution::Uniform(_) => Uniform::<T>::NAME,
        }
    }

    /// Arithmetic with no reflection needed on this side.
    fn arithmetic(&self, op: BinaryOp, rhs: &Operand<T>) -> Option<Result<Self, StatsError>> {
        use AnyDistribution as D;
        use BinaryOp::*;
        use Operand::{Distribution as Dist, Scalar};

        let out = match (self, op, rhs) {
            (D::Constant(c), Add, Scalar(s)) => (*c + *s).map(D::Constant),
            (D::Constant(c), Sub, Scalar(s)) => (*c - *s).map(D::Constant),
            (D::Constant(c), Mul, Scalar(s)) => (*c * *s).map(D::Constant),
            (D::Constant(c), Div, Scalar(s)) => (*c / *s).map(D::Constant),
            (D::Constant(c), Add, Dist(D::Constant(o))) => (*c + *o).map(D::Constant),
            (D::Constant(c), Sub, Dist(D::Constant(o))) => (*c - *o).map(D::Constant),
            (D::Constant(c), Mul, Dist(D::Constant(o))) => (*c * *o).map(D::Constant),
            (D::Constant(c), Div, Dist(D::Constant(o))) => (*c / *o).map(D::Constant),

            (D::Discrete(d), Add, Scalar(s)) => (d + *s).map(D::Discrete),
            (D::Discrete(d), Sub, Scalar(s)) => (d - *s).map(D::Discrete),
            (D::Discrete(d), Add, Dist(D::Discrete(o))) => (d + o).map(D::Discrete),

            (D::Poisson(p), Add, Dist(D::Poisson(o))) => (*p + *o).map(D::Poisson),

            (D::Normal(n), Add, Scalar(s)) => (*n + *s).map(D::Normal),
            (D::Normal(n), Sub, Scalar(s)) => (*n - *s).map(D::Normal),
            (D::Normal(n), Mul, Scalar(s)) => (*n * *s).map(D::Normal),
            (D::Normal(n), Div, Scalar(s)) => (*n / *s).map(D::Normal),
            (D::Normal(n), Add, Dist(D::Normal(o))) => (*n + *o).map(D::Normal),
            (D::Normal(n), Sub, Dist(D::Normal(o))) => (*n - *o).map(D::Normal),

            (D::Uniform(u), Add, Scalar(s)) => (*u + *s).map(D::Uniform),
            (D::Uniform(u), Sub, Scalar(s)) => (*u - *s).map(D::Uniform),
            (D::Uniform(u), Mul, Scalar(s)) => (*u * *s).map(D::Uniform),

            _ => return None,
        };
        Some(out)
    }

    /// Comparison with no reflection needed on this side.
    fn comparison(&self, op: BinaryOp, rhs: &Operand<T>) -> Option<Bernoulli<T>> {
        use AnyDistribution as D;
        use Operand::{Distribution as Dist, Scalar};

        let out = match (self, rhs) {
            (D::Bernoulli(x), Scalar(s)) => apply(x, op, *s),
            (D::Bernoulli(x), Dist(D::Bernoulli(y))) => apply(x, op, *y),
            (D::Constant(x), Scalar(s)) => apply(x, op, *s),
            (D::Constant(x), Dist(D::Constant(y))) => apply(x, op, *y),
            (D::Discrete(x), Scalar(s)) => apply(x, op, *s),
            (D::Discrete(x), Dist(D::Discrete(y))) => apply(x, op, y),
            (D::Poisson(x), Scalar(s)) => apply(x, op, *s),
            (D::Poisson(x), Dist(D::Poisson(y))) => apply(x, op, *y),
            (D::Normal(x), Scalar(s)) => apply(x, op, *s),
            (D::Normal(x), Dist(D::Normal(y))) => apply(x, op, *y),
            (D::Uniform(x), Scalar(s)) => apply(x, op, *s),
            (D::Uniform(x), Dist(D::Uniform(y))) => apply(x, op, *y),
            _ => return None,
        };
        Some(out)
    }
}

/// Only reached through [`Operand::comparison`], which passes comparison
/// operators alone.
fn apply<T: FloatScalar, R, D: Compare<T, R>>(lhs: &D, op: BinaryOp, rhs: R) -> Bernoulli<T> {
    match op {
        BinaryOp::Lt => lhs.less_than(rhs),
        BinaryOp::Le => lhs.less_equal(rhs),
        BinaryOp::Gt => lhs.greater_than(rhs),
        BinaryOp::Ge => lhs.greater_equal(rhs),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            unreachable!("arithmetic operator `{op}` dispatched as a comparison")
        }
    }
}

/// `a op b` ⇔ `b mirror(op) a`. Arithmetic operators map to themselves.
fn mirror(op: BinaryOp) -> BinaryOp {
    match op {
        BinaryOp::Lt => BinaryOp::Gt,
        BinaryOp::Le => BinaryOp::Ge,
        BinaryOp::Gt => BinaryOp::Lt,
        BinaryOp::Ge => BinaryOp::Le,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => op,
    }
}

impl<T: FloatScalar> Operand<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Distribution(d) => d.name(),
        }
    }

    fn unsupported(&self, op: BinaryOp, rhs: &Self) -> StatsError {
        StatsError::Unsupported { op, lhs: self.name(), rhs: rhs.name() }
    }

    fn arithmetic(&self, op: BinaryOp, rhs: &Self) -> Result<AnyDistribution<T>, StatsError> {
        if let Operand::Distribution(lhs) = self {
            if let Some(out) = lhs.arithmetic(op, rhs) {
                return out;
            }
        }
        let commutative = matches!(op, BinaryOp::Add | BinaryOp::Mul);
        if let (true, Operand::Distribution(rhs_dist)) = (commutative, rhs) {
            if let Some(out) = rhs_dist.arithmetic(op, self) {
                return out;
            }
        }
        Err(self.unsupported(op, rhs))
    }

    fn comparison(&self, op: BinaryOp, rhs: &Self) -> Result<Bernoulli<T>, StatsError> {
        if let Operand::Distribution(lhs) = self {
            if let Some(out) = lhs.comparison(op, rhs) {
                return Ok(out);
            }
        }
        if let Operand::Distribution(rhs_dist) = rhs {
            if let Some(out) = rhs_dist.comparison(mirror(op), self) {
                return Ok(out);
            }
        }
        Err(self.unsupported(op, rhs))
    }

    pub fn add(&self, rhs: &Self) -> Result<AnyDistribution<T>, StatsError> {
        self.arithmetic(BinaryOp::Add, rhs)
    }

    pub fn sub(&self, rhs: &Self) -> Result<AnyDistribution<T>, StatsError> {
        self.arithmetic(BinaryOp::Sub, rhs)
    }

    pub fn mul(&self, rhs: &Self) -> Result<AnyDistribution<T>, StatsError> {
        self.arithmetic(BinaryOp::Mul, rhs)
    }

    pub fn div(&self, rhs: &Self) -> Result<AnyDistribution<T>, StatsError> {
        self.arithmetic(BinaryOp::Div, rhs)
    }

    pub fn less_than(&self, rhs: &Self) -> Result<Bernoulli<T>, StatsError> {
        self.comparison(BinaryOp::Lt, rhs)
    }

    pub fn less_equal(&self, rhs: &Self) -> Result<Bernoulli<T>, StatsError> {
        self.comparison(BinaryOp::Le, rhs)
    }

    pub fn greater_than(&self, rhs: &Self) -> Result<Bernoulli<T>, StatsError> {
        self.comparison(BinaryOp::Gt, rhs)
    }

    pub fn greater_equal(&self, rhs: &Self) -> Result<Bernoulli<T>, StatsError> {
        self.comparison(BinaryOp::Ge, rhs)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl<T> From<$variant<T>> for AnyDistribution<T> {
                fn from(d: $variant<T>) -> Self {
                    AnyDistribution::$variant(d)
                }
            }

            impl<T> From<$variant<T>> for Operand<T> {
                fn from(d: $variant<T>) -> Self {
                    Operand::Distribution(AnyDistribution::$variant(d))
                }
            }
        )*
    };
}

impl_from_variant!(Bernoulli, Constant, Discrete, Poisson, Normal, Uniform);

impl<T> From<AnyDistribution<T>> for Operand<T> {
    fn from(d: AnyDistribution<T>) -> Self {
        Operand::Distribution(d)
    }
}

// ── Equality and string form ────────────────────────────────────────

/// Values of different families are never equal.
impl<T: FloatScalar> PartialEq for AnyDistribution<T> {
    fn eq(&self, other: &Self) -> bool {
        use AnyDistribution as D;
        match (self, other) {
            (D::Bernoulli(a), D::Bernoulli(b)) => a == b,
            (D::Constant(a), D::Constant(b)) => a == b,
            (D::Discrete(a), D::Discrete(b)) => a == b,
            (D::Poisson(a), D::Poisson(b)) => a == b,
            (D::Normal(a), D::Normal(b)) => a == b,
            (D::Uniform(a), D::Uniform(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: FloatScalar> fmt::Display for AnyDistribution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDistribution::Bernoulli(d) => fmt::Display::fmt(d, f),
            AnyDistribution::Constant(d) => fmt::Display::fmt(d, f),
            AnyDistribution::Discrete(d) => fmt::Display::fmt(d, f),
            AnyDistribution::Poisson(d) => fmt::Display::fmt(d, f),
            AnyDistribution::Normal(d) => fmt::Display::fmt(d, f),
            AnyDistribution::Uniform(d) => fmt::Display::fmt(d, f),
        }
    }
}
