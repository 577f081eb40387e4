use core::fmt::{Debug, Display};
use num_traits::{Float, NumCast};

/// Trait for the floating-point element type of every distribution.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`. `Display` is required so distributions
/// can render their parameters.
pub trait FloatScalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Lift an `f64` literal into `Self`.
    ///
    /// Every `Float` type can represent (a rounding of) any finite `f64`,
    /// so the conversion only falls back to NaN for inputs that have no
    /// representation at all.
    #[inline]
    fn lit(x: f64) -> Self {
        <Self as NumCast>::from(x).unwrap_or_else(Self::nan)
    }

    /// Lift a count into `Self`.
    #[inline]
    fn count(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::infinity)
    }

    /// `0.5`, used all over the place.
    #[inline]
    fn half() -> Self {
        Self::lit(0.5)
    }

    /// `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + Debug + Display + Default + Send + Sync + 'static> FloatScalar for T {}
