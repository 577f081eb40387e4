use crate::FloatScalar;
use super::{lanczos_sum, LANCZOS_G};

/// Natural logarithm of the gamma function, ln Γ(x).
///
/// Lanczos approximation in log space, so large arguments such as the
/// `k!` of a far Poisson tail do not overflow. Arguments below 1/2 go
/// through the reflection formula. Non-positive integers are poles and
/// return +∞.
///
/// # Example
///
/// ```
/// use distribution_algebra::special::lgamma;
///
/// assert!(lgamma(1.0_f64).abs() < 1e-14);
/// // ln(100!) without overflow
/// assert!((lgamma(101.0_f64) - 363.73937555556347).abs() < 1e-8);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x <= T::zero() && x == x.floor() {
        return T::infinity();
    }

    let half = T::half();
    if x < half {
        let pi = T::lit(core::f64::consts::PI);
        let sin_pi_x = (pi * x).sin().abs();
        if sin_pi_x == T::zero() {
            return T::infinity();
        }
        return pi.ln() - sin_pi_x.ln() - lgamma(T::one() - x);
    }

    let z = x - T::one();
    let t = z + T::lit(LANCZOS_G) + half;
    let ln_sqrt_2pi = T::lit(0.5 * core::f64::consts::TAU.ln());
    ln_sqrt_2pi + (z + half) * t.ln() - t + lanczos_sum(z).ln()
}
