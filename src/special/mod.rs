//! Special functions behind the closed-form distribution results.
//!
//! Generic over [`FloatScalar`] (f32/f64), no-std compatible, stack-only.
//!
//! | Function | Used by |
//! |----------|---------|
//! | [`lgamma`] | Poisson mass ln(λᵏ e^{−λ} / k!) |
//! | [`gamma_inc`] / [`gamma_inc_upper`] | Poisson CDF, error function |
//! | [`erf`] / [`erfc`] | Normal CDF |
//!
//! # Example
//!
//! ```
//! use distribution_algebra::special::{erf, lgamma};
//!
//! // ln Γ(5) = ln 24
//! assert!((lgamma(5.0_f64) - 24.0_f64.ln()).abs() < 1e-12);
//! assert!(erf(0.0_f64).abs() < 1e-16);
//! ```

use crate::FloatScalar;

mod error_fn;
mod gamma_fn;
mod incgamma;

#[cfg(test)]
mod tests;

pub use error_fn::{erf, erfc};
pub use gamma_fn::lgamma;
pub use incgamma::{gamma_inc, gamma_inc_upper};

/// Errors from the special functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpecialError {
    /// Series or continued fraction did not converge within the iteration limit.
    #[error("series/continued fraction did not converge")]
    ConvergenceFailure,
    /// Input outside the function's domain (a ≤ 0 or x < 0 for incomplete gamma).
    #[error("input outside function domain")]
    DomainError,
}

// Lanczos approximation, g = 7, n = 9 (Godfrey's coefficients).
const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(T::lit(LANCZOS_COEFFS[0]), |acc, (i, &c)| {
            acc + T::lit(c) / (z + T::count(i + 1))
        })
}
