use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// ======================== lgamma ========================

#[test]
fn lgamma_factorials() {
    // ln Γ(n) = ln (n-1)!
    approx_eq(lgamma(1.0_f64), 0.0, 1e-14);
    approx_eq(lgamma(2.0_f64), 0.0, 1e-14);
    approx_eq(lgamma(5.0_f64), 24.0_f64.ln(), 1e-13);
    approx_eq(lgamma(11.0_f64), 3628800.0_f64.ln(), 1e-11);
}

#[test]
fn lgamma_half() {
    // Γ(1/2) = √π
    approx_eq(lgamma(0.5_f64), core::f64::consts::PI.sqrt().ln(), 1e-14);
}

#[test]
fn lgamma_poles() {
    assert!(lgamma(0.0_f64).is_infinite());
    assert!(lgamma(-3.0_f64).is_infinite());
    assert!(lgamma(f64::NAN).is_nan());
}

// ======================== incomplete gamma ========================

#[test]
fn gamma_inc_exponential_case() {
    // P(1, x) = 1 − e^{−x}
    for &x in &[0.1_f64, 1.0, 2.5, 10.0] {
        approx_eq(gamma_inc(1.0, x).unwrap(), 1.0 - (-x).exp(), 1e-13);
        approx_eq(gamma_inc_upper(1.0, x).unwrap(), (-x).exp(), 1e-13);
    }
}

#[test]
fn gamma_inc_upper_is_poisson_cdf() {
    // Q(k+1, λ) = Σ_{i ≤ k} λⁱ e^{−λ} / i!
    let lambda = 3.0_f64;
    let mut term = (-lambda).exp();
    let mut cdf = term;
    for k in 0..12_u32 {
        approx_eq(gamma_inc_upper(f64::from(k + 1), lambda).unwrap(), cdf, 1e-12);
        term *= lambda / f64::from(k + 1);
        cdf += term;
    }
}

#[test]
fn gamma_inc_domain() {
    assert_eq!(gamma_inc(0.0_f64, 1.0), Err(SpecialError::DomainError));
    assert_eq!(gamma_inc(1.0_f64, -1.0), Err(SpecialError::DomainError));
    assert_eq!(gamma_inc(2.0_f64, 0.0), Ok(0.0));
    assert_eq!(gamma_inc_upper(2.0_f64, f64::INFINITY), Ok(0.0));
}

#[test]
fn gamma_inc_convergence_failure() {
    // x ≈ a ≫ 1 needs O(√a) series terms
    assert_eq!(gamma_inc_upper(1e12_f64 + 1.0, 1e12), Err(SpecialError::ConvergenceFailure));
    assert_eq!(
        alloc::format!("{}", SpecialError::ConvergenceFailure),
        "series/continued fraction did not converge"
    );
    assert_eq!(alloc::format!("{}", SpecialError::DomainError), "input outside function domain");
}

// ======================== erf ========================

#[test]
fn erf_reference_values() {
    approx_eq(erf(0.0_f64), 0.0, 1e-16);
    approx_eq(erf(0.5_f64), 0.5204998778130465, 1e-13);
    approx_eq(erf(1.0_f64), 0.8427007929497149, 1e-13);
    approx_eq(erf(2.0_f64), 0.9953222650189527, 1e-13);
    approx_eq(erf(7.0_f64), 1.0, 1e-16);
}

#[test]
fn erf_is_odd() {
    for &x in &[0.1_f64, 0.7, 1.3, 3.0] {
        approx_eq(erf(-x), -erf(x), 1e-15);
    }
}

#[test]
fn erfc_complements_erf() {
    for &x in &[-2.0_f64, -0.3, 0.0, 0.4, 1.7] {
        approx_eq(erfc(x), 1.0 - erf(x), 1e-13);
    }
    // upper tail keeps relative precision
    let tail = erfc(5.0_f64);
    assert!((tail - 1.5374597944280349e-12).abs() / tail < 1e-9);
    assert_eq!(erfc(30.0_f64), 0.0);
    assert_eq!(erfc(-30.0_f64), 2.0);
}

#[test]
fn erf_f32() {
    assert!((erf(1.0_f32) - 0.842_700_8).abs() < 1e-5);
}
