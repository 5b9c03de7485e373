//! Stirling asymptotic series for lnΓ(z), ψ(z) and ψ⁽ᵐ⁾(z), with an
//! upward recurrence shift into the region where the series converges.
//!
//! Valid for Re(z) ≥ 1/2; the left half-plane is reflected by the caller.

// Constants and tables are exact rational values, preserve verbatim.
#![allow(clippy::excessive_precision)]

use num_complex::Complex64;

use crate::algo::constants::LN_TWO_PI;
use crate::arith::{abs, inv};
use crate::elementary::{ln, powi};
use crate::logsum::log_sum;
use crate::scalar::{self, BERNOULLI};

/// Coefficients of the asymptotic expansion for ln(Γ(z)):
///   CF(k) = B_{2k} / (2k * (2k-1))
/// for k = 1, ..., 7.
#[rustfmt::skip]
const CF_TABLE: [f64; 7] = [
     8.33333333333333333e-02,   // B2/(1*2)    = 1/12
    -2.77777777777777778e-03,   // B4/(3*4)    = -1/360
     7.93650793650793651e-04,   // B6/(5*6)
    -5.95238095238095238e-04,   // B8/(7*8)
     8.41750841750841751e-04,   // B10/(9*10)
    -1.91752691752691753e-03,   // B12/(11*12)
     6.41025641025641026e-03,   // B14/(13*14)
];

/// Number of recurrence steps needed before the series is evaluated.
///
/// The series for the m-th derivative is used directly when
/// `|z| ≥ 10 + 2·max(m, 0)`; otherwise z is moved right until its real part
/// reaches that bound. `m = -1` selects lnΓ, `m = 0` selects ψ.
pub(crate) fn shift(z: Complex64, m: i32) -> usize {
    let bound = 10.0 + 2.0 * f64::from(m.max(0));
    if abs(z) >= bound {
        return 0;
    }
    (bound - z.re).ceil().max(0.0) as usize
}

/// lnΓ(z) ≈ (z - ½)·ln z - z + ½·ln(2π) + Σ CF(k) / z^(2k-1)
fn ln_gamma_series(z: Complex64) -> Complex64 {
    let r = inv(z);
    let r2 = r * r;
    let mut term = r;
    let mut sum = (z - 0.5) * ln(z) - z + 0.5 * LN_TWO_PI;
    for cf in CF_TABLE {
        sum += term * cf;
        term *= r2;
    }
    sum
}

/// ψ(z) ≈ ln z - 1/(2z) - Σ B_{2k} / (2k · z^(2k))
fn digamma_series(z: Complex64) -> Complex64 {
    let r = inv(z);
    let r2 = r * r;
    let mut term = r2;
    let mut sum = ln(z) - r * 0.5;
    for n in (2..15).step_by(2) {
        sum -= term * (BERNOULLI[n] / n as f64);
        term *= r2;
    }
    sum
}

/// (-1)^(m+1) ψ⁽ᵐ⁾(z) ≈ -(m-1)!/z^m · (1 + m/(2z)) - Σ B_{2k} (2k+m-1)!/((2k)! z^(2k+m))
///
/// The factorial ratio is carried as a running product.
fn polygamma_series(m: i32, z: Complex64) -> Complex64 {
    let r = inv(z);
    let r2 = r * r;
    let mut term = powi(r, m);
    let mut f = scalar::factorial(m - 1);
    let mut sum = -(term * (1.0 + r * (0.5 * f64::from(m)))) * f;
    for k in (2..15).step_by(2) {
        let kf = k as f64;
        let mf = f64::from(m);
        term *= r2;
        f *= (kf + mf - 1.0) * (kf + mf - 2.0) / (kf * (kf - 1.0));
        sum -= term * (BERNOULLI[k] * f);
    }
    sum
}

/// lnΓ(z) for Re(z) ≥ 1/2:
///   lnΓ(z) = lnΓ(z+n) - Σ_{k<n} ln(z+k)
///
/// The correction sum is taken as one logarithm of the product, with the
/// winding of the partial products restored.
pub(crate) fn ln_gamma(z: Complex64) -> Complex64 {
    let n = shift(z, -1);
    if n == 0 {
        return ln_gamma_series(z);
    }
    let factors: Vec<Complex64> = (0..n).map(|k| z + k as f64).collect();
    ln_gamma_series(z + n as f64) - log_sum(&factors)
}

/// ψ(z) for Re(z) ≥ 1/2:  ψ(z) = ψ(z+n) - Σ_{k<n} 1/(z+k)
pub(crate) fn digamma(z: Complex64) -> Complex64 {
    let n = shift(z, 0);
    (0..n).fold(digamma_series(z + n as f64), |acc, k| {
        acc - inv(z + k as f64)
    })
}

/// ψ⁽ᵐ⁾(z) for m ≥ 1 and Re(z) ≥ 1/2:
///   ψ⁽ᵐ⁾(z) = ψ⁽ᵐ⁾(z+n) + (-1)^(m+1) m! Σ_{k<n} 1/(z+k)^(m+1)
pub(crate) fn polygamma(m: i32, z: Complex64) -> Complex64 {
    let n = shift(z, m);
    let f = scalar::factorial(m);
    let eval = (0..n).fold(polygamma_series(m, z + n as f64), |acc, k| {
        acc - inv(powi(z + k as f64, m + 1)) * f
    });
    if m % 2 == 1 { -eval } else { eval }
}
