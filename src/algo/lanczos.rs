//! Lanczos approximation of Γ(z) for Re(z) ≥ 1/2 (g = 7, n = 9).

// Coefficients are the published g=7 values; preserve verbatim.
#![allow(clippy::excessive_precision)]

use num_complex::Complex64;

use crate::algo::constants::SQRT_TWO_PI;
use crate::arith::div;
use crate::elementary::{exp, powc};

/// Leading constant of the rational sum.
const C0: f64 = 0.99999999999980993;

/// Coefficients `c_k` of the terms `c_k / (z + k)`, k = 0..7.
#[rustfmt::skip]
const COEFFS: [f64; 8] = [
     676.5203681218851,
    -1259.1392167224028,
     771.32342877765313,
    -176.61502916214059,
     12.507343278686905,
    -0.13857109526572012,
     9.9843695780195716e-6,
     1.5056327351493116e-7,
];

/// g + 1/2, the offset of the asymptotic factor's base.
const T_SHIFT: f64 = 6.5;

/// Γ(z) = √(2π) · t^(z-1/2) · e^(-t) · (c₀ + Σ c_k/(z+k)),  t = z + 6.5
///
/// Accurate to about 1e-15 relative for Re(z) ≥ 1/2. The power overflows
/// for Re(z) beyond about 142, which the caller handles by recurrence.
pub(crate) fn lanczos(z: Complex64) -> Complex64 {
    let one = Complex64::new(1.0, 0.0);
    let sum = COEFFS
        .iter()
        .enumerate()
        .fold(Complex64::new(C0, 0.0), |acc, (k, &c)| {
            acc + div(one, z + k as f64) * c
        });
    let t = z + T_SHIFT;
    sum * powc(t, z - 0.5) * exp(-t) * SQRT_TWO_PI
}
