//! Reflection term for the polygamma functions.
//!
//! For m ≥ 1,
//!   ψ⁽ᵐ⁾(z) = R_m(z) + (-1)^m ψ⁽ᵐ⁾(1-z),   R_m(z) = -π · dᵐ/dzᵐ cot(πz).
//!
//! Each derivative of `cot` is a polynomial in `cot(πz)` times `csc²(πz)`.
//! Writing it in powers of `cot²`, the coefficients obey a two-term
//! recurrence in m that alternates between an even and an odd rule.

use num_complex::Complex64;

use crate::algo::constants::PI;
use crate::arith::{inv, sq};
use crate::scalar;
use crate::utils::{cot_pi, sin_pi};

/// Coefficients `b_k` of `Σ b_k cot^(2k)` in the m-th cotangent derivative.
///
/// Starts from `[1, 0]` (m = 1, 2) and applies, for n = 3..=m,
///   even n: b'_k = (k+1)(b_k + b_{k+1})
///   odd n:  b'_k = (2k+1)(b_k + b_{k-1})
/// leaving a trailing zero as the padding term of the next step.
fn coefficients(m: i32) -> Vec<f64> {
    let mut b = vec![1.0, 0.0];
    for n in 3..=m {
        let len = ((n + 3) >> 1) as usize;
        let mut next = vec![0.0; len];
        for (k, slot) in next.iter_mut().enumerate().take(len - 1) {
            let kf = k as f64;
            let here = b.get(k).copied().unwrap_or(0.0);
            *slot = if n % 2 == 0 {
                (kf + 1.0) * (here + b.get(k + 1).copied().unwrap_or(0.0))
            } else {
                let prev = if k == 0 { 0.0 } else { b[k - 1] };
                (2.0 * kf + 1.0) * (here + prev)
            };
        }
        b = next;
    }
    b
}

/// `R_m(z) = -π · dᵐ/dzᵐ cot(πz)` for m ≥ 1:
///
///   R_m(z) = 2^⌊m/2⌋ π^(m+1) csc²(πz) Σ_{k ≤ (m-1)/2} b_k cot^(2k)(πz),
///
/// times an extra `-cot(πz)` when m is even.
pub(crate) fn polygamma_reflector(m: i32, z: Complex64) -> Complex64 {
    let b = coefficients(m);
    let cot = cot_pi(z);
    let iter = cot * cot;
    let mut term = sq(inv(sin_pi(z)));
    let mut sum = Complex64::new(0.0, 0.0);
    for &bk in b.iter().take(((m - 1) / 2 + 1) as usize) {
        sum += term * bk;
        term *= iter;
    }
    sum *= scalar::powi(2.0, m >> 1) * scalar::powi(PI, m + 1);
    if m % 2 == 0 { -(sum * cot) } else { sum }
}
