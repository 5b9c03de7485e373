//! Kernels shared by the error-function family.
//!
//! Near the origin erf is summed from its Maclaurin series. Elsewhere the
//! scaled complement `erfcx(w) = e^(w²) erfc(w)` comes from a continued
//! fraction in the right half-plane, and `e^(-w²)` is applied afterwards
//! through [`mul_exp`], which survives exponents outside the `f64` range.

use num_complex::Complex64;
use num_traits::Zero;

use crate::algo::constants::{ONE_OVER_SQRT_PI, TWO_OVER_SQRT_PI, PI, TWO_PI};
use crate::arith::{abs, arg, inv};
use crate::complex::polar;
use crate::elementary::exp;
use crate::machine::{EXP_OVERFLOW, EXP_UNDERFLOW};
use crate::utils::mul_i;

/// Number of series terms and continued-fraction levels.
const TERMS: usize = 45;
/// Semi-axes of the ellipse inside which the series is used.
const SERIES_RE: f64 = 1.9;
const SERIES_IM: f64 = 4.3;

/// True strictly inside `(x/1.9)² + (y/4.3)² < 1`.
#[inline]
pub(crate) fn in_series_region(z: Complex64) -> bool {
    let a = z.re / SERIES_RE;
    let b = z.im / SERIES_IM;
    a * a + b * b < 1.0
}

/// erf(z) from the series of erfi at `iz`:
///
///   erfi(w) = 2/√π Σ w^(2n+1) / (n! (2n+1)),   erf(z) = -i erfi(iz)
pub(crate) fn erf_series(z: Complex64) -> Complex64 {
    let w = mul_i(z);
    let w2 = w * w;
    let mut term = w;
    let mut sum = Complex64::zero();
    for n in 0..TERMS {
        sum += term / (2 * n + 1) as f64;
        term = term * w2 / (n + 1) as f64;
    }
    let e = sum * TWO_OVER_SQRT_PI;
    Complex64::new(e.im, -e.re)
}

/// erfcx(w) for `Re(w) ≥ 0`, from the continued fraction
///
///   √π erfcx(w) = 1 / (w + (1/2) / (w + (2/2) / (w + (3/2) / ...)))
///
/// evaluated bottom-up from a fixed depth.
pub(crate) fn erfcx_fraction(w: Complex64) -> Complex64 {
    let mut t = w;
    for k in (1..=TERMS).rev() {
        t = w + inv(t) * (0.5 * k as f64);
    }
    inv(t) * ONE_OVER_SQRT_PI
}

/// `-w²` as an exponent for [`mul_exp`].
///
/// The real part is taken as `(y-x)(y+x)`, which is exact on the diagonals
/// where `x² - y²` would be `∞ - ∞`. When `-2xy` overflows the phase has no
/// significant digits left, and each factor is reduced separately so that
/// it stays finite.
pub(crate) fn neg_square(w: Complex64) -> Complex64 {
    let (x, y) = (w.re, w.im);
    let re = if x.abs() == y.abs() {
        0.0
    } else {
        (y - x) * (y + x)
    };
    let mut phase = -2.0 * x * y;
    if phase.is_infinite() {
        phase = -2.0 * x.rem_euclid(PI) * y.rem_euclid(TWO_PI);
    }
    Complex64::new(re, phase)
}

/// `c · e^e` without overflowing or underflowing the intermediate `e^e`.
///
/// When `Re(e)` is outside the range of `exp`, the magnitude is taken as
/// `exp(Re(e) + ln|c|)` and the phase as `arg(c) + Im(e)`.
pub(crate) fn mul_exp(c: Complex64, e: Complex64) -> Complex64 {
    if e.re <= EXP_OVERFLOW && e.re >= EXP_UNDERFLOW {
        return c * exp(e);
    }
    if c.is_zero() {
        return Complex64::zero();
    }
    let r = (e.re + abs(c).ln()).exp();
    if r == 0.0 {
        return Complex64::zero();
    }
    polar(r, arg(c) + e.im)
}
