//! Complex hyperbolic sine and cosine, evaluated together.

use num_complex::Complex64;

use crate::scalar;

/// Compute sinh(z) and cosh(z) for complex z = x + iy.
///
/// Returns `(sinh(z), cosh(z))` using the identities:
///   sinh(x+iy) = sinh(x)cos(y) + i·cosh(x)sin(y)
///   cosh(x+iy) = cosh(x)cos(y) + i·sinh(x)sin(y)
///
/// The real factors come from [`scalar::sinh_cosh`] (one exponential,
/// Taylor near zero, saturated asymptote for |x| > 20); the imaginary
/// factors from the exact-zero [`scalar::sin_cos`].
#[inline]
pub(crate) fn sinh_cosh(z: Complex64) -> (Complex64, Complex64) {
    let (sh, ch) = scalar::sinh_cosh(z.re);
    let (sn, cn) = scalar::sin_cos(z.im);
    let csh = Complex64::new(scalar::mul_keep_zero(cn, sh), scalar::mul_keep_zero(sn, ch));
    let cch = Complex64::new(scalar::mul_keep_zero(cn, ch), scalar::mul_keep_zero(sn, sh));
    (csh, cch)
}
