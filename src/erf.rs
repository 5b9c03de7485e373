//! Error function family and the Fresnel integrals.
//!
//! `erf`, `erfc` and `erfcx` share one evaluation: the Maclaurin series
//! inside the ellipse `(x/1.9)² + (y/4.3)² < 1`, and outside it the
//! continued fraction for `erfcx` at `w = ±z` (whichever has `Re(w) ≥ 0`).
//! The three results differ only in the correction applied to that core.

use num_complex::Complex64;

use crate::algo::constants::HALF_SQRT_PI;
use crate::algo::erfcore::{erf_series, erfcx_fraction, in_series_region, mul_exp, neg_square};
use crate::elementary::exp;
use crate::utils::{mul_i, mul_neg_i};

/// Which member of the family to produce from the shared core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Erf,
    Erfc,
    Erfcx,
}

fn evaluate(z: Complex64, variant: Variant) -> Complex64 {
    if in_series_region(z) {
        let e = erf_series(z);
        return match variant {
            Variant::Erf => e,
            Variant::Erfc => 1.0 - e,
            Variant::Erfcx => (1.0 - e) * exp(z * z),
        };
    }

    // erfc(-w) = 2 - erfc(w)
    let flip = z.re < 0.0;
    let w = if flip { -z } else { z };
    let cx = erfcx_fraction(w);

    let mut r = match variant {
        Variant::Erfcx if flip => mul_exp(Complex64::new(2.0, 0.0), -neg_square(z)) - cx,
        Variant::Erfcx => cx,
        _ => {
            let c = mul_exp(cx, neg_square(w));
            match (variant, flip) {
                (Variant::Erfc, true) => 2.0 - c,
                (Variant::Erfc, false) => c,
                (_, true) => c - 1.0,
                (_, false) => 1.0 - c,
            }
        }
    };

    // On the imaginary axis the real parts are known exactly.
    if z.re == 0.0 {
        r.re = match variant {
            Variant::Erf => 0.0,
            Variant::Erfc => 1.0,
            Variant::Erfcx => (-z.im * z.im).exp(),
        };
    }
    r
}

/// Error function, `erf(z) = 2/√π ∫₀ᶻ e^(-t²) dt`.
///
/// # Example
///
/// ```
/// use complex_special::erf;
/// use num_complex::Complex64;
///
/// let e = erf(Complex64::new(1.0, 0.0));
/// assert!((e.re - 0.8427007929497149).abs() < 1e-15);
/// ```
pub fn erf(z: Complex64) -> Complex64 {
    evaluate(z, Variant::Erf)
}

/// Complementary error function, `erfc(z) = 1 - erf(z)`.
///
/// Computed directly rather than by subtraction, so it keeps full relative
/// accuracy where `erf(z)` is close to 1.
pub fn erfc(z: Complex64) -> Complex64 {
    evaluate(z, Variant::Erfc)
}

/// Scaled complementary error function, `erfcx(z) = e^(z²) erfc(z)`.
///
/// Stays representable for large positive real parts, where `erfc`
/// underflows.
pub fn erfcx(z: Complex64) -> Complex64 {
    evaluate(z, Variant::Erfcx)
}

/// Imaginary error function, `erfi(z) = -i erf(iz)`.
pub fn erfi(z: Complex64) -> Complex64 {
    mul_neg_i(erf(mul_i(z)))
}

/// `erf(Rz)` and `erf(Lz)` with `R = (1+i)√π/2` and `L = (1-i)√π/2`.
fn fresnel_parts(z: Complex64) -> (Complex64, Complex64) {
    let r = Complex64::new(HALF_SQRT_PI, HALF_SQRT_PI);
    let l = Complex64::new(HALF_SQRT_PI, -HALF_SQRT_PI);
    (erf(r * z), erf(l * z))
}

/// Fresnel cosine integral `C(z) = ∫₀ᶻ cos(πt²/2) dt`.
pub fn fresnel_c(z: Complex64) -> Complex64 {
    let (a, b) = fresnel_parts(z);
    let mut res = Complex64::new(0.25, -0.25) * (a + mul_i(b));
    if z.im == 0.0 {
        res.im = 0.0;
    }
    res
}

/// Fresnel sine integral `S(z) = ∫₀ᶻ sin(πt²/2) dt`.
pub fn fresnel_s(z: Complex64) -> Complex64 {
    let (a, b) = fresnel_parts(z);
    let mut res = Complex64::new(0.25, 0.25) * (a - mul_i(b));
    if z.im == 0.0 {
        res.im = 0.0;
    }
    res
}
