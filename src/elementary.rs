//! Exponential, logarithm and powers.

use num_complex::Complex64;

use crate::algo::constants::{E, LN_2, LOG10_E};
use crate::arith::{abs, abs_sq, arg, div_real, inv};
use crate::complex::{polar, ComplexExt};
use crate::machine::{EXP_OVERFLOW, EXP_OVERFLOW_2, NORM_HIGH, NORM_LOW, SQUARE_HIGH, SQUARE_LOW};
use crate::scalar;

/// `e^z`.
///
/// For a real part just past `ln(MAX)` the result is computed as
/// `2·e^(z - ln 2)`, which stays finite whenever `|cos(im)|` or `|sin(im)|`
/// brings the component back below `MAX`. Past `ln(2·MAX)` each component
/// is formed as `±e^(re + ln|cos(im)|)` and `±e^(re + ln|sin(im)|)`. A
/// phasor component that is exactly zero stays zero.
pub fn exp(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(z.re.exp(), 0.0);
    }
    if z.re == 0.0 {
        let (s, c) = scalar::sin_cos(z.im);
        return Complex64::new(c, s);
    }
    if z.re > EXP_OVERFLOW && z.re < EXP_OVERFLOW_2 {
        return exp(Complex64::new(z.re - LN_2, z.im)) * 2.0;
    }
    if z.re >= EXP_OVERFLOW_2 {
        let (s, c) = scalar::sin_cos(z.im);
        return Complex64::new(exp_component(z.re, c), exp_component(z.re, s));
    }
    polar(z.re.exp(), z.im)
}

#[inline]
fn exp_component(re: f64, k: f64) -> f64 {
    if k == 0.0 {
        return k;
    }
    (re + k.abs().ln()).exp().copysign(k)
}

/// Principal natural logarithm, `ln|z| + i·arg(z)`.
///
/// `ln(0) = -∞`. Values whose square leaves the normal range are divided
/// by their lazy absolute value first.
pub fn ln(z: Complex64) -> Complex64 {
    if z.re == 0.0 || z.im == 0.0 {
        return Complex64::new(abs(z).ln(), arg(z));
    }
    if z.is_inf() {
        return Complex64::new(f64::INFINITY, arg(z));
    }

    let l = z.lazy_abs();
    if l <= SQUARE_LOW || l >= SQUARE_HIGH {
        let w = ln(div_real(z, l));
        return Complex64::new(w.re + l.ln(), w.im);
    }
    Complex64::new(0.5 * abs_sq(z).ln(), arg(z))
}

/// Principal base-10 logarithm.
#[inline]
pub fn log10(z: Complex64) -> Complex64 {
    ln(z) * LOG10_E
}

/// `z^n` by repeated squaring.
///
/// Real bases use the scalar routine; a negative exponent inverts the base
/// first. `i32::MIN` is handled through its unsigned magnitude.
pub fn powi(z: Complex64, n: i32) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(scalar::powi(z.re, n), 0.0);
    }

    let mut iter = if n < 0 { inv(z) } else { z };
    let mut e = n.unsigned_abs();
    let mut acc: Option<Complex64> = None;
    while e != 0 {
        if e & 1 == 1 {
            acc = Some(match acc {
                Some(a) => a * iter,
                None => iter,
            });
        }
        e >>= 1;
        if e != 0 {
            iter = iter * iter;
        }
    }
    acc.unwrap_or(Complex64::new(1.0, 0.0))
}

/// `z^a` for real `a`, principal branch.
///
/// Integral exponents go through [`powi`]. Otherwise the magnitude is
/// raised as `(|z|²)^(a/2)` or `|z|^a`, whichever cannot overflow at this
/// scale, and multiplied by the unit phasor at angle `a·arg(z)`.
///
/// A NaN-valued base gives NaN. An infinite base gives `∞` along the
/// direction `a·arg(z)` for `a > 0` and `0` for `a < 0`.
pub fn powf(z: Complex64, a: f64) -> Complex64 {
    if a % 1.0 == 0.0 && a.abs() <= f64::from(i32::MAX) {
        return powi(z, a as i32);
    }
    if z.im == 0.0 && (z.re >= 0.0 || a % 1.0 == 0.0) {
        return Complex64::new(z.re.powf(a), 0.0);
    }
    if z.is_nan_valued() || a.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }
    if z.is_inf() {
        let r = if a > 0.0 { f64::INFINITY } else { 0.0 };
        return polar(r, a * arg(z));
    }

    let l = z.lazy_abs();
    let mag = if (SQUARE_LOW..=SQUARE_HIGH).contains(&l) {
        abs_sq(z).powf(0.5 * a)
    } else if (NORM_LOW..=NORM_HIGH).contains(&l) {
        abs(z).powf(a)
    } else {
        // |z/l| lies in [1, √2]
        abs(div_real(z, l)).powf(a) * l.powf(a)
    };
    polar(mag, a * arg(z))
}

/// `z^a` for complex `a`, principal branch: `exp(a·ln z)`.
///
/// Shortcuts: base `e` gives `exp(a)`, a real exponent defers to [`powf`],
/// and a zero base with `Re(a) > 0` gives 0.
pub fn powc(z: Complex64, a: Complex64) -> Complex64 {
    if z == Complex64::new(E, 0.0) {
        return exp(a);
    }
    if a.im == 0.0 {
        return powf(z, a.re);
    }
    if z.re == 0.0 && z.im == 0.0 && a.re > 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    exp(ln(z) * a)
}
