//! Small shared kernels: multiplication by ±i and trigonometry of πz with
//! exact zeros at the integers and half-integers.

use num_complex::Complex64;

use crate::algo::constants::PI;
use crate::machine::HYPERBOLIC_SATURATION;
use crate::scalar;

/// Multiply a complex number by i: (a+bi)·i = -b+ai.
#[inline]
pub(crate) fn mul_i(c: Complex64) -> Complex64 {
    Complex64::new(-c.im, c.re)
}

/// Multiply a complex number by -i: (a+bi)·(-i) = b-ai.
#[inline]
pub(crate) fn mul_neg_i(c: Complex64) -> Complex64 {
    Complex64::new(c.im, -c.re)
}

/// Compute sin(π·x) with exact values at half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for
/// any integer `n`, and `sinpi(n + 0.5)` is exactly ±1.
#[inline]
pub(crate) fn sinpi(x: f64) -> f64 {
    // sinpi is odd: sinpi(-x) = -sinpi(x)
    let (ax, sign) = if x < 0.0 { (-x, -1.0) } else { (x, 1.0) };

    // Reduce to [0, 2)
    let r = ax % 2.0;

    if r == 0.0 || r == 1.0 {
        return 0.0;
    }
    if r == 0.5 {
        return sign;
    }
    if r == 1.5 {
        return -sign;
    }

    // Use symmetry to reduce to [0, 0.5]
    let s = if r < 0.5 {
        (r * PI).sin()
    } else if r < 1.0 {
        ((1.0 - r) * PI).sin()
    } else if r < 1.5 {
        -((r - 1.0) * PI).sin()
    } else {
        -((2.0 - r) * PI).sin()
    };

    sign * s
}

/// Compute cos(π·x) with exact values at integers and half-integers.
#[inline]
pub(crate) fn cospi(x: f64) -> f64 {
    let r = x.abs() % 2.0;

    if r == 0.0 {
        return 1.0;
    }
    if r == 0.5 || r == 1.5 {
        return 0.0;
    }
    if r == 1.0 {
        return -1.0;
    }

    if r < 0.5 {
        (r * PI).cos()
    } else if r < 1.0 {
        -((1.0 - r) * PI).cos()
    } else if r < 1.5 {
        -((r - 1.0) * PI).cos()
    } else {
        ((2.0 - r) * PI).cos()
    }
}

/// sin(πz) for complex z = x + iy:
///   sin(πz) = sin(πx)·cosh(πy) + i·cos(πx)·sinh(πy)
///
/// A component whose trigonometric factor is exactly zero stays zero even
/// when the hyperbolic factor overflows.
pub(crate) fn sin_pi(z: Complex64) -> Complex64 {
    let sp = sinpi(z.re);
    let cp = cospi(z.re);
    let (sh, ch) = scalar::sinh_cosh(PI * z.im);
    Complex64::new(
        if sp == 0.0 { 0.0 } else { sp * ch },
        if cp == 0.0 { 0.0 } else { cp * sh },
    )
}

/// cot(πz) for complex z = x + iy:
///   cot(πz) = (sin(πx)cos(πx) - i·sinh(πy)cosh(πy)) / (sinh²(πy) + sin²(πx))
///
/// The denominator is the cancellation-free form of
/// `(cosh 2πy - cos 2πx) / 2`. Far from the real axis the imaginary part
/// saturates to `-sgn(y)`.
pub(crate) fn cot_pi(z: Complex64) -> Complex64 {
    let sp = sinpi(z.re);
    let cp = cospi(z.re);
    let (sh, ch) = scalar::sinh_cosh(PI * z.im);
    let den = sh * sh + sp * sp;
    let re = sp * cp / den;
    let im = if (PI * z.im).abs() > HYPERBOLIC_SATURATION {
        -scalar::sgn(z.im)
    } else {
        -sh * ch / den
    };
    Complex64::new(re, im)
}
