//! Trigonometric and hyperbolic functions, their reciprocals and
//! inverses, and the Gudermannian pair.
//!
//! The circular functions are the hyperbolic ones rotated by a quarter
//! turn: `cos z = cosh(iz)`, `sin z = sinh(iz)/i`, `tan z = tanh(iz)/i`,
//! and likewise for the inverses. Each hyperbolic function dispatches on
//! real input, imaginary input, tiny input and huge input before falling
//! back to its closed form.
//!
//! On the branch cuts the inverse functions are continuous from the side
//! the cut is approached counter-clockwise, e.g. `atanh(2) = 0.549 - iπ/2`
//! and `asin(2) = π/2 - 1.317i`.

use num_complex::Complex64;

use crate::algo::constants::{HALF_PI, LN_2, TWO_PI};
use crate::algo::shch;
use crate::arith::{abs2, abs_sq, div, inv, modulo_nearest, mul_csgn, sq, sqrt};
use crate::complex::ComplexExt;
use crate::elementary::ln;
use crate::machine::{ASYMPTOTIC_SQUARE, HYPERBOLIC_SATURATION, TAYLOR_LIMIT};
use crate::scalar;
use crate::utils::{mul_i, mul_neg_i};

// ─── hyperbolic ───

pub fn cosh(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(z.re.cosh(), 0.0);
    }
    if z.re == 0.0 {
        return Complex64::new(scalar::safe_cos(z.im), 0.0);
    }
    shch::sinh_cosh(z).1
}

pub fn sinh(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(z.re.sinh(), 0.0);
    }
    if z.re == 0.0 {
        return Complex64::new(0.0, scalar::safe_sin(z.im));
    }
    shch::sinh_cosh(z).0
}

/// Hyperbolic tangent.
///
///   tanh(x+iy) = (sinh 2x + i·sin 2y) / (cosh 2x + cos 2y)
///
/// For `|x| > 20` the result is `±1` to double precision.
pub fn tanh(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(z.re.tanh(), 0.0);
    }
    if z.re == 0.0 {
        return Complex64::new(0.0, scalar::safe_tan(z.im));
    }
    if z.re.abs() > HYPERBOLIC_SATURATION {
        return Complex64::new(scalar::sgn(z.re), 0.0);
    }

    let (sh, ch) = scalar::sinh_cosh(2.0 * z.re);
    let (s, c) = scalar::sin_cos(2.0 * z.im);
    let d = 1.0 / (ch + c);
    Complex64::new(sh * d, s * d)
}

#[inline]
pub fn sech(z: Complex64) -> Complex64 {
    inv(cosh(z))
}

#[inline]
pub fn csch(z: Complex64) -> Complex64 {
    inv(sinh(z))
}

#[inline]
pub fn coth(z: Complex64) -> Complex64 {
    inv(tanh(z))
}

// ─── circular ───

#[inline]
pub fn cos(z: Complex64) -> Complex64 {
    cosh(mul_i(z))
}

#[inline]
pub fn sin(z: Complex64) -> Complex64 {
    mul_neg_i(sinh(mul_i(z)))
}

#[inline]
pub fn tan(z: Complex64) -> Complex64 {
    mul_neg_i(tanh(mul_i(z)))
}

#[inline]
pub fn sec(z: Complex64) -> Complex64 {
    inv(cos(z))
}

#[inline]
pub fn csc(z: Complex64) -> Complex64 {
    inv(sin(z))
}

#[inline]
pub fn cot(z: Complex64) -> Complex64 {
    inv(tan(z))
}

// ─── inverse hyperbolic ───

/// Inverse hyperbolic cosine, `ln(z + csgn(z)·√(z²-1))`.
pub fn acosh(z: Complex64) -> Complex64 {
    if z.im == 0.0 && z.re.abs() <= 1.0 {
        return Complex64::new(0.0, z.re.acos());
    }
    if abs_sq(z) > ASYMPTOTIC_SQUARE {
        return ln(z) + LN_2;
    }
    let root = sqrt(sq(z) - 1.0);
    ln(z + mul_csgn(root, z))
}

/// Inverse hyperbolic sine, `csgn(z)·ln(√(z²) + √(z²+1))`.
pub fn asinh(z: Complex64) -> Complex64 {
    if z.re == 0.0 && z.im.abs() <= 1.0 {
        return Complex64::new(0.0, z.im.asin());
    }
    if abs_sq(z) > ASYMPTOTIC_SQUARE {
        return mul_csgn(ln(abs2(z)) + LN_2, z);
    }
    if z.lazy_abs() <= TAYLOR_LIMIT {
        return z * (1.0 - sq(z) / 6.0);
    }
    mul_csgn(ln(abs2(z) + sqrt(sq(z) + 1.0)), z)
}

/// Inverse hyperbolic tangent, `½·ln((1+z)/(1-z))`.
///
/// `atanh(±1) = ±∞`. Real input above 1 takes the imaginary part `-π/2`,
/// so that the function stays odd across the cuts.
pub fn atanh(z: Complex64) -> Complex64 {
    if z.im == 0.0 && z.re.abs() == 1.0 {
        return Complex64::new(z.re * f64::INFINITY, 0.0);
    }
    if z.is_inf() {
        let up = z.im > 0.0 || (z.im == 0.0 && z.re <= 1.0);
        return Complex64::new(0.0, if up { HALF_PI } else { -HALF_PI });
    }
    if z.re == 0.0 {
        return Complex64::new(0.0, z.im.atan());
    }
    if z.lazy_abs() <= TAYLOR_LIMIT {
        return z * (1.0 + sq(z) / 3.0);
    }

    let one = Complex64::new(1.0, 0.0);
    let mut w = ln(div(one + z, one - z)) * 0.5;
    if z.im == 0.0 && z.re > 1.0 {
        w.im = -HALF_PI;
    }
    w
}

#[inline]
pub fn asech(z: Complex64) -> Complex64 {
    acosh(inv(z))
}

#[inline]
pub fn acsch(z: Complex64) -> Complex64 {
    asinh(inv(z))
}

#[inline]
pub fn acoth(z: Complex64) -> Complex64 {
    atanh(inv(z))
}

// ─── inverse circular ───

/// Inverse cosine, `π/2 - asin(z)`.
pub fn acos(z: Complex64) -> Complex64 {
    if z.im == 0.0 && z.re.abs() <= 1.0 {
        return Complex64::new(z.re.acos(), 0.0);
    }
    mul_i(asinh(mul_i(z))) + HALF_PI
}

#[inline]
pub fn asin(z: Complex64) -> Complex64 {
    mul_neg_i(asinh(mul_i(z)))
}

#[inline]
pub fn atan(z: Complex64) -> Complex64 {
    mul_neg_i(atanh(mul_i(z)))
}

#[inline]
pub fn asec(z: Complex64) -> Complex64 {
    acos(inv(z))
}

#[inline]
pub fn acsc(z: Complex64) -> Complex64 {
    asin(inv(z))
}

#[inline]
pub fn acot(z: Complex64) -> Complex64 {
    atan(inv(z))
}

// ─── Gudermannian ───

/// Gudermannian function, `gd(z) = 2·atan(tanh(z/2))`:
///
///   gd(x+iy) = atan2(sinh x, cos y) + (i/2)·ln((cosh x + sin y) / (cosh x - sin y))
///
/// Within `1e-4` of the logarithmic singularities at `±iπ/2` (modulo
/// `2πi`) the closed form cancels, and the leading logarithmic term of the
/// local expansion is used instead.
pub fn gd(z: Complex64) -> Complex64 {
    let w = modulo_nearest(z, Complex64::new(0.0, TWO_PI));
    let up = w - Complex64::new(0.0, HALF_PI);
    if up.lazy_abs() < TAYLOR_LIMIT {
        return mul_neg_i(ln(mul_i(w) + HALF_PI)) + Complex64::new(0.0, LN_2);
    }
    let down = w + Complex64::new(0.0, HALF_PI);
    if down.lazy_abs() < TAYLOR_LIMIT {
        return mul_i(ln(mul_neg_i(w) + HALF_PI)) - Complex64::new(0.0, LN_2);
    }

    let (sh, ch) = scalar::sinh_cosh(z.re);
    let (s, c) = scalar::sin_cos(z.im);
    // ln((ch + s) / (ch - s)) stays finite once ch overflows
    Complex64::new(sh.atan2(c), 0.5 * (2.0 * s / (ch - s)).ln_1p())
}

/// Inverse Gudermannian, `gd(iz)/i`.
#[inline]
pub fn inv_gd(z: Complex64) -> Complex64 {
    mul_neg_i(gd(mul_i(z)))
}
