//! Real-valued helpers used throughout the complex layers.
//!
//! The trigonometric wrappers force exact zeros at the floating-point
//! multiples of π and π/2, so that real input to a complex formula stays
//! real (and imaginary input stays imaginary) instead of picking up
//! round-off components of order 1e-16.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::{HALF_PI, LN_2, PI};
use crate::machine::{HYPERBOLIC_SATURATION, TAYLOR_LIMIT};

/// Bernoulli numbers B₀ through B₁₄, with the B₁ = +½ convention.
#[rustfmt::skip]
pub const BERNOULLI: [f64; 15] = [
    1.0,                            // B0
    0.5,                            // B1
    1.0 / 6.0,                      // B2
    0.0,
    -1.0 / 30.0,                    // B4
    0.0,
    1.0 / 42.0,                     // B6
    0.0,
    -1.0 / 30.0,                    // B8
    0.0,
    5.0 / 66.0,                     // B10
    0.0,
    -691.0 / 2730.0,                // B12
    0.0,
    7.0 / 6.0,                      // B14
];

/// Sine that returns exactly 0 at multiples of π.
#[inline]
pub fn safe_sin(x: f64) -> f64 {
    if x % PI == 0.0 {
        return 0.0;
    }
    x.sin()
}

/// Cosine that returns exactly 0 at odd multiples of π/2.
#[inline]
pub fn safe_cos(x: f64) -> f64 {
    if (x % PI).abs() == HALF_PI {
        return 0.0;
    }
    x.cos()
}

/// Tangent that returns exactly 0 at multiples of π and +∞ at odd
/// multiples of π/2.
#[inline]
pub fn safe_tan(x: f64) -> f64 {
    let r = x % PI;
    if r == 0.0 {
        return 0.0;
    }
    if r.abs() == HALF_PI {
        return f64::INFINITY;
    }
    x.tan()
}

/// Safe sine and cosine of the same angle, `(sin x, cos x)`.
///
/// The remainder modulo π is taken once for both exact-zero checks.
#[inline]
pub fn sin_cos(x: f64) -> (f64, f64) {
    let r = x % PI;
    if r == 0.0 {
        return (0.0, x.cos());
    }
    if r.abs() == HALF_PI {
        return (x.sin(), 0.0);
    }
    x.sin_cos()
}

/// `x·r`, except that an exact zero `x` stays zero when `r` is infinite.
#[inline]
pub(crate) fn mul_keep_zero(x: f64, r: f64) -> f64 {
    if x == 0.0 { x } else { x * r }
}

/// Hyperbolic sine and cosine computed together, `(sinh x, cosh x)`.
///
/// - `|x| < 1e-4`: Taylor expansion (no cancellation in `sinh`).
/// - `|x| > 20`: both equal `±e^(|x| - ln 2)` to double precision, which
///   also delays overflow by one binade.
/// - otherwise: one exponential and its reciprocal.
#[inline]
pub fn sinh_cosh(x: f64) -> (f64, f64) {
    let ax = x.abs();
    if ax < TAYLOR_LIMIT {
        let x2 = x * x;
        return (x + x * x2 / 6.0, 1.0 + 0.5 * x2 + x2 * x2 / 24.0);
    }
    if ax > HYPERBOLIC_SATURATION {
        let e = (ax - LN_2).exp();
        return (if x > 0.0 { e } else { -e }, e);
    }
    let e = x.exp();
    let r = 1.0 / e;
    (0.5 * (e - r), 0.5 * (e + r))
}

/// `x^n` by repeated squaring.
///
/// A negative exponent raises the reciprocal of `x`; `i32::MIN` is handled
/// through its unsigned magnitude rather than by negation.
pub fn powi(x: f64, n: i32) -> f64 {
    let base = if n < 0 { 1.0 / x } else { x };
    let mut e = n.unsigned_abs();
    let mut acc = 1.0;
    let mut iter = base;
    while e != 0 {
        if e & 1 == 1 {
            acc *= iter;
        }
        e >>= 1;
        if e != 0 {
            iter *= iter;
        }
    }
    acc
}

/// Signum: -1, 0 or +1. NaN maps to NaN.
#[inline]
pub fn sgn(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Complex-style signum: +1 for `x ≥ 0` (including -0), -1 otherwise.
#[inline]
pub fn csgn(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { -1.0 }
}

/// `n!` as a double.
///
/// Exact up to 22!, correctly rounded products beyond that, `+∞` above 170.
/// Negative `n` sit on the poles of Γ(n+1) and return `-∞` for even `n`,
/// `+∞` for odd `n`.
pub fn factorial(n: i32) -> f64 {
    if n < 0 {
        return if n & 1 == 0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if n > 170 {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, k| acc * f64::from(k))
}

/// Binomial coefficient `n! / (r!(n-r)!)`.
///
/// Zero outside `0 ≤ r ≤ n`. The product runs over the larger of `r` and
/// `n - r` so the fewest multiplications are made.
pub fn choose(n: i32, r: i32) -> f64 {
    if n < 0 || r < 0 || r > n {
        return 0.0;
    }
    let r = if 2 * i64::from(r) < i64::from(n) {
        n - r
    } else {
        r
    };
    let num = ((r + 1)..=n).fold(1.0, |acc, k| acc * f64::from(k));
    num / factorial(n - r)
}

/// Remainder with the sign of the divisor: the result lies in `[0, b)` for
/// positive `b` and in `(b, 0]` for negative `b`.
#[inline]
pub fn mod_pos(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && ((r >= 0.0) != (b >= 0.0)) {
        r + b
    } else {
        r
    }
}
