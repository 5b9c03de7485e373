//! Primitive complex arithmetic with overflow-safe scaling.
//!
//! Every routine whose natural formula squares the operand (`abs`, `inv`,
//! `sqrt`, `cbrt`) first checks the lazy absolute value `L = max(|re|, |im|)`
//! against the thresholds in [`crate::machine`]. Outside them the operand is
//! divided by `L` (or by a power of two), the formula is applied to the
//! rescaled value, and the scale is put back.

use num_complex::Complex64;

use crate::algo::constants::{HALF_PI, PI};
use crate::complex::{polar, ComplexExt};
use crate::machine::{NORM_HIGH, RECIP_HUGE, SQUARE_HIGH, SQUARE_LOW};
use crate::scalar;
use crate::types::CbrtBranch;

// ─── basic operations ───

#[inline]
pub fn add(z: Complex64, w: Complex64) -> Complex64 {
    Complex64::new(z.re + w.re, z.im + w.im)
}

#[inline]
pub fn sub(z: Complex64, w: Complex64) -> Complex64 {
    Complex64::new(z.re - w.re, z.im - w.im)
}

#[inline]
pub fn mul(z: Complex64, w: Complex64) -> Complex64 {
    Complex64::new(z.re * w.re - z.im * w.im, z.re * w.im + z.im * w.re)
}

/// `z / w`, computed as `z · inv(w)`.
///
/// Division by zero follows IEEE semantics component-wise and may produce
/// the indeterminate pairs `NaN ± ∞i` / `±∞ + NaN·i`; pass the result
/// through [`validate`](crate::validate) to normalize them.
#[inline]
pub fn div(z: Complex64, w: Complex64) -> Complex64 {
    mul(z, inv(w))
}

/// `z / a` for real `a`.
///
/// For `|a| ≤ 1/MAX` the reciprocal of `a` is infinite, so each component
/// is divided separately.
#[inline]
pub fn div_real(z: Complex64, a: f64) -> Complex64 {
    if a.abs() <= RECIP_HUGE {
        return Complex64::new(z.re / a, z.im / a);
    }
    let r = 1.0 / a;
    Complex64::new(z.re * r, z.im * r)
}

#[inline]
pub fn neg(z: Complex64) -> Complex64 {
    Complex64::new(-z.re, -z.im)
}

#[inline]
pub fn conj(z: Complex64) -> Complex64 {
    Complex64::new(z.re, -z.im)
}

// ─── magnitude and angle ───

/// `re² + im²`, unscaled.
#[inline]
pub fn abs_sq(z: Complex64) -> f64 {
    z.re * z.re + z.im * z.im
}

/// `|z|`, free of intermediate overflow and underflow.
///
/// `abs` of any infinite value is `+∞`, even when the other component is
/// NaN.
pub fn abs(z: Complex64) -> f64 {
    if z.im == 0.0 {
        return z.re.abs();
    }
    if z.re == 0.0 {
        return z.im.abs();
    }
    if z.is_inf() {
        return f64::INFINITY;
    }

    let l = z.lazy_abs();
    if l <= SQUARE_LOW || l >= SQUARE_HIGH {
        return abs(div_real(z, l)) * l;
    }
    abs_sq(z).sqrt()
}

/// Principal argument in `(-π, π]`. Real input gives exactly 0 or π,
/// imaginary input exactly ±π/2.
pub fn arg(z: Complex64) -> f64 {
    if z.im == 0.0 {
        return if z.re >= 0.0 { 0.0 } else { PI };
    }
    if z.re == 0.0 {
        return if z.im >= 0.0 { HALF_PI } else { -HALF_PI };
    }
    z.im.atan2(z.re)
}

/// `√(z²)` computed by sign flip alone: `z` if `z` is already a principal
/// root, `-z` otherwise.
#[inline]
pub fn abs2(z: Complex64) -> Complex64 {
    if z.is_root() { z } else { neg(z) }
}

/// Multiply `z` by `csgn(w)`.
#[inline]
pub(crate) fn mul_csgn(z: Complex64, w: Complex64) -> Complex64 {
    if w.is_root() { z } else { neg(z) }
}

/// `z / |z|`, with `sgn(0) = 0`.
///
/// An infinite input is first reduced to its direction: infinite components
/// become ±1 and finite ones 0.
pub fn sgn(z: Complex64) -> Complex64 {
    if z.re == 0.0 && z.im == 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    if z.is_inf() {
        let dir = Complex64::new(
            if z.re.is_infinite() { scalar::sgn(z.re) } else { 0.0 },
            if z.im.is_infinite() { scalar::sgn(z.im) } else { 0.0 },
        );
        return div_real(dir, abs(dir));
    }
    div_real(z, abs(z))
}

// ─── reciprocal, powers and roots ───

/// `1 / z`.
///
/// Real and imaginary inputs invert one component; infinite input gives 0.
/// When `|z|²` would leave the normal range the operand is rescaled by its
/// lazy absolute value, twice if even `1/L` would overflow.
pub fn inv(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        return Complex64::new(1.0 / z.re, 0.0);
    }
    if z.re == 0.0 {
        return Complex64::new(0.0, -1.0 / z.im);
    }
    if z.is_inf() {
        return Complex64::new(0.0, 0.0);
    }

    let l = z.lazy_abs();
    if l <= SQUARE_LOW || l >= SQUARE_HIGH {
        if l <= RECIP_HUGE {
            return div_real(inv(div_real(z, l)), l);
        }
        let k = 1.0 / l;
        return inv(z * k) * k;
    }
    let r = 1.0 / abs_sq(z);
    Complex64::new(z.re * r, -z.im * r)
}

/// `z²`, with the real part factored as `(re+im)(re-im)`.
#[inline]
pub fn sq(z: Complex64) -> Complex64 {
    Complex64::new((z.re + z.im) * (z.re - z.im), 2.0 * z.re * z.im)
}

/// `z³`.
#[inline]
pub fn cub(z: Complex64) -> Complex64 {
    mul(z, sq(z))
}

/// Principal square root.
///
/// Of the two half-sum square roots `√((|z|+re)/2)` and `√((|z|-re)/2)`,
/// only the one without cancellation is evaluated; the other component
/// follows from their product being `im/2`. A non-negative imaginary part
/// (including `-0`) selects the upper half-plane root.
pub fn sqrt(z: Complex64) -> Complex64 {
    if z.re == 0.0 && z.im == 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    if z.is_inf() {
        if z.im.is_infinite() {
            return Complex64::new(f64::INFINITY, z.im);
        }
        if z.re == f64::INFINITY {
            return Complex64::new(f64::INFINITY, 0.0);
        }
        return Complex64::new(0.0, scalar::csgn(z.im) * f64::INFINITY);
    }
    if (2.0 * z.re.abs() + z.im.abs()).is_infinite() {
        return sqrt(z * 0.25) * 2.0;
    }

    let part = (0.5 * (abs(z) + z.re.abs())).sqrt();
    if z.re >= 0.0 {
        Complex64::new(part, z.im / (2.0 * part))
    } else {
        let w = Complex64::new(z.im / (2.0 * part), part);
        if z.im >= 0.0 { w } else { neg(w) }
    }
}

/// Cube root using the default [`CbrtBranch::Real`] convention.
#[inline]
pub fn cbrt(z: Complex64) -> Complex64 {
    cbrt_with(z, CbrtBranch::default())
}

/// Cube root with an explicit branch for negative real input.
///
/// Everywhere except the negative real axis both branches give the
/// principal root `cbrt(|z|)·e^(i·arg(z)/3)`.
pub fn cbrt_with(z: Complex64, branch: CbrtBranch) -> Complex64 {
    if z.im == 0.0 && (z.re >= 0.0 || branch == CbrtBranch::Real || z.re.is_nan()) {
        return Complex64::new(z.re.cbrt(), 0.0);
    }
    if z.is_inf() {
        return polar(f64::INFINITY, arg(z) / 3.0);
    }
    if z.lazy_abs() > NORM_HIGH {
        return cbrt_with(z * 0.125, branch) * 2.0;
    }

    let (s, c) = scalar::sin_cos(arg(z) / 3.0);
    Complex64::new(c, s) * abs(z).cbrt()
}

// ─── rotation and exact scaling ───

/// `z · e^(iθ)`.
pub fn rotate(z: Complex64, theta: f64) -> Complex64 {
    let (s, c) = scalar::sin_cos(theta);
    Complex64::new(z.re * c - z.im * s, z.re * s + z.im * c)
}

/// `z · 2^n`, exact unless the result leaves the normal range.
pub fn scalb(z: Complex64, n: i32) -> Complex64 {
    let mut z = z;
    let mut n = n;
    while n > 1023 {
        z *= pow2(1023);
        n -= 1023;
    }
    while n < -1022 {
        z *= pow2(-1022);
        n += 1022;
    }
    z * pow2(n)
}

/// 2^n for n in [-1022, 1023], built from its exponent bits.
#[inline]
fn pow2(n: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&n));
    f64::from_bits(((n + 1023) as u64) << 52)
}

// ─── rounding and remainders ───

/// `⌊re⌋`.
#[inline]
pub fn floor(z: Complex64) -> f64 {
    z.re.floor()
}

/// `⌈re⌉`.
#[inline]
pub fn ceil(z: Complex64) -> f64 {
    z.re.ceil()
}

/// Real part rounded to the nearest integer, ties toward +∞.
#[inline]
pub fn round(z: Complex64) -> f64 {
    let f = z.re.floor();
    if z.re - f >= 0.5 { f + 1.0 } else { f }
}

/// Floored remainder `z - a·⌊Re(z/a)⌋`.
///
/// For real operands the result carries the sign of `a`.
pub fn modulo(z: Complex64, a: Complex64) -> Complex64 {
    let k = floor(div(z, a));
    sub(z, a * k)
}

/// Remainder of least magnitude: `z - a·k` with `k` the integer nearest to
/// `Re(z/a)`, ties going to the lower integer.
///
/// With `a = 2πi` this brings an imaginary part into `(-π, π]`.
pub fn modulo_nearest(z: Complex64, a: Complex64) -> Complex64 {
    let k = (div(z, a).re - 0.5).ceil();
    sub(z, a * k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::validate;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm().max(f64::MIN_POSITIVE)
    }

    // ─── basic operations ───

    #[test]
    fn four_operations() {
        assert_eq!(add(c(1.0, 2.0), c(3.0, -4.0)), c(4.0, -2.0));
        assert_eq!(sub(c(1.0, 2.0), c(3.0, -4.0)), c(-2.0, 6.0));
        assert_eq!(mul(c(1.0, 2.0), c(3.0, -4.0)), c(11.0, 2.0));
        assert_eq!(div(c(1.0, 0.0), c(0.0, 2.0)), c(0.0, -0.5));
        assert!(close(div(c(11.0, 2.0), c(3.0, -4.0)), c(1.0, 2.0), 1e-15));
    }

    #[test]
    fn division_by_zero_is_validatable() {
        let q = div(c(1.0, 0.0), c(0.0, 0.0));
        assert_eq!(q.re, f64::INFINITY);
        assert!(q.im.is_nan());
        assert_eq!(validate(q), c(f64::INFINITY, 0.0));
    }

    #[test]
    fn div_real_tiny_divisor() {
        let q = div_real(c(1e-300, 2e-300), 1e-310);
        assert!((q.re - 1e10).abs() / 1e10 < 1e-10);
        assert!((q.im - 2e10).abs() / 2e10 < 1e-10);
    }

    #[test]
    fn neg_and_conj() {
        assert_eq!(neg(c(1.0, -2.0)), c(-1.0, 2.0));
        assert_eq!(conj(c(1.0, -2.0)), c(1.0, 2.0));
    }

    // ─── abs / arg ───

    #[test]
    fn abs_shortcuts() {
        assert_eq!(abs(c(-3.0, 0.0)), 3.0);
        assert_eq!(abs(c(0.0, -4.0)), 4.0);
        assert_eq!(abs(c(3.0, 4.0)), 5.0);
        assert_eq!(abs(c(f64::NEG_INFINITY, f64::NAN)), f64::INFINITY);
    }

    #[test]
    fn abs_scaled_extremes() {
        let big = abs(c(3e200, 4e200));
        assert!((big - 5e200).abs() / 5e200 < 4e-15);
        let tiny = abs(c(3e-200, 4e-200));
        assert!((tiny - 5e-200).abs() / 5e-200 < 4e-15);
        let sub = abs(c(3e-310, 4e-310));
        assert!((sub - 5e-310).abs() / 5e-310 < 1e-4);
    }

    #[test]
    fn arg_axes() {
        assert_eq!(arg(c(-1.0, 0.0)), PI);
        assert_eq!(arg(c(2.0, 0.0)), 0.0);
        assert_eq!(arg(c(0.0, 0.0)), 0.0);
        assert_eq!(arg(c(0.0, 3.0)), HALF_PI);
        assert_eq!(arg(c(0.0, -3.0)), -HALF_PI);
        assert!((arg(c(1.0, 1.0)) - PI / 4.0).abs() < 1e-16);
    }

    #[test]
    fn abs2_and_sgn() {
        assert_eq!(abs2(c(-1.0, 2.0)), c(1.0, -2.0));
        assert_eq!(abs2(c(0.0, -2.0)), c(-0.0, 2.0));
        assert_eq!(abs2(c(1.0, -2.0)), c(1.0, -2.0));
        assert!(close(sgn(c(3.0, 4.0)), c(0.6, 0.8), 1e-15));
        assert_eq!(sgn(c(0.0, 0.0)), c(0.0, 0.0));
        assert_eq!(sgn(c(f64::NEG_INFINITY, 1.0)), c(-1.0, 0.0));
    }

    // ─── inv ───

    #[test]
    fn inv_shortcuts() {
        assert_eq!(inv(c(4.0, 0.0)), c(0.25, 0.0));
        assert_eq!(inv(c(0.0, 4.0)), c(0.0, -0.25));
        assert_eq!(inv(c(f64::INFINITY, 1.0)), c(0.0, 0.0));
        assert!(close(inv(c(1.0, 1.0)), c(0.5, -0.5), 1e-16));
    }

    #[test]
    fn inv_scaled_extremes() {
        assert!(close(inv(c(1e300, 1e300)), c(5e-301, -5e-301), 1e-15));
        assert!(close(inv(c(1e-200, 1e-200)), c(5e199, -5e199), 1e-15));
        // 1/L itself overflows
        let z = inv(c(3e-309, 4e-309));
        assert!(z.re.is_finite() && z.im.is_finite());
        assert!(z.re > 0.0 && z.im < 0.0);
    }

    // ─── sq / cub ───

    #[test]
    fn squares_and_cubes() {
        assert_eq!(sq(c(1.0, 2.0)), c(-3.0, 4.0));
        assert_eq!(cub(c(1.0, 2.0)), c(-11.0, -2.0));
    }

    // ─── sqrt ───

    #[test]
    fn sqrt_exact_values() {
        assert_eq!(sqrt(c(-4.0, 0.0)), c(0.0, 2.0));
        assert_eq!(sqrt(c(3.0, 4.0)), c(2.0, 1.0));
        assert_eq!(sqrt(c(-3.0, 4.0)), c(1.0, 2.0));
        assert_eq!(sqrt(c(-3.0, -4.0)), c(1.0, -2.0));
        assert_eq!(sqrt(c(0.0, 0.0)), c(0.0, 0.0));
        assert_eq!(sqrt(c(4.0, 0.0)), c(2.0, 0.0));
    }

    #[test]
    fn sqrt_infinite_input() {
        assert_eq!(sqrt(c(f64::INFINITY, 1.0)), c(f64::INFINITY, 0.0));
        assert_eq!(sqrt(c(f64::NEG_INFINITY, 1.0)), c(0.0, f64::INFINITY));
        assert_eq!(sqrt(c(f64::NEG_INFINITY, -1.0)), c(0.0, f64::NEG_INFINITY));
        assert_eq!(sqrt(c(f64::NEG_INFINITY, 0.0)), c(0.0, f64::INFINITY));
        assert_eq!(sqrt(c(1.0, f64::NEG_INFINITY)), c(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn sqrt_huge_input() {
        let z = c(1.5e308, 1.5e308);
        let r = sqrt(z);
        assert!(r.re.is_finite() && r.im.is_finite());
        let back = r * r;
        assert!(close(back * 1e-300, z * 1e-300, 1e-14));
    }

    // ─── cbrt ───

    #[test]
    fn cbrt_branches() {
        assert_eq!(cbrt(c(-8.0, 0.0)), c(-2.0, 0.0));
        let p = cbrt_with(c(-8.0, 0.0), CbrtBranch::Principal);
        assert!(close(p, c(1.0, 3.0_f64.sqrt()), 1e-15));
        assert_eq!(cbrt_with(c(27.0, 0.0), CbrtBranch::Principal), c(3.0, 0.0));
    }

    #[test]
    fn cbrt_complex() {
        let r = cbrt(c(0.0, 8.0));
        assert!(close(r, c(3.0_f64.sqrt(), 1.0), 1e-15));
        let z = c(1.0, -2.0);
        let r = cbrt(z);
        assert!(close(cub(r), z, 1e-14));
    }

    #[test]
    fn cbrt_extremes() {
        assert_eq!(cbrt(c(f64::INFINITY, 2.0)), c(f64::INFINITY, 0.0));
        // principal direction e^(iπ/3)
        assert_eq!(cbrt(c(f64::NEG_INFINITY, 2.0)), c(f64::INFINITY, f64::INFINITY));
        assert_eq!(cbrt(c(f64::NEG_INFINITY, -2.0)), c(f64::INFINITY, f64::NEG_INFINITY));
        let r = cbrt(c(1.7e308, 1.7e308));
        assert!(r.re.is_finite() && r.im.is_finite());
        let expected = 1.7e308_f64.cbrt() * 2.0_f64.sqrt().cbrt();
        assert!((abs(r) - expected).abs() / expected < 1e-14);
    }

    // ─── rotate / scalb ───

    #[test]
    fn rotate_quarter_turn_is_exact() {
        assert_eq!(rotate(c(1.0, 0.0), HALF_PI), c(0.0, 1.0));
        assert_eq!(rotate(c(2.0, 0.0), PI), c(-2.0, 0.0));
    }

    #[test]
    fn scalb_round_trip() {
        let z = c(1.25, -3.5);
        let up = scalb(z, 1100);
        assert!(up.re.is_infinite());
        let z = c(1.25e-300, -3.5e-300);
        let up = scalb(z, 1500);
        assert!(up.re.is_finite());
        assert_eq!(scalb(up, -1500), z);
        assert_eq!(scalb(c(1.0, 1.0), 3), c(8.0, 8.0));
    }

    // ─── rounding / modulo ───

    #[test]
    fn rounding() {
        assert_eq!(floor(c(-1.5, 7.0)), -2.0);
        assert_eq!(ceil(c(-1.5, 7.0)), -1.0);
        assert_eq!(round(c(2.5, 0.0)), 3.0);
        assert_eq!(round(c(-2.5, 0.0)), -2.0);
        assert_eq!(round(c(-2.6, 0.0)), -3.0);
    }

    #[test]
    fn modulo_real() {
        assert_eq!(modulo(c(7.0, 0.0), c(3.0, 0.0)), c(1.0, 0.0));
        assert_eq!(modulo(c(-7.0, 0.0), c(3.0, 0.0)), c(2.0, 0.0));
        assert_eq!(modulo(c(7.0, 0.0), c(-3.0, 0.0)), c(-2.0, 0.0));
    }

    #[test]
    fn modulo_nearest_ties_low() {
        assert_eq!(modulo_nearest(c(5.0, 0.0), c(2.0, 0.0)), c(1.0, 0.0));
        assert_eq!(modulo_nearest(c(8.0, 0.0), c(3.0, 0.0)), c(-1.0, 0.0));
        let two_pi_i = c(0.0, 2.0 * PI);
        let r = modulo_nearest(c(1.0, 7.0), two_pi_i);
        assert!((r.im - (7.0 - 2.0 * PI)).abs() < 1e-15);
        assert_eq!(r.re, 1.0);
    }
}
