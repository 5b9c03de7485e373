//! Gamma family: Γ, lnΓ, ψ and ψ⁽ᵐ⁾ on the whole complex plane.
//!
//! Every function follows the same dispatch on `Re(z)`:
//!
//! | region              | method                                        |
//! |---------------------|-----------------------------------------------|
//! | `Re(z) < 1/2`       | reflection through `1 - z`                    |
//! | small integers      | exact factorials                              |
//! | otherwise           | Lanczos (Γ) or shifted Stirling series        |
//!
//! Non-positive integers are poles. The value returned there is the limit
//! approached from the right along the real axis: Γ gives `±∞` with the
//! sign of `(-1)^n`, lnΓ gives `+∞`, ψ gives `-∞`, and ψ⁽ᵐ⁾ gives `+∞` for
//! odd m and `-∞` for even m.

use num_complex::Complex64;
use num_traits::One;

use crate::algo::constants::{HALF_PI, LN_PI, LN_TWO_PI, PI};
use crate::algo::lanczos::lanczos;
use crate::algo::reflect::polygamma_reflector;
use crate::algo::stirling;
use crate::arith::{abs2, ceil, div, floor};
use crate::complex::ComplexExt;
use crate::elementary::{exp, ln};
use crate::scalar;
use crate::utils::{cot_pi, mul_neg_i, sin_pi};

/// Largest real part for which Γ is finite in double precision.
const GAMMA_OVERFLOW: f64 = 171.624_376_956_302_7;
/// Above this real part the Lanczos factor `t^(z-1/2)` overflows before
/// `e^(-t)` brings it back; the recurrence climbs from below it instead.
const LANCZOS_LIMIT: f64 = 142.0;
/// Integers below this take the exact factorial path.
const EXACT_LIMIT: f64 = 22.0;
/// Largest polygamma order whose `m!` factor is finite.
const MAX_ORDER: i32 = 170;

#[inline]
fn real(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

#[inline]
fn small_integer(z: Complex64) -> Option<i32> {
    (z.is_integer() && z.re < EXACT_LIMIT).then_some(z.re as i32)
}

/// Gamma function Γ(z).
///
/// # Example
///
/// ```
/// use complex_special::gamma;
/// use num_complex::Complex64;
///
/// assert_eq!(gamma(Complex64::new(5.0, 0.0)), Complex64::new(24.0, 0.0));
/// ```
pub fn gamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        if z.is_integer() {
            return real(if z.re % 2.0 == 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            });
        }
        // Γ(z) = π / (sin(πz) Γ(1-z))
        let g = div(real(PI), sin_pi(z) * gamma(1.0 - z));
        if g.is_nan_valued() {
            return exp(loggamma(z));
        }
        return g;
    }
    if z.re > GAMMA_OVERFLOW {
        return real(f64::INFINITY);
    }
    if z.re > LANCZOS_LIMIT {
        let mut b = Complex64::new(z.re - z.re.floor() + (LANCZOS_LIMIT - 1.0), z.im);
        let mut r = gamma(b);
        while b.re < z.re {
            r *= b;
            b += 1.0;
        }
        return r;
    }
    if let Some(n) = small_integer(z) {
        return real(scalar::factorial(n - 1));
    }
    lanczos(z)
}

/// Factorial of a complex number, `z! = Γ(z+1)`.
#[inline]
pub fn factorial(z: Complex64) -> Complex64 {
    gamma(z + 1.0)
}

/// `lnΓ(z) + lnΓ(1-z)` on the principal branches of both terms.
///
/// Equal to `ln(π / sin(πz))` up to the multiple of `2πi` that keeps the
/// sum continuous off the real axis. Once `sin(πz)` overflows the
/// asymptotic form `iπ·sgn(y)·(z - 1/2) + ln 2π` is used.
pub fn log_gamma_reflector(z: Complex64) -> Complex64 {
    let s = sin_pi(z);
    if s.is_inf() {
        let sign = if z.im >= 0.0 { 1.0 } else { -1.0 };
        return Complex64::new(0.0, PI * sign) * (z - 0.5) + LN_TWO_PI;
    }

    let turns = floor(z) + ceil(z) - 1.0;
    let mut res = LN_PI - ln(abs2(s));
    res.im += HALF_PI * mul_neg_i(z).csgn() * turns;
    if z.re % 1.0 == 0.0 {
        res.im += HALF_PI;
    }
    res
}

/// Principal branch of the log-gamma function.
///
/// Unlike `ln(Γ(z))`, this is analytic everywhere off the non-positive real
/// axis; its imaginary part grows without wrapping.
pub fn loggamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        if z.is_integer() {
            return real(f64::INFINITY);
        }
        return log_gamma_reflector(z) - loggamma(Complex64::one() - z);
    }
    if let Some(n) = small_integer(z) {
        return real(scalar::factorial(n - 1).ln());
    }
    stirling::ln_gamma(z)
}

/// Digamma function ψ(z) = Γ'(z)/Γ(z).
pub fn digamma(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        if z.is_integer() {
            return real(f64::NEG_INFINITY);
        }
        // ψ(z) = ψ(1-z) - π cot(πz)
        return digamma(Complex64::one() - z) - cot_pi(z) * PI;
    }
    stirling::digamma(z)
}

/// Polygamma function ψ⁽ᵐ⁾(z), the m-th derivative of ψ.
///
/// `m = -1` is lnΓ and `m = 0` is ψ. Orders below `-1` are not defined and
/// give NaN. Past order 170 the `m!` factor overflows and the result is
/// the same signed infinity as at a pole.
pub fn polygamma(m: i32, z: Complex64) -> Complex64 {
    match m {
        -1 => return loggamma(z),
        0 => return digamma(z),
        m if m < -1 => return real(f64::NAN),
        _ => {}
    }
    let pole = real(if m % 2 == 1 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    });
    if m > MAX_ORDER {
        return pole;
    }
    if z.re < 0.5 {
        if z.is_integer() {
            return pole;
        }
        let r = polygamma_reflector(m, z);
        let e = polygamma(m, Complex64::one() - z);
        return if m % 2 == 0 { r + e } else { r - e };
    }
    stirling::polygamma(m, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::constants::{EULER_GAMMA, SQRT_PI};
    use num_traits::Zero;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[track_caller]
    fn assert_close(got: Complex64, expected: Complex64, tol: f64) {
        let err = (got - expected).norm() / expected.norm().max(1e-300);
        assert!(err <= tol, "got {got}, expected {expected}, rel err {err:e}");
    }

    // ── gamma ──

    #[test]
    fn gamma_integers_are_exact() {
        assert_eq!(gamma(c(1.0, 0.0)), c(1.0, 0.0));
        assert_eq!(gamma(c(5.0, 0.0)), c(24.0, 0.0));
        assert_eq!(gamma(c(21.0, 0.0)), c(2432902008176640000.0, 0.0));
    }

    #[test]
    fn gamma_half_integers() {
        assert_close(gamma(c(0.5, 0.0)), c(SQRT_PI, 0.0), 1e-14);
        // mpmath
        assert_close(gamma(c(4.5, 0.0)), c(11.631728396567448, 0.0), 2e-15);
        assert_close(gamma(c(-0.5, 0.0)), c(-3.544907701811032, 0.0), 5e-15);
    }

    #[test]
    fn gamma_complex_values() {
        // mpmath
        let cases = [
            (c(0.3, 0.2), c(1.9803581728234425, -1.4145760083733032)),
            (c(2.5, 3.0), c(-0.2181189710811229, 0.07203476340717503)),
            (c(-2.5, 1.0), c(-0.04173662580789361, -0.08636910736976348)),
            (c(-7.7, -4.0), c(-2.2226338853632887e-10, -2.6185994001707796e-09)),
            (c(-20.3, 0.7), c(1.071967061490661e-19, -4.535489068621074e-20)),
        ];
        for (z, expected) in cases {
            assert_close(gamma(z), expected, 1e-14);
        }
    }

    #[test]
    fn gamma_large_arguments() {
        // mpmath
        assert_close(
            gamma(c(30.0, -40.0)),
            c(1.8741997673037803e21, 1.5108445033328678e21),
            5e-13,
        );
        assert_close(
            gamma(c(150.5, 2.0)),
            c(-3.8049212553154668e261, -2.5838920731455783e261),
            5e-13,
        );
        assert_close(gamma(c(171.5, 0.0)), c(9.4833675668248e307, 0.0), 5e-13);
        assert_eq!(gamma(c(171.7, 0.0)), c(f64::INFINITY, 0.0));
    }

    #[test]
    fn gamma_far_left_keeps_tiny_results() {
        // sin(πz)·Γ(1-z) is past √MAX here
        // mpmath
        assert_close(gamma(c(-100.5, 0.0)), c(-3.3536908198076786e-159, 0.0), 1e-12);
        assert_close(
            gamma(c(-120.3, 0.4)),
            c(4.840648199820140e-200, -3.840017455184511e-200),
            1e-12,
        );
    }

    #[test]
    fn gamma_nan_input_is_nan() {
        assert!(gamma(c(f64::NAN, 0.0)).is_nan_valued());
        assert!(gamma(c(f64::NAN, f64::NAN)).is_nan_valued());
        assert!(loggamma(c(f64::NAN, 1.0)).is_nan_valued());
    }

    #[test]
    fn gamma_poles_take_right_limit() {
        assert_eq!(gamma(c(0.0, 0.0)).re, f64::INFINITY);
        assert_eq!(gamma(c(-1.0, 0.0)).re, f64::NEG_INFINITY);
        assert_eq!(gamma(c(-4.0, 0.0)).re, f64::INFINITY);
    }

    #[test]
    fn gamma_far_up_the_imaginary_axis_underflows_cleanly() {
        let g = gamma(c(-0.5, 500.0));
        assert!(!g.is_nan_valued());
        assert!(g.norm() < 1e-300);
    }

    #[test]
    fn gamma_recurrence() {
        let z = c(1.3, -0.8);
        assert_close(gamma(z + 1.0), z * gamma(z), 1e-14);
    }

    #[test]
    fn complex_factorial() {
        assert_eq!(factorial(c(4.0, 0.0)), c(24.0, 0.0));
        // mpmath
        assert_close(
            factorial(c(3.5, 1.0)),
            c(1.7586190839933429, 10.132714461248344),
            1e-14,
        );
    }

    // ── log_gamma_reflector ──

    #[test]
    fn reflector_values() {
        // mpmath: loggamma(z) + loggamma(1-z)
        let cases = [
            (c(0.3, 0.2), c(1.0952339664479744, -0.38447132607624507)),
            (c(-2.5, 1.0), c(-1.3055812884087459, -9.42477796076938)),
            (c(2.2, -0.5), c(0.27965771572547815, -5.382338577871933)),
        ];
        for (z, expected) in cases {
            assert_close(log_gamma_reflector(z), expected, 1e-14);
        }
    }

    #[test]
    fn reflector_asymptotic_form() {
        // mpmath
        assert_close(log_gamma_reflector(c(0.5, 300.0)), c(-940.6399190105286, 0.0), 1e-15);
        assert_close(
            log_gamma_reflector(c(0.25, -300.0)),
            c(-940.6399190105286, 0.7853981633974483),
            1e-15,
        );
    }

    // ── loggamma ──

    #[test]
    fn loggamma_values() {
        // mpmath
        let cases = [
            (c(0.3, 0.2), c(0.8894083505732667, -0.620261006882483)),
            (c(-2.5, 1.0), c(-2.3441906524655924, -8.304127986657926)),
            (c(10.0, 20.0), c(-1.702980443956511, 52.660660425584716)),
            (c(-7.7, -4.0), c(-19.757036956744095, 17.194083822671985)),
            (c(-3.3, 0.0), c(-0.8243558050174264, -12.566370614359172)),
            (c(1e-3, 1e-3), c(6.560604473837553, -0.7859737349296534)),
            (c(-150.3, 2.0), c(-610.9566412866209, -463.72020427392266)),
            (c(1e5, 1e5), c(1007405.0783746975, 1164489.3291652666)),
        ];
        for (z, expected) in cases {
            assert_close(loggamma(z), expected, 1e-14);
        }
    }

    #[test]
    fn loggamma_integers_and_poles() {
        assert_eq!(loggamma(c(1.0, 0.0)), c(0.0, 0.0));
        assert_close(loggamma(c(10.0, 0.0)), c(362880f64.ln(), 0.0), 1e-14);
        assert_eq!(loggamma(c(-2.0, 0.0)), c(f64::INFINITY, 0.0));
    }

    #[test]
    fn loggamma_beyond_gamma_overflow() {
        let z = c(500.0, 0.0);
        let lg = loggamma(z);
        assert!(lg.re.is_finite());
        assert_close(lg - loggamma(z - 1.0), c((499.0f64).ln(), 0.0), 1e-12);
    }

    // ── digamma ──

    #[test]
    fn digamma_values() {
        // mpmath
        let cases = [
            (c(0.3, 0.2), c(-2.453365467675574, 1.7621780903806545)),
            (c(-2.5, 1.0), c(1.1546043967509456, 2.8105638599909457)),
            (c(-3.3, 0.0), c(3.620353460592126, 0.0)),
            (c(0.0, 0.1), c(-0.5652977902171986, 10.163421157465086)),
            (c(-0.5, 0.0), c(0.03648997397857652, 0.0)),
        ];
        for (z, expected) in cases {
            assert_close(digamma(z), expected, 1e-14);
        }
        assert_close(digamma(c(1.0, 0.0)), c(-EULER_GAMMA, 0.0), 1e-14);
    }

    #[test]
    fn digamma_poles() {
        assert_eq!(digamma(c(0.0, 0.0)).re, f64::NEG_INFINITY);
        assert_eq!(digamma(c(-3.0, 0.0)).re, f64::NEG_INFINITY);
    }

    #[test]
    fn digamma_continuous_across_reflection_line() {
        let below = digamma(c(0.5 - 1e-12, 0.7));
        let above = digamma(c(0.5 + 1e-12, 0.7));
        assert_close(below, above, 1e-10);
    }

    // ── polygamma ──

    #[test]
    fn polygamma_dispatch() {
        let z = c(1.7, -0.4);
        assert_eq!(polygamma(-1, z), loggamma(z));
        assert_eq!(polygamma(0, z), digamma(z));
        assert!(polygamma(-2, z).is_nan_valued());
    }

    #[test]
    fn polygamma_values() {
        // mpmath
        let cases = [
            (2, c(0.3, 0.2), c(7.125558239751953, 42.32270025304033)),
            (3, c(-2.5, 1.0), c(-2.9032639066963832, -0.04904306601014061)),
            (4, c(2.5, 3.0), c(0.027076794226081384, -0.024131008240986265)),
            (1, c(-3.3, 0.0), c(14.817739525515929, 0.0)),
            (1, c(0.5, 0.0), c(4.934802200544679, 0.0)),
        ];
        for (m, z, expected) in cases {
            assert_close(polygamma(m, z), expected, 1e-14);
        }
    }

    #[test]
    fn polygamma_high_order_left_half_plane() {
        // mpmath; the reflector cancels heavily at these orders
        assert_close(
            polygamma(7, c(-7.7, -4.0)),
            c(0.0001253307139793595, -2.99365352325655e-05),
            1e-11,
        );
        assert_close(polygamma(10, c(-0.5, 0.0)), c(-42108.85876897549, 0.0), 1e-9);
    }

    #[test]
    fn polygamma_poles() {
        assert_eq!(polygamma(1, c(-2.0, 0.0)).re, f64::INFINITY);
        assert_eq!(polygamma(2, c(0.0, 0.0)).re, f64::NEG_INFINITY);
    }

    #[test]
    fn polygamma_order_past_factorial_range() {
        assert_eq!(polygamma(i32::MAX, c(0.3, 0.2)), c(f64::INFINITY, 0.0));
        assert_eq!(polygamma(i32::MAX - 1, c(-4.5, 1.0)), c(f64::NEG_INFINITY, 0.0));
        assert!(polygamma(MAX_ORDER, c(2.0, 0.0)).re.is_finite());
    }

    #[test]
    fn trigamma_at_one() {
        assert_close(polygamma(1, c(1.0, 0.0)), c(PI * PI / 6.0, 0.0), 1e-14);
    }

    #[test]
    fn zero_is_zero() {
        assert!(loggamma(c(2.0, 0.0)).is_zero());
    }
}
