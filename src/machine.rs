//! Machine constants and the scaling thresholds derived from them.
//!
//! Every overflow/underflow-sensitive routine compares the lazy absolute
//! value `max(|re|, |im|)` of its operand against one of the threshold pairs
//! below. Outside the pair the operand is divided by that lazy absolute
//! value, the operation is performed on the rescaled value, and the scale is
//! recombined into the result.

#![allow(clippy::excessive_precision)]

/// Machine epsilon, 2^-52.
pub const MACH_EPSILON: f64 = 2.220446049250313e-16;
/// Smallest positive normal number, 2^-1022.
pub const MACH_TINY: f64 = 2.2250738585072014e-308;
/// Largest finite number.
pub const MACH_HUGE: f64 = 1.7976931348623157e+308;

/// Below this lazy magnitude `re² + im²` underflows: sqrt(MACH_TINY / 2).
pub const SQUARE_LOW: f64 = 1.0547686614863e-154;
/// Above this lazy magnitude `re² + im²` overflows: sqrt(MACH_HUGE / 2).
pub const SQUARE_HIGH: f64 = 9.480751908109176e+153;

/// Below this lazy magnitude `|z|` itself leaves the normal range:
/// MACH_TINY / (2·√2).
pub const NORM_LOW: f64 = 7.866824069956793e-309;
/// Above this lazy magnitude `|z| ≤ √2·max(|re|,|im|)` may overflow:
/// MACH_HUGE / √2.
pub const NORM_HIGH: f64 = 1.271161006153646e+308;

/// Reciprocal of the largest finite number: 1 / MACH_HUGE.
///
/// Divisors at or below this magnitude have an infinite reciprocal, so
/// real division falls back to dividing each component.
pub const RECIP_HUGE: f64 = 5.562684646268003e-309;

/// ln(MACH_HUGE); `exp(x)` overflows above it.
pub const EXP_OVERFLOW: f64 = 709.782712893384;
/// ln(2·MACH_HUGE); `exp(x - ln 2)·2` overflows above it.
pub const EXP_OVERFLOW_2: f64 = 710.4758600739439;
/// ln(MACH_TINY); `exp(x)` leaves the normal range below it.
pub const EXP_UNDERFLOW: f64 = -708.3964185322641;

/// Exponent step used by the log-sum accumulator when its running product
/// overflows or underflows. 2^1022 is the largest power of two whose
/// reciprocal is still normal.
pub const SCALB_STEP: i32 = 1022;

/// Lazy magnitude at or below which Taylor expansions replace the closed
/// forms of the hyperbolic functions and their inverses.
pub const TAYLOR_LIMIT: f64 = 1.0e-4;

/// `|z|²` above which the inverse functions switch to their logarithmic
/// asymptotes (the `+1`/`-1` inside the square root is below one ulp).
pub const ASYMPTOTIC_SQUARE: f64 = 1.0e18;

/// Real magnitude beyond which `tanh` is ±1 to double precision and
/// `sinh`/`cosh` share the asymptote `±e^(|x| - ln 2)`.
pub const HYPERBOLIC_SATURATION: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_constants_match_std() {
        assert_eq!(MACH_EPSILON, f64::EPSILON);
        assert_eq!(MACH_TINY, f64::MIN_POSITIVE);
        assert_eq!(MACH_HUGE, f64::MAX);
    }

    #[test]
    fn square_thresholds_bracket_overflow() {
        let hi = SQUARE_HIGH * 1.001;
        assert!((hi * hi + hi * hi).is_infinite());
        let ok = SQUARE_HIGH * 0.999;
        assert!((ok * ok + ok * ok).is_finite());

        let lo = SQUARE_LOW * 0.5;
        assert!(lo * lo + lo * lo < MACH_TINY);
    }

    #[test]
    fn exp_thresholds() {
        assert!(EXP_OVERFLOW.exp().is_finite());
        assert!((EXP_OVERFLOW + 1e-3).exp().is_infinite());
        assert!(((EXP_OVERFLOW_2 - 1e-3) - core::f64::consts::LN_2).exp().is_finite());
    }

    #[test]
    fn recip_huge_is_reciprocal_of_max() {
        assert!((1.0 / RECIP_HUGE).is_finite());
        assert!((1.0 / (RECIP_HUGE * 0.5)).is_infinite());
    }
}
