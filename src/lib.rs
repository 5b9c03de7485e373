//! Overflow-safe complex arithmetic, elementary functions and special
//! functions on [`Complex64`](num_complex::Complex64).
//!
//! The crate covers:
//!
//! - primitive arithmetic (`inv`, `abs`, `sqrt`, `cbrt`, ...) that rescales
//!   its operand instead of overflowing or underflowing in `re² + im²`,
//! - exponential, logarithm and powers, the trigonometric and hyperbolic
//!   families and their inverses on the principal branches,
//! - the Gamma family: [`gamma`], [`loggamma`], [`digamma`], [`polygamma`],
//! - the error-function family: [`erf`], [`erfc`], [`erfcx`], [`erfi`] and
//!   the Fresnel integrals,
//! - [`log_sum`], the sum of many principal logarithms with the winding
//!   offset restored.
//!
//! Errors are values: poles give signed infinities, undefined
//! parameterizations give NaN. [`finite_or_err`] converts such results into
//! a [`Result`] at an application boundary.
//!
//! # Example
//!
//! ```
//! use complex_special::{gamma, ComplexFunctions};
//! use num_complex::Complex64;
//!
//! let z = Complex64::new(0.5, 0.0);
//! assert!((gamma(z).re - std::f64::consts::PI.sqrt()).abs() < 1e-14);
//! assert_eq!(z.erf(), complex_special::erf(z));
//! ```

pub mod arith;
pub mod complex;
pub mod elementary;
pub mod erf;
pub mod gamma;
pub mod logsum;
pub mod machine;
pub mod scalar;
pub mod trig;
pub mod types;

pub(crate) mod algo;
mod utils;

/// Mathematical constants used by the kernels, at full `f64` precision.
pub mod consts {
    pub use crate::algo::constants::{
        E, EULER_GAMMA, HALF_PI, HALF_SQRT_PI, LN_2, LN_PI, LN_TWO_PI, LOG10_E, ONE_OVER_SQRT_PI,
        PI, ROOT2, SQRT_PI, SQRT_TWO_PI, TWO_OVER_SQRT_PI, TWO_PI,
    };
}

pub use arith::{
    abs, abs2, abs_sq, add, arg, cbrt, cbrt_with, ceil, conj, cub, div, div_real, floor, inv,
    modulo, modulo_nearest, mul, neg, rotate, round, scalb, sgn, sq, sqrt, sub,
};
pub use complex::{ComplexExt, ComplexKey, checked, polar, validate};
pub use elementary::{exp, ln, log10, powc, powf, powi};
pub use erf::{erf, erfc, erfcx, erfi, fresnel_c, fresnel_s};
pub use gamma::{digamma, factorial, gamma, log_gamma_reflector, loggamma, polygamma};
pub use logsum::{log_offset, log_sum};
pub use trig::{
    acos, acosh, acot, acoth, acsc, acsch, asec, asech, asin, asinh, atan, atanh, cos, cosh, cot,
    coth, csc, csch, gd, inv_gd, sec, sech, sin, sinh, tan, tanh,
};
pub use types::{CbrtBranch, Error, finite_or_err};

use num_complex::Complex64;

/// Special functions in method form.
///
/// `num_complex` already provides the elementary functions as inherent
/// methods; this trait adds the ones it lacks. Each method forwards to the
/// free function of the same name.
pub trait ComplexFunctions {
    fn gamma(self) -> Self;
    fn loggamma(self) -> Self;
    fn digamma(self) -> Self;
    fn polygamma(self, m: i32) -> Self;
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn erfcx(self) -> Self;
    fn erfi(self) -> Self;
    fn fresnel_c(self) -> Self;
    fn fresnel_s(self) -> Self;
    fn gd(self) -> Self;
    fn inv_gd(self) -> Self;
}

impl ComplexFunctions for Complex64 {
    #[inline]
    fn gamma(self) -> Self {
        gamma::gamma(self)
    }

    #[inline]
    fn loggamma(self) -> Self {
        gamma::loggamma(self)
    }

    #[inline]
    fn digamma(self) -> Self {
        gamma::digamma(self)
    }

    #[inline]
    fn polygamma(self, m: i32) -> Self {
        gamma::polygamma(m, self)
    }

    #[inline]
    fn erf(self) -> Self {
        erf::erf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        erf::erfc(self)
    }

    #[inline]
    fn erfcx(self) -> Self {
        erf::erfcx(self)
    }

    #[inline]
    fn erfi(self) -> Self {
        erf::erfi(self)
    }

    #[inline]
    fn fresnel_c(self) -> Self {
        erf::fresnel_c(self)
    }

    #[inline]
    fn fresnel_s(self) -> Self {
        erf::fresnel_s(self)
    }

    #[inline]
    fn gd(self) -> Self {
        trig::gd(self)
    }

    #[inline]
    fn inv_gd(self) -> Self {
        trig::inv_gd(self)
    }
}
