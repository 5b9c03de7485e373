//! Option enums and the boundary error type.

use core::fmt;

use num_complex::Complex64;

/// Branch taken by the cube root of a negative real number.
///
/// Complex input always uses the principal branch; the option only decides
/// what happens on the negative real axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CbrtBranch {
    /// The real cube root: `cbrt(-8) = -2`.
    #[default]
    Real,
    /// The principal cube root `exp(ln(z)/3)`: `cbrt(-8) = 1 + √3·i`.
    Principal,
}

/// Error raised when a numeric result is converted at an application
/// boundary with [`finite_or_err`].
///
/// The numeric functions themselves never fail; they encode overflow and
/// indeterminate results as IEEE infinities and NaNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// At least one component is infinite.
    Overflow,
    /// At least one component is NaN.
    Undefined,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            Error::Undefined => {
                write!(f, "undefined: result is indeterminate (NaN)")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Convert a computed value into a `Result`, rejecting non-finite values.
///
/// NaN takes precedence over infinity, so `NaN + ∞i` is `Undefined`.
///
/// # Example
///
/// ```
/// use complex_special::{finite_or_err, gamma, Error};
/// use num_complex::Complex64;
///
/// assert!(finite_or_err(gamma(Complex64::new(5.0, 0.0))).is_ok());
/// assert_eq!(
///     finite_or_err(gamma(Complex64::new(-1.0, 0.0))),
///     Err(Error::Overflow)
/// );
/// ```
pub fn finite_or_err(z: Complex64) -> Result<Complex64, Error> {
    if z.re.is_nan() || z.im.is_nan() {
        Err(Error::Undefined)
    } else if z.re.is_infinite() || z.im.is_infinite() {
        Err(Error::Overflow)
    } else {
        Ok(z)
    }
}
