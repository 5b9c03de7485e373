//! Classification, validation and total equality for [`Complex64`].
//!
//! The value type is `num_complex::Complex64` itself. This module attaches
//! the predicates the dispatching layers branch on through the
//! [`ComplexExt`] extension trait.

use core::hash::{Hash, Hasher};

use num_complex::Complex64;

use crate::scalar;

/// Predicates and cheap magnitude estimates used to pick a formula.
pub trait ComplexExt {
    /// `im == 0`.
    fn is_real(&self) -> bool;
    /// `re == 0`.
    fn is_imag(&self) -> bool;
    /// Real with an integral real part.
    fn is_integer(&self) -> bool;
    /// Real, integral and non-negative.
    fn is_whole(&self) -> bool;
    /// Real, integral and positive.
    fn is_natural(&self) -> bool;
    /// Either component is ±∞.
    fn is_inf(&self) -> bool;
    /// Either component is NaN.
    fn is_nan_valued(&self) -> bool;
    /// `max(|re|, |im|)`, a magnitude proxy that needs no square root.
    fn lazy_abs(&self) -> f64;
    /// True iff the value is the principal square root of its own square,
    /// that is `re > 0`, or `re == 0` and `im ≥ 0`.
    fn is_root(&self) -> bool;
    /// `z / √(z²)`: +1 when [`is_root`](ComplexExt::is_root), -1 otherwise.
    fn csgn(&self) -> f64;
}

impl ComplexExt for Complex64 {
    #[inline]
    fn is_real(&self) -> bool {
        self.im == 0.0
    }

    #[inline]
    fn is_imag(&self) -> bool {
        self.re == 0.0
    }

    #[inline]
    fn is_integer(&self) -> bool {
        self.im == 0.0 && self.re % 1.0 == 0.0
    }

    #[inline]
    fn is_whole(&self) -> bool {
        self.is_integer() && self.re >= 0.0
    }

    #[inline]
    fn is_natural(&self) -> bool {
        self.is_integer() && self.re > 0.0
    }

    #[inline]
    fn is_inf(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    #[inline]
    fn is_nan_valued(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    #[inline]
    fn lazy_abs(&self) -> f64 {
        self.re.abs().max(self.im.abs())
    }

    #[inline]
    fn is_root(&self) -> bool {
        self.re > 0.0 || (self.re == 0.0 && self.im >= 0.0)
    }

    #[inline]
    fn csgn(&self) -> f64 {
        if self.is_root() { 1.0 } else { -1.0 }
    }
}

/// Normalize the indeterminate pairs produced by `x/0`-style divisions:
/// `NaN ± ∞i` becomes `0 ± ∞i` and `±∞ + NaN·i` becomes `±∞ + 0i`.
///
/// Every other value, including `NaN + NaN·i`, is returned unchanged.
#[inline]
pub fn validate(z: Complex64) -> Complex64 {
    if z.re.is_nan() && z.im.is_infinite() {
        Complex64::new(0.0, z.im)
    } else if z.im.is_nan() && z.re.is_infinite() {
        Complex64::new(z.re, 0.0)
    } else {
        z
    }
}

/// Construct `r·(cos θ + i sin θ)`, validated.
///
/// Uses the exact-zero sine and cosine, so `polar(2.0, π)` is exactly `-2`.
/// A component whose factor is exactly zero stays zero even for `r = ∞`.
pub fn polar(r: f64, theta: f64) -> Complex64 {
    let (s, c) = scalar::sin_cos(theta);
    validate(Complex64::new(
        scalar::mul_keep_zero(c, r),
        scalar::mul_keep_zero(s, r),
    ))
}

/// Construct `re + im·i`, validated.
#[inline]
pub fn checked(re: f64, im: f64) -> Complex64 {
    validate(Complex64::new(re, im))
}

/// A [`Complex64`] with total equality, usable as a `HashMap` key.
///
/// Two keys are equal when their components are bit-equal, or when both
/// values are NaN-valued (either component NaN). `0.0` and `-0.0` are
/// distinct keys.
#[derive(Debug, Clone, Copy)]
pub struct ComplexKey(pub Complex64);

impl PartialEq for ComplexKey {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.0, other.0);
        if a.is_nan_valued() || b.is_nan_valued() {
            return a.is_nan_valued() && b.is_nan_valued();
        }
        a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
    }
}

impl Eq for ComplexKey {}

impl Hash for ComplexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.0.is_nan_valued() {
            // all NaN-valued keys are equal, so they share one hash
            u64::MAX.hash(state);
            u64::MAX.hash(state);
        } else {
            self.0.re.to_bits().hash(state);
            self.0.im.to_bits().hash(state);
        }
    }
}

impl From<Complex64> for ComplexKey {
    fn from(z: Complex64) -> Self {
        ComplexKey(z)
    }
}
