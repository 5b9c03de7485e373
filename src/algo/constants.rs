//! Mathematical constants shared by the kernels and the public layers.
//!
//! Module-specific tables (Lanczos coefficients, continued-fraction depth)
//! remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub const PI: f64 = 3.14159265358979324e+00;

/// 2π
pub const TWO_PI: f64 = 6.28318530717958648e+00;

/// π/2
pub const HALF_PI: f64 = 1.57079632679489662e+00;

/// √2
pub const ROOT2: f64 = 1.41421356237309505e+00;

/// √π
pub const SQRT_PI: f64 = 1.77245385090551603e+00;

/// √π / 2
pub const HALF_SQRT_PI: f64 = 8.86226925452758014e-01;

/// 2 / √π, leading factor of the erf Taylor series.
pub const TWO_OVER_SQRT_PI: f64 = 1.12837916709551257e+00;

/// 1 / √π, leading factor of the erfc continued fraction.
pub const ONE_OVER_SQRT_PI: f64 = 5.64189583547756287e-01;

/// √(2π), Lanczos prefactor.
pub const SQRT_TWO_PI: f64 = 2.50662827463100050e+00;

/// ln 2
pub const LN_2: f64 = 6.93147180559945309e-01;

/// ln π
pub const LN_PI: f64 = 1.14472988584940017e+00;

/// ln(2π)
pub const LN_TWO_PI: f64 = 1.83787706640934548e+00;

/// log₁₀(e)
pub const LOG10_E: f64 = 4.34294481903251828e-01;

/// e
pub const E: f64 = 2.71828182845904524e+00;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 5.77215664901532861e-01;
