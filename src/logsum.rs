//! Sums of principal logarithms of many factors, taken as one logarithm
//! of their product.
//!
//! `Σ ln(zₖ)` differs from `ln(Π zₖ)` by an integer multiple of `2πi`, the
//! winding offset. The running product is folded left to right. Each time
//! two factors on the same side of the real axis produce a product on the
//! opposite side, the offset moves by one. A product that underflows to 0
//! or overflows to ∞ is recomputed with the accumulator rescaled by
//! `2^±1022`, and the rescales are counted so that `1022·ln 2` per step
//! can be restored at the end.

use num_complex::Complex64;

use crate::algo::constants::{LN_2, TWO_PI};
use crate::arith::scalb;
use crate::complex::ComplexExt;
use crate::elementary::ln;
use crate::machine::SCALB_STEP;

/// Accumulator carried through the fold.
#[derive(Debug, Clone, Copy)]
struct Winding {
    /// Running product, scaled by `2^(-1022·scale)`.
    prod: Complex64,
    /// Net number of `2^1022` factors removed from `prod`.
    scale: i32,
    /// Winding offset in units of `2πi`.
    offset: i64,
}

/// Upper side of the cut: `arg(z) ∈ (0, π]`.
#[inline]
fn upper(z: Complex64) -> bool {
    z.im > 0.0 || (z.im == 0.0 && z.re < 0.0)
}

impl Winding {
    fn new() -> Self {
        Winding {
            prod: Complex64::new(1.0, 0.0),
            scale: 0,
            offset: 0,
        }
    }

    fn push(mut self, f: Complex64) -> Self {
        let before = upper(self.prod);
        let side = upper(f);

        let mut p = self.prod * f;
        if p.re == 0.0 && p.im == 0.0 && !(f.re == 0.0 && f.im == 0.0) {
            p = scalb(self.prod, SCALB_STEP) * f;
            self.scale -= 1;
        } else if p.is_inf() && !f.is_inf() {
            p = scalb(self.prod, -SCALB_STEP) * f;
            self.scale += 1;
        }
        self.prod = p;

        let after = upper(p);
        if before && side && !after {
            self.offset += 1;
        } else if !before && !side && after {
            self.offset -= 1;
        }
        self
    }

    fn fold(factors: &[Complex64]) -> Self {
        match factors.split_first() {
            None => Winding::new(),
            Some((&first, rest)) => rest.iter().fold(
                Winding {
                    prod: first,
                    scale: 0,
                    offset: 0,
                },
                |acc, &f| acc.push(f),
            ),
        }
    }
}

/// Winding offset `n` such that `Σ ln(zₖ) = ln(Π zₖ) + 2πi·n`, where the
/// product is the one accumulated by [`log_sum`].
pub fn log_offset(factors: &[Complex64]) -> i64 {
    Winding::fold(factors).offset
}

/// `Σ ln(zₖ)` computed with a single logarithm.
///
/// The empty sum is 0.
pub fn log_sum(factors: &[Complex64]) -> Complex64 {
    let w = Winding::fold(factors);
    let mut l = ln(w.prod);
    l.re += f64::from(w.scale) * f64::from(SCALB_STEP) * LN_2;
    l.im += TWO_PI * w.offset as f64;
    l
}
