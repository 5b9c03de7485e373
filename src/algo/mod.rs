//! Internal numerical kernels.
//!
//! Everything here is `pub(crate)`. The public modules do the dispatch on
//! the input (reflection, poles, axis shortcuts) and call into these
//! routines only inside the region where each one is accurate.
//!
//! # Clippy suppressions
//!
//! `lanczos` and `stirling` carry `#![allow(clippy::excessive_precision)]`:
//! their coefficient tables are transcribed at full precision and must not
//! be rounded.

pub(crate) mod constants;

// Gamma family
pub(crate) mod lanczos;
pub(crate) mod reflect;
pub(crate) mod stirling;

// Error-function family
pub(crate) mod erfcore;

// Hyperbolic pair shared by the trigonometric layer
pub(crate) mod shch;
