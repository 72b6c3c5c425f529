//! Worst-case noise bounds after each circuit operation.
//!
//! These follow the canonical-embedding style estimates of Iliashenko's
//! thesis as used by Costache, Laine and Player. They are intentionally loose:
//! additions use the triangle inequality and multiplications the product of
//! the input bounds.

use crate::SIGMA;
use crate::error::NoiseError;
use crate::modulus::Modulus;

/// Bound on the noise of a fresh encryption.
pub fn fresh(n: u32, t: u64) -> f64 {
    let n = n as f64;
    let mut inside_sqrt = (4.0 / 3.0) * n + 1.0;
    inside_sqrt *= n * SIGMA * SIGMA;
    inside_sqrt += n / 12.0;
    inside_sqrt.sqrt() * (6.0 * t as f64)
}

/// Bound on the noise of the sum of two ciphertexts.
pub fn add(b1: f64, b2: f64) -> f64 {
    b1 + b2
}

/// Bound on the noise of the product of two ciphertexts.
pub fn mult(b1: f64, b2: f64) -> f64 {
    b1 * b2
}

/// Bound on the noise after switching from modulus `q` down to `p`.
///
/// The input bound is scaled by `p / q` and the rounding error of the switch,
/// which only depends on `n` and `t`, is added.
pub fn mod_switch(n: u32, t: u64, q: &Modulus, p: &Modulus, b: f64) -> Result<f64, NoiseError> {
    let n = n as f64;
    let rounding = (3.0 * n + 2.0 * n * n).sqrt() * t as f64;
    Ok(rounding + p.scale(q, b)?)
}
