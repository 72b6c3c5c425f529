//! Average-case noise variances after each circuit operation.
//!
//! Noise coefficients are modelled as independent zero-mean random variables
//! and plaintext coefficients as uniform over `[0, t)`, whose second moment is
//! `(t^2 - 1) / 12`.

use crate::SIGMA;
use crate::error::NoiseError;
use crate::modulus::Modulus;

/// Variance of the noise of a fresh encryption.
pub fn fresh(n: u32, t: u64) -> f64 {
    let t = t as f64;
    ((4.0 / 3.0) * n as f64 + 1.0) * t * t * SIGMA * SIGMA
}

/// Variance of the noise of the sum of two ciphertexts.
pub fn add(v1: f64, v2: f64) -> f64 {
    v1 + v2
}

/// Variance of the noise of the product of two ciphertexts.
///
/// The first term is the product of both noises, the other two are each
/// noise multiplied by the other operand's plaintext.
pub fn mult(v1: f64, v2: f64, n: u32, t: u64) -> f64 {
    let n = n as f64;
    let plaintext_moment = plaintext_second_moment(t);
    let noise_by_noise = n * v1 * v2;
    let noise_by_rhs_plaintext = v1 * n * plaintext_moment;
    let noise_by_lhs_plaintext = v2 * n * plaintext_moment;
    noise_by_noise + noise_by_rhs_plaintext + noise_by_lhs_plaintext
}

/// Variance of the noise after switching from modulus `q` down to `p`.
pub fn mod_switch(n: u32, t: u64, q: &Modulus, p: &Modulus, v: f64) -> Result<f64, NoiseError> {
    let scaled = p.scale(q, p.scale(q, v)?)?;
    let t_squared_minus_one = (t as f64) * (t as f64) - 1.0;
    let rounding = (1.0 / 12.0) * ((2.0 / 3.0) * n as f64 + 1.0) * t_squared_minus_one;
    Ok(rounding + scaled)
}

fn plaintext_second_moment(t: u64) -> f64 {
    (1.0 / 12.0) * ((t as f64) * (t as f64) - 1.0)
}
