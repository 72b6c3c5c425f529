//! Conversion of noise bounds into noise budgets.

use crate::error::NoiseError;
use crate::modulus::Modulus;

/// Bits of headroom left between `bound` and `modulus`, minus one guard bit:
///
/// ```text
/// floor(log2(modulus) - log2(bound)) - 1
/// ```
///
/// A negative budget means decryption is already expected to fail. It is a
/// valid result, not an error.
pub fn noise_budget(bound: f64, modulus: &Modulus) -> Result<i64, NoiseError> {
    if bound.is_infinite() {
        return Err(NoiseError::Overflow("noise bound"));
    }
    if !(bound > 0.0) {
        return Err(NoiseError::NonPositiveBound(bound));
    }
    // the cast saturates for moduli with exponents near the i64 limits
    Ok(((modulus.log2() - bound.log2()).floor() - 1.0) as i64)
}
