//! BGV scheme parameters.

use crate::MOD_SWITCH_THRESHOLD;
use crate::error::NoiseError;
use crate::modulus::Modulus;

/// Scheme parameters `(n, t, q, p)` for a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeParams {
    n: u32,
    t: u64,
    q: Modulus,
    p: Option<Modulus>,
}

impl SchemeParams {
    /// Validate and build a parameter set.
    ///
    /// `p` is the modulus reached by a modulus switch; `None` marks parameter
    /// sets that do not support one.
    pub fn new(n: u32, t: u64, q: Modulus, p: Option<Modulus>) -> Result<Self, NoiseError> {
        if !n.is_power_of_two() {
            return Err(NoiseError::InvalidRingDimension(n));
        }
        if t < 2 {
            return Err(NoiseError::InvalidPlaintextModulus(t));
        }
        Ok(Self { n, t, q, p })
    }

    /// Ring dimension.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Plaintext modulus.
    pub fn t(&self) -> u64 {
        self.t
    }

    /// Ciphertext modulus.
    pub fn q(&self) -> &Modulus {
        &self.q
    }

    /// Modulus-switch target, if any.
    pub fn p(&self) -> Option<&Modulus> {
        self.p.as_ref()
    }

    /// The modulus a CLP20 evaluation switches to, when it switches at all.
    pub fn mod_switch_modulus(&self) -> Option<&Modulus> {
        self.p.as_ref().filter(|_| self.n > MOD_SWITCH_THRESHOLD)
    }
}
