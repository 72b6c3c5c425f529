//! Noise growth estimates for BGV ciphertexts.
//!
//! Two models track a noise metric through the same circuit topology:
//!
//! - **Worst case** ([`WorstCase`]): a deterministic bound on the infinity norm
//!   of the noise, combined with the triangle inequality and product bounds.
//! - **Average case** ([`AverageCase`]): the variance of a zero-mean noise
//!   distribution, turned into a bound by a Gaussian tail argument.
//!
//! Either metric is finally converted into a noise budget:
//!
//! ```text
//! budget = floor(log2(modulus) - log2(bound)) - 1
//! ```
//!
//! Moduli may lie far outside the `f64` range, so they are carried as
//! [`Modulus`] values in mantissa/exponent form.
//!
//! # Circuits
//!
//! | circuit              | stages                                       |
//! |----------------------|----------------------------------------------|
//! | [`Circuit::Clp20`]   | fresh, add, mult, mod_switch (only n > 2048) |
//! | [`Circuit::BgvDeep`] | fresh, mult1, mult2, mult3                   |

pub mod bound;
mod budget;
mod circuit;
mod error;
mod model;
mod modulus;
mod params;
mod tail;
pub mod variance;

pub use budget::noise_budget;
pub use circuit::{
    Circuit, Stage, StageBudget, StageMetric, average_case_bgv_deep, average_case_clp20, estimate,
    worst_case_bgv_deep, worst_case_clp20,
};
pub use error::NoiseError;
pub use model::{AverageCase, Estimate, NoiseModel, WorstCase};
pub use modulus::Modulus;
pub use params::SchemeParams;
pub use tail::{coefficient_failure_complement, erf_inv, erfc_inv, tail_bound};

/// Standard deviation of the error distribution used at encryption.
pub const SIGMA: f64 = 3.19;

/// Per-coefficient failure probability used by the tail bound.
pub const ALPHA: f64 = 0.001;

/// CLP20 evaluates a modulus switch only for ring dimensions above this value.
pub const MOD_SWITCH_THRESHOLD: u32 = 2048;
