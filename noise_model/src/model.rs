//! The two noise models behind a common interface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::modulus::Modulus;
use crate::params::SchemeParams;
use crate::{bound, tail, variance};

/// Propagation of a scalar noise metric through homomorphic operations.
///
/// Circuits are written once against this trait and evaluated with either
/// model.
pub trait NoiseModel {
    /// Metric of a freshly encrypted ciphertext.
    fn fresh(&self, params: &SchemeParams) -> f64;

    /// Metric after adding two ciphertexts.
    fn add(&self, params: &SchemeParams, lhs: f64, rhs: f64) -> f64;

    /// Metric after multiplying two ciphertexts.
    fn mult(&self, params: &SchemeParams, lhs: f64, rhs: f64) -> f64;

    /// Metric after switching from `params.q()` down to `p`.
    fn mod_switch(&self, params: &SchemeParams, p: &Modulus, metric: f64)
    -> Result<f64, NoiseError>;

    /// Bound on the noise magnitude described by `metric`.
    fn to_bound(&self, params: &SchemeParams, metric: f64) -> Result<f64, NoiseError>;
}

/// Deterministic worst-case bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstCase;

impl NoiseModel for WorstCase {
    fn fresh(&self, params: &SchemeParams) -> f64 {
        bound::fresh(params.n(), params.t())
    }

    fn add(&self, _params: &SchemeParams, lhs: f64, rhs: f64) -> f64 {
        bound::add(lhs, rhs)
    }

    fn mult(&self, _params: &SchemeParams, lhs: f64, rhs: f64) -> f64 {
        bound::mult(lhs, rhs)
    }

    fn mod_switch(
        &self,
        params: &SchemeParams,
        p: &Modulus,
        metric: f64,
    ) -> Result<f64, NoiseError> {
        bound::mod_switch(params.n(), params.t(), params.q(), p, metric)
    }

    fn to_bound(&self, _params: &SchemeParams, metric: f64) -> Result<f64, NoiseError> {
        Ok(metric)
    }
}

/// Variances turned into bounds by a Gaussian tail argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageCase;

impl NoiseModel for AverageCase {
    fn fresh(&self, params: &SchemeParams) -> f64 {
        variance::fresh(params.n(), params.t())
    }

    fn add(&self, _params: &SchemeParams, lhs: f64, rhs: f64) -> f64 {
        variance::add(lhs, rhs)
    }

    fn mult(&self, params: &SchemeParams, lhs: f64, rhs: f64) -> f64 {
        variance::mult(lhs, rhs, params.n(), params.t())
    }

    fn mod_switch(
        &self,
        params: &SchemeParams,
        p: &Modulus,
        metric: f64,
    ) -> Result<f64, NoiseError> {
        variance::mod_switch(params.n(), params.t(), params.q(), p, metric)
    }

    fn to_bound(&self, params: &SchemeParams, metric: f64) -> Result<f64, NoiseError> {
        tail::tail_bound(metric, params.n())
    }
}

/// Run-time choice between the two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    WorstCase,
    AverageCase,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::WorstCase => f.write_str("worst-case"),
            Estimate::AverageCase => f.write_str("average-case"),
        }
    }
}
