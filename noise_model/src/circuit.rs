//! Circuit evaluators.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::budget::noise_budget;
use crate::error::NoiseError;
use crate::model::{AverageCase, Estimate, NoiseModel, WorstCase};
use crate::modulus::Modulus;
use crate::params::SchemeParams;

/// Number of successive squarings in the deep circuit.
const BGV_DEEP_SQUARINGS: u8 = 3;

/// The computations whose noise is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Circuit {
    /// `fresh -> add(fresh, fresh) -> mult(add, fresh) -> [mod_switch]`, from
    /// Costache, Laine and Player (2020).
    Clp20,
    /// `fresh -> mult(fresh, fresh) -> mult(m1, m1) -> mult(m2, m2)`.
    BgvDeep,
}

/// A step of a circuit after which the noise is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fresh,
    Add,
    Mult,
    ModSwitch,
    /// The k-th successive squaring of the deep circuit.
    Squaring(u8),
}

/// Noise metric after a stage, with the modulus its budget is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageMetric {
    pub stage: Stage,
    pub metric: f64,
    pub modulus: Modulus,
}

/// Noise budget remaining after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageBudget {
    pub stage: Stage,
    pub budget: i64,
}

impl Circuit {
    /// Propagate the model's metric through the circuit, one entry per stage.
    pub fn trace<M: NoiseModel>(
        self,
        model: &M,
        params: &SchemeParams,
    ) -> Result<Vec<StageMetric>, NoiseError> {
        match self {
            Circuit::Clp20 => clp20(model, params),
            Circuit::BgvDeep => Ok(bgv_deep(model, params)),
        }
    }

    /// Noise budget after every stage of the circuit.
    pub fn budgets<M: NoiseModel>(
        self,
        model: &M,
        params: &SchemeParams,
    ) -> Result<Vec<StageBudget>, NoiseError> {
        self.trace(model, params)?
            .into_iter()
            .map(|StageMetric { stage, metric, modulus }| -> Result<StageBudget, NoiseError> {
                let bound = model.to_bound(params, metric)?;
                let budget = noise_budget(bound, &modulus)?;
                debug!(
                    "{self} n={} {stage}: log2(bound) = {:.3}, budget = {budget}",
                    params.n(),
                    bound.log2()
                );
                Ok(StageBudget { stage, budget })
            })
            .collect()
    }
}

fn clp20<M: NoiseModel>(model: &M, params: &SchemeParams) -> Result<Vec<StageMetric>, NoiseError> {
    let q = *params.q();
    let fresh = model.fresh(params);
    let add = model.add(params, fresh, fresh);
    let mult = model.mult(params, add, fresh);

    let mut trace = vec![
        StageMetric { stage: Stage::Fresh, metric: fresh, modulus: q },
        StageMetric { stage: Stage::Add, metric: add, modulus: q },
        StageMetric { stage: Stage::Mult, metric: mult, modulus: q },
    ];
    if let Some(p) = params.mod_switch_modulus() {
        let switched = model.mod_switch(params, p, mult)?;
        trace.push(StageMetric {
            stage: Stage::ModSwitch,
            metric: switched,
            modulus: *p,
        });
    }
    Ok(trace)
}

fn bgv_deep<M: NoiseModel>(model: &M, params: &SchemeParams) -> Vec<StageMetric> {
    let q = *params.q();
    let mut current = model.fresh(params);
    let mut trace = vec![StageMetric {
        stage: Stage::Fresh,
        metric: current,
        modulus: q,
    }];
    for level in 1..=BGV_DEEP_SQUARINGS {
        current = model.mult(params, current, current);
        trace.push(StageMetric {
            stage: Stage::Squaring(level),
            metric: current,
            modulus: q,
        });
    }
    trace
}

/// Noise budgets of `circuit` under the chosen estimate.
pub fn estimate(
    circuit: Circuit,
    estimate: Estimate,
    params: &SchemeParams,
) -> Result<Vec<StageBudget>, NoiseError> {
    match estimate {
        Estimate::WorstCase => circuit.budgets(&WorstCase, params),
        Estimate::AverageCase => circuit.budgets(&AverageCase, params),
    }
}

/// Worst-case budgets for the CLP20 circuit: 3 stages, or 4 when `n > 2048`.
pub fn worst_case_clp20(params: &SchemeParams) -> Result<Vec<StageBudget>, NoiseError> {
    Circuit::Clp20.budgets(&WorstCase, params)
}

/// Average-case budgets for the CLP20 circuit: 3 stages, or 4 when `n > 2048`.
pub fn average_case_clp20(params: &SchemeParams) -> Result<Vec<StageBudget>, NoiseError> {
    Circuit::Clp20.budgets(&AverageCase, params)
}

/// Worst-case budgets for the deep circuit, always 4 stages.
pub fn worst_case_bgv_deep(params: &SchemeParams) -> Result<Vec<StageBudget>, NoiseError> {
    Circuit::BgvDeep.budgets(&WorstCase, params)
}

/// Average-case budgets for the deep circuit, always 4 stages.
pub fn average_case_bgv_deep(params: &SchemeParams) -> Result<Vec<StageBudget>, NoiseError> {
    Circuit::BgvDeep.budgets(&AverageCase, params)
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Circuit::Clp20 => f.write_str("[CLP20]"),
            Circuit::BgvDeep => f.write_str("bgv deep"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fresh => f.write_str("fresh"),
            Stage::Add => f.write_str("add"),
            Stage::Mult => f.write_str("mult"),
            Stage::ModSwitch => f.write_str("mod_switch"),
            Stage::Squaring(level) => write!(f, "mult{level}"),
        }
    }
}
