//! Evaluation of a catalog into budget tables.

use log::{debug, info};
use noise_model::{Circuit, Estimate, StageBudget, estimate};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, TableSpec};
use crate::error::ReportError;

/// Budgets for every table of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub tables: Vec<TableReport>,
}

/// Budgets for one table, rows in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    pub title: String,
    pub circuit: Circuit,
    pub estimate: Estimate,
    pub rows: Vec<RowReport>,
}

/// Budgets of one parameter set after each stage of the table's circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    pub parameter_set: String,
    pub n: u32,
    pub stages: Vec<StageBudget>,
}

/// Evaluate every table of the catalog.
pub fn evaluate(catalog: &Catalog) -> Result<Report, ReportError> {
    let tables = catalog
        .tables()
        .iter()
        .map(|table| evaluate_table(catalog, table))
        .collect::<Result<_, _>>()?;
    Ok(Report { tables })
}

fn evaluate_table(catalog: &Catalog, table: &TableSpec) -> Result<TableReport, ReportError> {
    info!(
        "Evaluating {} {} estimates for {} parameter sets: {}",
        table.circuit,
        table.estimate,
        table.rows.len(),
        table.title
    );
    let rows = catalog
        .rows(table)
        .map(|set| -> Result<RowReport, ReportError> {
            let stages = estimate(table.circuit, table.estimate, &set.params).map_err(|source| {
                ReportError::Estimate {
                    table: table.title.clone(),
                    parameter_set: set.name.clone(),
                    source,
                }
            })?;
            debug!(
                "{}: {:?}",
                set.name,
                stages.iter().map(|s| s.budget).collect::<Vec<_>>()
            );
            Ok(RowReport {
                parameter_set: set.name.clone(),
                n: set.params.n(),
                stages,
            })
        })
        .collect::<Result<_, _>>()?;

    Ok(TableReport {
        title: table.title.clone(),
        circuit: table.circuit,
        estimate: table.estimate,
        rows,
    })
}
