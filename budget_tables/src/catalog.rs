//! Parameter catalogs and the tables built from them.

use std::collections::HashSet;

use noise_model::{Circuit, Estimate, Modulus, SchemeParams};
use serde::{Deserialize, Deserializer};

use crate::error::CatalogError;

/// HElib and SEAL parameter sets with the eight comparison tables built from
/// them.
pub const REFERENCE_CATALOG: &str = include_str!("../catalog/reference.toml");

/// A named parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub name: String,
    pub params: SchemeParams,
}

/// A table: one circuit, one estimate, one row per parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    pub title: String,
    pub circuit: Circuit,
    pub estimate: Estimate,
    pub rows: Vec<String>,
}

/// A validated catalog. Every table row names a defined parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    parameter_sets: Vec<ParameterSet>,
    tables: Vec<TableSpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default, rename = "parameter_set")]
    parameter_sets: Vec<RawParameterSet>,
    #[serde(default, rename = "table")]
    tables: Vec<TableSpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameterSet {
    name: String,
    n: u32,
    t: u64,
    q: Modulus,
    #[serde(default, deserialize_with = "switch_modulus")]
    p: Option<Modulus>,
}

/// `p = 0` (or `0.0`) is the conventional marker for "no modulus switching".
fn switch_modulus<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Modulus>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Integer(u64),
        Float(f64),
        Literal(String),
    }

    let modulus = match Raw::deserialize(deserializer)? {
        Raw::Integer(0) => return Ok(None),
        Raw::Float(value) if value == 0.0 => return Ok(None),
        Raw::Integer(value) => Modulus::from_u64(value),
        Raw::Float(value) => Modulus::from_f64(value),
        Raw::Literal(literal) => literal.parse(),
    };
    modulus.map(Some).map_err(serde::de::Error::custom)
}

impl Catalog {
    /// Parse and validate a catalog from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(source).map_err(CatalogError::Syntax)?;

        let mut names = HashSet::new();
        let parameter_sets = raw
            .parameter_sets
            .into_iter()
            .map(|set| {
                if !names.insert(set.name.clone()) {
                    return Err(CatalogError::DuplicateParameterSet(set.name));
                }
                match SchemeParams::new(set.n, set.t, set.q, set.p) {
                    Ok(params) => Ok(ParameterSet {
                        name: set.name,
                        params,
                    }),
                    Err(source) => Err(CatalogError::InvalidParameters {
                        name: set.name,
                        source,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        for table in &raw.tables {
            if table.rows.is_empty() {
                return Err(CatalogError::EmptyTable(table.title.clone()));
            }
            if let Some(unknown) = table.rows.iter().find(|row| !names.contains(*row)) {
                return Err(CatalogError::UnknownParameterSet {
                    table: table.title.clone(),
                    parameter_set: unknown.clone(),
                });
            }
        }

        Ok(Self {
            parameter_sets,
            tables: raw.tables,
        })
    }

    /// The built-in HElib/SEAL catalog.
    pub fn reference() -> Result<Self, CatalogError> {
        Self::from_toml_str(REFERENCE_CATALOG)
    }

    /// Parameter sets in definition order.
    pub fn parameter_sets(&self) -> &[ParameterSet] {
        &self.parameter_sets
    }

    /// Look up a parameter set by name.
    pub fn parameter_set(&self, name: &str) -> Option<&ParameterSet> {
        self.parameter_sets.iter().find(|set| set.name == name)
    }

    /// Parameter sets of a table's rows, in row order. Construction rejects
    /// rows naming unknown sets, so every row resolves.
    pub fn rows<'a>(&'a self, table: &'a TableSpec) -> impl Iterator<Item = &'a ParameterSet> {
        table.rows.iter().filter_map(|name| self.parameter_set(name))
    }

    /// Tables in definition order.
    pub fn tables(&self) -> &[TableSpec] {
        &self.tables
    }
}
